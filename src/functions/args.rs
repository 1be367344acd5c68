use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::foundation::error::{SchemeError, SchemeResult};

/// Editor widget type of a function argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgType {
    /// Free text.
    Text,
    /// Any JSON value.
    Object,
    /// Checkbox.
    Boolean,
    /// Number input.
    Number,
    /// One of `options`.
    Choice,
    /// Color picker.
    Color,
}

/// Show an argument only while another boolean argument has a given value.
///
/// This is presentation data; execution never consults it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArgDependency {
    /// Key of the controlling argument.
    pub arg: &'static str,
    /// Value the controlling argument must have.
    pub equals: bool,
}

impl Serialize for ArgDependency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.arg, &self.equals)?;
        map.end()
    }
}

/// Schema of one function argument.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArgSpec {
    /// Label shown to users.
    pub name: &'static str,
    /// Widget type.
    #[serde(rename = "type")]
    pub kind: ArgType,
    /// Default value.
    pub value: Value,
    /// Allowed values for [`ArgType::Choice`].
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<&'static str>,
    /// Visibility condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depends: Option<ArgDependency>,
    /// Longer help text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

impl ArgSpec {
    /// Argument with a name, type and default value.
    pub fn new(name: &'static str, kind: ArgType, value: Value) -> Self {
        Self {
            name,
            kind,
            value,
            options: Vec::new(),
            depends: None,
            description: None,
        }
    }

    /// Restrict the argument to `options`.
    pub fn with_options(mut self, options: &[&'static str]) -> Self {
        self.options = options.to_vec();
        self
    }

    /// Only show the argument while `arg == equals`.
    pub fn depends_on(mut self, arg: &'static str, equals: bool) -> Self {
        self.depends = Some(ArgDependency { arg, equals });
        self
    }

    /// Attach help text.
    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}

/// Display name and ordered argument schema of an event function.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDescriptor {
    /// Display name.
    pub name: &'static str,
    /// Arguments keyed by their argument key, in display order.
    pub args: Vec<(&'static str, ArgSpec)>,
}

impl FunctionDescriptor {
    /// Schema of the argument `key`.
    pub fn arg(&self, key: &str) -> Option<&ArgSpec> {
        self.args.iter().find(|(k, _)| *k == key).map(|(_, spec)| spec)
    }

    /// Arguments populated with every default value.
    pub fn default_args(&self) -> FunctionArgs {
        let mut args = FunctionArgs::new();
        for (key, spec) in &self.args {
            args.insert(*key, spec.value.clone());
        }
        args
    }
}

impl Serialize for FunctionDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Args<'a>(&'a [(&'static str, ArgSpec)]);

        impl Serialize for Args<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for (key, spec) in self.0 {
                    map.serialize_entry(key, spec)?;
                }
                map.end()
            }
        }

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("name", self.name)?;
        map.serialize_entry("args", &Args(&self.args))?;
        map.end()
    }
}

/// Argument values passed to a function invocation.
///
/// Keys that are absent fall back to each function's own defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FunctionArgs(Map<String, Value>);

impl FunctionArgs {
    /// No arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arguments from a JSON object.
    pub fn from_value(value: Value) -> SchemeResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(SchemeError::validation(format!(
                "function arguments must be a JSON object, got {other}"
            ))),
        }
    }

    /// Builder-style [`FunctionArgs::insert`].
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// Return `true` if `key` is present, even when its value is `null`.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Raw value of `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Decode into a typed argument struct.
    pub fn decode<T: DeserializeOwned>(&self) -> SchemeResult<T> {
        serde_json::from_value(Value::Object(self.0.clone()))
            .map_err(|e| SchemeError::validation(format!("decode function arguments: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/functions/args.rs"]
mod tests;
