//! Event functions: the registry of named actions and their execution contract.
//!
//! An engine resolves a [`FunctionRef`] by category and name, then calls
//! [`FunctionRef::execute`] with the target item, argument values, an [`ExecCtx`] and a
//! [`ResultCallback`]. Every invocation runs the callback exactly once: immediately, or when the
//! animation it started is destroyed.

pub(crate) mod args;
pub(crate) mod set;

use std::fmt;

use serde_json::{Map, Value};

use crate::animation::AnimationRegistry;
use crate::foundation::core::ItemId;
use crate::foundation::error::{SchemeError, SchemeResult};
use crate::scheme::{EventBus, SchemeContainer, ShapeRegistry};

pub use args::{ArgDependency, ArgSpec, ArgType, FunctionArgs, FunctionDescriptor};

/// Completion signal handed to every invocation.
pub type ResultCallback = Box<dyn FnOnce()>;

/// Collaborators an event function may use.
pub struct ExecCtx<'a> {
    /// The document.
    pub container: &'a mut SchemeContainer,
    /// Item notifications.
    pub events: &'a mut EventBus,
    /// Animation scheduler.
    pub animations: &'a mut AnimationRegistry,
    /// Property schemas.
    pub shapes: &'a ShapeRegistry,
}

/// Function group: item functions or whole-document functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Functions applied to an item.
    Main,
    /// Functions applied to the whole scheme.
    Scheme,
}

impl Category {
    /// Both categories.
    pub const ALL: [Self; 2] = [Self::Main, Self::Scheme];

    /// Key used by scheme JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Scheme => "scheme",
        }
    }

    /// Parse a category key.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

/// Functions of the `main` category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MainFunction {
    /// Assign or animate one item property.
    Set,
}

impl MainFunction {
    /// Every `main` function.
    pub const ALL: [Self; 1] = [Self::Set];

    /// Registry key.
    pub fn key(self) -> &'static str {
        match self {
            Self::Set => "set",
        }
    }
}

/// Functions of the `scheme` category. None are defined yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SchemeFunction {}

impl SchemeFunction {
    /// Every `scheme` function.
    pub const ALL: [Self; 0] = [];

    /// Registry key.
    pub fn key(self) -> &'static str {
        match self {}
    }
}

/// Resolved reference to a registered function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FunctionRef {
    /// Item function.
    Main(MainFunction),
    /// Document function.
    Scheme(SchemeFunction),
}

impl fmt::Display for FunctionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.category().as_str(), self.key())
    }
}

impl FunctionRef {
    /// Resolve `name` in `category`, rejecting anything not registered.
    pub fn resolve(category: &str, name: &str) -> SchemeResult<Self> {
        FunctionRegistry::lookup(category, name)
            .ok_or_else(|| SchemeError::unknown_function(format!("{category}/{name}")))
    }

    /// Category of the function.
    pub fn category(self) -> Category {
        match self {
            Self::Main(_) => Category::Main,
            Self::Scheme(_) => Category::Scheme,
        }
    }

    /// Registry key of the function.
    pub fn key(self) -> &'static str {
        match self {
            Self::Main(f) => f.key(),
            Self::Scheme(f) => f.key(),
        }
    }

    /// Display name and argument schema.
    pub fn descriptor(self) -> FunctionDescriptor {
        match self {
            Self::Main(MainFunction::Set) => set::descriptor(),
            Self::Scheme(f) => match f {},
        }
    }

    /// Run the function. `done` is called exactly once.
    pub fn execute(
        self,
        item: Option<&ItemId>,
        args: &FunctionArgs,
        ctx: &mut ExecCtx<'_>,
        done: ResultCallback,
    ) {
        match self {
            Self::Main(MainFunction::Set) => set::execute(item, args, ctx, done),
            Self::Scheme(f) => match f {},
        }
    }
}

/// Static lookup table `category -> name -> function`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FunctionRegistry;

impl FunctionRegistry {
    /// Look up a function; `None` for unknown categories or names.
    pub fn lookup(category: &str, name: &str) -> Option<FunctionRef> {
        Self::functions(Category::parse(category)?)
            .into_iter()
            .find(|f| f.key() == name)
    }

    /// Every function registered under `category`.
    pub fn functions(category: Category) -> Vec<FunctionRef> {
        match category {
            Category::Main => MainFunction::ALL.into_iter().map(FunctionRef::Main).collect(),
            Category::Scheme => SchemeFunction::ALL
                .into_iter()
                .map(FunctionRef::Scheme)
                .collect(),
        }
    }

    /// The whole registry as `{category: {name: descriptor}}` JSON.
    pub fn catalog() -> SchemeResult<Value> {
        let mut out = Map::new();
        for category in Category::ALL {
            let mut entries = Map::new();
            for function in Self::functions(category) {
                let descriptor = serde_json::to_value(function.descriptor())
                    .map_err(|e| SchemeError::serde(format!("serialize {function}: {e}")))?;
                entries.insert(function.key().to_owned(), descriptor);
            }
            out.insert(category.as_str().to_owned(), Value::Object(entries));
        }
        Ok(Value::Object(out))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/functions/registry.rs"]
mod tests;
