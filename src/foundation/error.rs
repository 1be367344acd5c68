/// Convenience result type used across the crate.
pub type SchemeResult<T> = Result<T, SchemeError>;

/// Top-level error taxonomy for the fallible surfaces (document loading and function resolution).
///
/// Event functions themselves never fail: malformed input degrades to a no-op or an immediate
/// assignment, so none of these variants is produced while a function executes.
#[derive(thiserror::Error, Debug)]
pub enum SchemeError {
    /// Invalid user-provided scheme or argument data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A function reference named a category or function that is not registered.
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO, with context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SchemeError {
    /// Build a [`SchemeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SchemeError::UnknownFunction`] value.
    pub fn unknown_function(msg: impl Into<String>) -> Self {
        Self::UnknownFunction(msg.into())
    }

    /// Build a [`SchemeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
