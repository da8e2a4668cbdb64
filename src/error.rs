use thiserror::Error;

/// Errors raised while building a query expression.
///
/// Construction fails at the call that received the bad input; nothing is
/// deferred to serialization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// An object literal listed the same key twice
    #[error("Duplicate key in object literal: \"{0}\"")]
    DuplicateKey(String),

    /// A let binding listed the same variable twice
    #[error("Duplicate binding in let: \"{0}\"")]
    DuplicateBinding(String),

    /// A let binding used an empty name
    #[error("Variable name must not be empty")]
    EmptyVariableName,

    /// `let_` was given no bindings
    #[error("Let requires at least one binding")]
    EmptyBindings,

    /// `select` or `contains` was given no path terms
    #[error("{0} requires a non-empty path")]
    EmptyPath(&'static str),
}

/// Errors raised while decoding wire JSON into a [`Value`](crate::Value).
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The input text was not JSON at all
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A tagged object (`@ref`, `@ts`, `@date`) had an unusable payload
    #[error("Malformed {tag} value: {reason}")]
    MalformedTag { tag: &'static str, reason: String },

    /// The `{"object": ...}` envelope did not wrap a JSON object
    #[error("Malformed object envelope: expected a JSON object, found {0}")]
    MalformedEnvelope(&'static str),

    /// A number too large for a 64-bit signed integer
    #[error("Integer out of range: {0}")]
    IntegerOutOfRange(String),
}
