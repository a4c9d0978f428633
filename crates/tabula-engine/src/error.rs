//! Error types for the engine crate.

use thiserror::Error;

/// Errors raised while building or mutating list configuration.
///
/// Evaluation itself (search, filters, pagination) never fails: malformed
/// data degrades to "does not match" or an empty page instead.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Two filter specs share the same name.
    #[error("duplicate filter spec '{0}'")]
    DuplicateFilter(String),

    /// An intent referenced a filter spec that was never declared.
    #[error("no filter spec named '{0}'")]
    UnknownFilter(String),

    /// An intent targeted a filter spec of the wrong kind.
    #[error("filter '{name}' is not a {expected} filter")]
    KindMismatch {
        name: String,
        expected: &'static str,
    },

    /// The per-page option list is empty or contains zero.
    #[error("per-page options must be a non-empty list of positive values")]
    InvalidPerPageOptions,

    /// A requested items-per-page value is outside the declared option set.
    #[error("items-per-page {value} is not one of the allowed options {allowed:?}")]
    PerPageNotAllowed { value: usize, allowed: Vec<usize> },

    /// A chosen exact-match value is outside the spec's declared option set.
    #[error("'{value}' is not a declared option of filter '{name}'")]
    OptionNotAllowed { name: String, value: String },
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
