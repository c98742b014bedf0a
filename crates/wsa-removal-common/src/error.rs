//! Configuration errors
//!
//! Resolution itself never fails (every value has a placeholder). These
//! describe payload parts that were ignored so the caller can log them.

use thiserror::Error;

/// Invocation payload issues
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Payload was neither an object nor null
    #[error("Invocation payload must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// A recognised field held something other than a string
    #[error("Payload field {field} must be a string, got {found}")]
    NotAString {
        field: &'static str,
        found: &'static str,
    },
}
