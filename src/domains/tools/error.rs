//! Tool-specific error types.

use thiserror::Error;

/// A validation failure for user-supplied tool arguments.
///
/// Covers both malformed values (text that does not parse as a number) and
/// values outside a tool's documented bounds. Rendered to the caller as
/// error text in the tool's normal return channel; it never propagates past
/// the tool boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("❌ Error: {message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Create a new validation error with the given user-facing message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_failure_prefix() {
        let err = ValidationError::new("Please roll between 1 and 100 dice");
        assert_eq!(
            err.to_string(),
            "❌ Error: Please roll between 1 and 100 dice"
        );
    }
}
