#![forbid(unsafe_code)]

//! Error type for placement resolution.
//!
//! Resolution itself is total; the only failures are malformed input at the
//! untyped boundary ([`crate::GridPlacementResolver::resolve_raw`]) and
//! nonsensical configuration values.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LayoutError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl LayoutError {
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Whether this error came from caller-supplied input rather than setup.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::LayoutError;

    #[test]
    fn invalid_constructor_formats_message() {
        let error = LayoutError::invalid("count must not be negative, got -1");
        assert!(error.is_invalid_input());
        assert_eq!(
            error.to_string(),
            "invalid input: count must not be negative, got -1"
        );
    }

    #[test]
    fn config_errors_are_not_input_errors() {
        let error = LayoutError::config("desktop_column_cap must be at least 1");
        assert!(!error.is_invalid_input());
        assert_eq!(
            error.to_string(),
            "invalid configuration: desktop_column_cap must be at least 1"
        );
    }
}
