//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The run reference token cannot be decoded.
    #[error("malformed run reference '{token}': {reason}")]
    MalformedReference {
        /// The offending token.
        token: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The variable name of a run reference is invalid.
    #[error("invalid variable name: '{0}'")]
    InvalidVariableName(String),
}

impl DomainError {
    /// Builds a [`DomainError::MalformedReference`] for `token`.
    pub fn malformed(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedReference {
            token: token.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_message_names_the_token() {
        let err = DomainError::malformed("job#abc", "build number is not a base-10 integer");
        let message = err.to_string();
        assert!(message.contains("'job#abc'"));
        assert!(message.contains("base-10"));
    }
}
