//! Application error types

use runref_domain::DomainError;
use thiserror::Error;

/// Errors raised while resolving or projecting a run reference.
///
/// Each error ends the attempt that raised it; nothing is retried and no
/// fallback value is substituted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The token cannot be decoded.
    #[error("malformed run reference '{token}': {reason}")]
    MalformedReference {
        /// The offending token.
        token: String,
        /// What is wrong with it.
        reason: String,
    },

    /// No buildable job has this full name.
    #[error("no such job: {job_name}")]
    JobNotFound {
        /// Full name looked up in the registry.
        job_name: String,
    },

    /// The job exists but has no build with this number.
    #[error("no build #{build_number} in job {job_name}")]
    BuildNotFound {
        /// Full name of the job.
        job_name: String,
        /// Requested build number.
        build_number: u32,
    },
}

impl ResolveError {
    /// Reports `token` as malformed, keeping the reason given by `error`.
    #[must_use]
    pub fn malformed(token: &str, error: DomainError) -> Self {
        let reason = match error {
            DomainError::MalformedReference { reason, .. } => reason,
            other => other.to_string(),
        };
        Self::MalformedReference {
            token: token.to_string(),
            reason,
        }
    }
}

/// Result type alias for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_malformed_keeps_token_and_reason() {
        let err = ResolveError::malformed("job#x", DomainError::malformed("job#x", "bad number"));
        assert_eq!(
            err,
            ResolveError::MalformedReference {
                token: "job#x".to_string(),
                reason: "bad number".to_string(),
            }
        );
    }

    #[test]
    fn test_malformed_folds_other_domain_errors() {
        let err = ResolveError::malformed("job#1", DomainError::InvalidVariableName(String::new()));
        match err {
            ResolveError::MalformedReference { token, reason } => {
                assert_eq!(token, "job#1");
                assert_eq!(reason, DomainError::InvalidVariableName(String::new()).to_string());
            }
            other => panic!("expected MalformedReference, got {other:?}"),
        }
    }

    #[test]
    fn test_messages_carry_diagnostics() {
        let err = ResolveError::BuildNotFound {
            job_name: "deploy".to_string(),
            build_number: 12,
        };
        assert_eq!(err.to_string(), "no build #12 in job deploy");

        let err = ResolveError::JobNotFound {
            job_name: "ghost".to_string(),
        };
        assert_eq!(err.to_string(), "no such job: ghost");
    }
}
