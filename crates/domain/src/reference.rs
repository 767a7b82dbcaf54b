//! Run reference parameter value

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::token::{self, DecodedToken, TOKEN_SEPARATOR};

/// Suffix of the variable exposing the job name.
pub const JOB_NAME_SUFFIX: &str = ".jobName";

/// Suffix of the variable exposing the build number.
pub const NUMBER_SUFFIX: &str = ".number";

/// A named pointer to one build of one job.
///
/// Created once when a parameter is bound and read-only afterwards. The token
/// is decoded on demand so a deleted job or build fails resolution instead of
/// returning stale data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RunReferenceFields")]
pub struct RunReference {
    name: String,
    token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

#[derive(Deserialize)]
struct RunReferenceFields {
    name: String,
    token: String,
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<RunReferenceFields> for RunReference {
    type Error = DomainError;

    fn try_from(fields: RunReferenceFields) -> Result<Self, Self::Error> {
        Self::build(fields.name, fields.token, fields.description)
    }
}

impl RunReference {
    /// Creates a run reference without a description.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidVariableName`] for an empty name and
    /// [`DomainError::MalformedReference`] when the token has no `#` after
    /// a non-empty job name.
    pub fn new(name: impl Into<String>, token: impl Into<String>) -> DomainResult<Self> {
        Self::build(name.into(), token.into(), None)
    }

    /// Creates a run reference carrying a description.
    ///
    /// # Errors
    ///
    /// Same as [`RunReference::new`].
    pub fn with_description(
        name: impl Into<String>,
        token: impl Into<String>,
        description: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::build(name.into(), token.into(), Some(description.into()))
    }

    fn build(name: String, token: String, description: Option<String>) -> DomainResult<Self> {
        if name.is_empty() {
            return Err(DomainError::InvalidVariableName(name));
        }
        match token.rfind(TOKEN_SEPARATOR) {
            None => return Err(DomainError::malformed(token, "missing '#' separator")),
            Some(0) => return Err(DomainError::malformed(token, "job name is empty")),
            Some(_) => {}
        }

        Ok(Self {
            name,
            token,
            description,
        })
    }

    /// Base name under which the resolved values are exposed.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw `<jobName>#<buildNumber>` token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Informational description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Decodes the token (last `#` split).
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MalformedReference`] when the build number is
    /// not a base-10 integer.
    pub fn decode(&self) -> DomainResult<DecodedToken> {
        token::decode(&self.token)
    }

    /// Job name as exposed to the environment (first `#` split).
    #[must_use]
    pub fn job_name(&self) -> &str {
        token::job_name_of(&self.token)
    }

    /// Build number text as exposed to the environment (first `#` split).
    #[must_use]
    pub fn number(&self) -> Option<&str> {
        token::build_number_of(&self.token)
    }

    /// Key of the job name variable, `<name>.jobName`.
    #[must_use]
    pub fn job_name_key(&self) -> String {
        format!("{}{JOB_NAME_SUFFIX}", self.name)
    }

    /// Key of the build number variable, `<name>.number`.
    #[must_use]
    pub fn number_key(&self) -> String {
        format!("{}{NUMBER_SUFFIX}", self.name)
    }

    /// Upper-cased alias of the name, kept for consumers that predate the
    /// dotted variables. Uses the locale-independent Unicode mapping.
    #[must_use]
    pub fn legacy_key(&self) -> String {
        self.name.to_uppercase()
    }
}

impl fmt::Display for RunReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(RunReference) {}='{}'", self.name, self.token)
    }
}
