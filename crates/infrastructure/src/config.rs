//! Host configuration read from the process environment.

use std::path::PathBuf;

use url::Url;

/// Variable holding the host's root URL.
pub const ROOT_URL_VAR: &str = "RUNREF_ROOT_URL";

/// Variable holding the path of the registry snapshot.
pub const REGISTRY_VAR: &str = "RUNREF_REGISTRY";

/// Errors that can occur while reading the configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("{0} is not set")]
    Missing(&'static str),

    /// The root URL cannot be parsed.
    #[error("invalid root URL '{value}': {reason}")]
    InvalidRootUrl {
        /// Raw value of the variable.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Settings supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Absolute root URL, always ending with `/`.
    pub root_url: Url,

    /// Registry snapshot file.
    pub registry_path: PathBuf,
}

impl HostConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    /// Returns an error if a variable is missing or the root URL is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// # Errors
    /// Returns an error if a variable is missing or the root URL is invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = lookup(ROOT_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::Missing(ROOT_URL_VAR))?;
        let registry_path = lookup(REGISTRY_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .ok_or(ConfigError::Missing(REGISTRY_VAR))?;

        Ok(Self {
            root_url: parse_root_url(raw_url.trim())?,
            registry_path,
        })
    }

    /// Root URL as a string, ending with `/`.
    #[must_use]
    pub fn root_url(&self) -> &str {
        self.root_url.as_str()
    }
}

/// Parses an absolute `http`/`https` URL and makes its path end with `/`.
///
/// # Errors
/// Returns [`ConfigError::InvalidRootUrl`] for relative URLs, other schemes,
/// or URLs carrying a query or fragment.
pub fn parse_root_url(value: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidRootUrl {
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let mut url = Url::parse(value).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed"));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
