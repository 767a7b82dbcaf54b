//! Projected environment variables

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Variables projected for downstream build steps.
///
/// Keys are unique and kept sorted so rendering is deterministic. Inserting an
/// existing key overwrites its value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvVars {
    vars: BTreeMap<String, String>,
}

impl EnvVars {
    /// Creates an empty variable set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a variable, returning the previous value if the key existed.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.vars.insert(key.into(), value.into())
    }

    /// Gets a variable value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Returns true if the key is set.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns true if there are no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterates over variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the underlying map.
    #[must_use]
    pub const fn as_map(&self) -> &BTreeMap<String, String> {
        &self.vars
    }
}

impl From<BTreeMap<String, String>> for EnvVars {
    fn from(vars: BTreeMap<String, String>) -> Self {
        Self { vars }
    }
}

/// Renders one `KEY=VALUE` line per variable.
impl fmt::Display for EnvVars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.vars {
            writeln!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

/// Joins a root URL and a relative suffix with exactly one `/` between them.
///
/// An empty root yields the suffix unchanged.
#[must_use]
pub fn join_url(root: &str, suffix: &str) -> String {
    if root.is_empty() {
        return suffix.to_string();
    }
    format!(
        "{}/{}",
        root.trim_end_matches('/'),
        suffix.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_insert_overwrites() {
        let mut vars = EnvVars::new();
        assert_eq!(vars.insert("RUN", "a"), None);
        assert_eq!(vars.insert("RUN", "b"), Some("a".to_string()));
        assert_eq!(vars.get("RUN"), Some("b"));
        assert_eq!(vars.len(), 1);
    }

    #[test]
    fn test_display_is_sorted() {
        let mut vars = EnvVars::new();
        vars.insert("b", "2");
        vars.insert("a", "1");
        assert_eq!(vars.to_string(), "a=1\nb=2\n");
    }

    #[test]
    fn test_join_url_collapses_slashes() {
        assert_eq!(
            join_url("https://ci.example.com/", "/job/myjob/3/"),
            "https://ci.example.com/job/myjob/3/"
        );
        assert_eq!(
            join_url("https://ci.example.com/", "job/myjob/3/"),
            "https://ci.example.com/job/myjob/3/"
        );
        assert_eq!(
            join_url("https://ci.example.com/jenkins", "job/myjob/3/"),
            "https://ci.example.com/jenkins/job/myjob/3/"
        );
    }

    #[test]
    fn test_join_url_with_empty_root() {
        assert_eq!(join_url("", "job/myjob/3/"), "job/myjob/3/");
    }
}
