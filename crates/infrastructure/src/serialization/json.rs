//! JSON and YAML helpers for snapshot files.

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// JSON deserialization failed.
    #[error("JSON deserialization failed: {0}")]
    Deserialize(serde_json::Error),

    /// YAML deserialization failed.
    #[error("YAML deserialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// On-disk format of a snapshot file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    /// `.json` files.
    Json,
    /// `.yaml` / `.yml` files.
    Yaml,
}

impl SnapshotFormat {
    /// Picks the format from the file extension. Anything that is not
    /// `yaml`/`yml` (case-insensitive) is read as JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }

    /// Deserializes `content` in this format.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is invalid or doesn't match the expected type.
    pub fn parse<T: DeserializeOwned>(self, content: &str) -> Result<T, SerializationError> {
        match self {
            Self::Json => from_json(content),
            Self::Yaml => from_yaml(content),
        }
    }
}

/// Serializes a value to deterministic JSON.
///
/// Output format:
/// - 2-space indentation
/// - Trailing newline
/// - Keys sorted alphabetically (requires `BTreeMap` in source types)
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_stable<T: Serialize>(value: &T) -> Result<String, SerializationError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    let mut json = String::from_utf8(buffer)?;
    json.push('\n');
    Ok(json)
}

/// Deserializes JSON from a string.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or doesn't match the expected type.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, SerializationError> {
    serde_json::from_str(json).map_err(SerializationError::Deserialize)
}

/// Deserializes YAML from a string.
///
/// # Errors
///
/// Returns an error if the YAML is invalid or doesn't match the expected type.
pub fn from_yaml<T: DeserializeOwned>(yaml: &str) -> Result<T, SerializationError> {
    Ok(serde_yaml::from_str(yaml)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_stable_serialization_format() {
        let mut map = BTreeMap::new();
        map.insert("zebra", 1);
        map.insert("apple", 2);

        let json = to_json_stable(&map).expect("serialization should work");
        assert!(json.ends_with('\n'));
        assert!(json.contains("  \"apple\""));
        let apple_pos = json.find("apple").expect("apple should be in json");
        let zebra_pos = json.find("zebra").expect("zebra should be in json");
        assert!(apple_pos < zebra_pos);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            SnapshotFormat::from_path(Path::new("registry.yaml")),
            SnapshotFormat::Yaml
        );
        assert_eq!(
            SnapshotFormat::from_path(Path::new("registry.YML")),
            SnapshotFormat::Yaml
        );
        assert_eq!(
            SnapshotFormat::from_path(Path::new("registry.json")),
            SnapshotFormat::Json
        );
        assert_eq!(
            SnapshotFormat::from_path(Path::new("registry")),
            SnapshotFormat::Json
        );
    }

    #[test]
    fn test_parse_both_formats() {
        let from_json: BTreeMap<String, u32> =
            SnapshotFormat::Json.parse(r#"{"a": 1}"#).unwrap();
        let from_yaml: BTreeMap<String, u32> = SnapshotFormat::Yaml.parse("a: 1\n").unwrap();
        assert_eq!(from_json, from_yaml);
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let result: Result<BTreeMap<String, u32>, _> = from_json(r#"{"a": }"#);
        assert!(matches!(result, Err(SerializationError::Deserialize(_))));
    }
}
