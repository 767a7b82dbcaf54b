//! Registry snapshot files.
//!
//! A snapshot lists the jobs, their builds and the non-buildable items of a
//! host at one point in time:
//!
//! ```json
//! {
//!   "folders": ["team"],
//!   "jobs": [
//!     { "name": "team/deploy", "builds": [{ "number": 3 }, { "number": 4, "building": true }] }
//!   ]
//! }
//! ```
//!
//! A build without a `url` gets the host's default `job/<segment>/.../<number>/` URL.

use std::fs;
use std::path::Path;

use runref_application::ports::Job;
use runref_domain::BuildRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{InMemoryJobRegistry, RegistryError};
use crate::serialization::{SnapshotFormat, to_json_stable};

/// Serialized form of a whole registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// Names of items that cannot hold builds.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub folders: Vec<String>,

    /// Jobs with their build history.
    #[serde(default)]
    pub jobs: Vec<JobEntry>,
}

/// One job in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobEntry {
    /// Full name of the job.
    pub name: String,

    /// Builds of the job.
    #[serde(default)]
    pub builds: Vec<BuildEntry>,
}

/// One build in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildEntry {
    /// Build number.
    pub number: u32,

    /// Relative URL; derived from the job name when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// True while the build is running.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub building: bool,
}

impl RegistrySnapshot {
    /// Builds an in-memory registry from this snapshot.
    ///
    /// # Errors
    /// Returns [`RegistryError::Duplicate`] if two items share a name.
    pub fn into_registry(self) -> Result<InMemoryJobRegistry, RegistryError> {
        let registry = InMemoryJobRegistry::new();
        for folder in self.folders {
            registry.insert_folder(folder)?;
        }
        for job in self.jobs {
            registry.insert_job(job.name.clone())?;
            for build in job.builds {
                let record = match build.url {
                    Some(url) => BuildRecord::new(job.name.clone(), build.number, url),
                    None => BuildRecord::at_default_url(job.name.clone(), build.number),
                };
                registry.record_build(record.with_building(build.building))?;
            }
        }
        Ok(registry)
    }

    /// Captures the current content of a registry. Build URLs are always
    /// written out explicitly.
    #[must_use]
    pub fn capture(registry: &InMemoryJobRegistry) -> Self {
        let jobs = registry
            .jobs()
            .iter()
            .map(|job| JobEntry {
                name: job.full_name().to_string(),
                builds: job
                    .builds()
                    .map(|build| BuildEntry {
                        number: build.number,
                        url: Some(build.url.clone()),
                        building: build.building,
                    })
                    .collect(),
            })
            .collect();

        Self {
            folders: registry.folders(),
            jobs,
        }
    }
}

/// Loads a registry from a JSON or YAML snapshot file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or if it names the
/// same item twice.
pub fn load_registry(path: &Path) -> Result<InMemoryJobRegistry, RegistryError> {
    let content = fs::read_to_string(path).map_err(|source| RegistryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let snapshot: RegistrySnapshot = SnapshotFormat::from_path(path)
        .parse(&content)
        .map_err(|source| RegistryError::Serialization {
            path: path.to_path_buf(),
            source,
        })?;

    let registry = snapshot.into_registry()?;
    debug!(path = %path.display(), items = registry.len(), "loaded registry snapshot");
    Ok(registry)
}

/// Writes a registry to a JSON snapshot file.
///
/// Writes to a temporary file first and then renames it into place so a
/// partial write never leaves a truncated snapshot behind.
///
/// # Errors
/// Returns an error if the snapshot cannot be rendered or written.
pub fn save_registry(path: &Path, registry: &InMemoryJobRegistry) -> Result<(), RegistryError> {
    let json = to_json_stable(&RegistrySnapshot::capture(registry)).map_err(|source| {
        RegistryError::Serialization {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, json).map_err(|source| RegistryError::Io {
        path: tmp_path.clone(),
        source,
    })?;
    fs::rename(&tmp_path, path).map_err(|source| RegistryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), items = registry.len(), "saved registry snapshot");
    Ok(())
}
