//! Job registry adapters.

mod in_memory;
mod snapshot;

use std::path::PathBuf;

use crate::serialization::SerializationError;

pub use in_memory::{InMemoryJobRegistry, JobSnapshot};
pub use snapshot::{BuildEntry, JobEntry, RegistrySnapshot, load_registry, save_registry};

/// Errors that can occur while maintaining or loading a registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No job with this full name.
    #[error("Job not found: {0}")]
    JobNotFound(String),

    /// The item exists but cannot hold builds.
    #[error("Not a buildable job: {0}")]
    NotBuildable(String),

    /// Two items share a full name.
    #[error("Duplicate registry item: {0}")]
    Duplicate(String),

    /// The snapshot file could not be read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The snapshot file could not be parsed or rendered.
    #[error("Serialization error in {path}: {source}")]
    Serialization {
        /// File being processed.
        path: PathBuf,
        /// Underlying error.
        source: SerializationError,
    },
}
