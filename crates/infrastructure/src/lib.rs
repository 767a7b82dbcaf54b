//! Runref Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in the
//! application layer, plus snapshot files and host configuration.

pub mod config;
pub mod registry;
pub mod serialization;

pub use config::{ConfigError, HostConfig};
pub use registry::{
    BuildEntry, InMemoryJobRegistry, JobEntry, JobSnapshot, RegistryError, RegistrySnapshot,
    load_registry, save_registry,
};
pub use serialization::{SerializationError, SnapshotFormat, from_json, from_yaml, to_json_stable};
