//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the resolver and the host system.
//! Each port is a trait that can be implemented by adapters in the
//! infrastructure layer or directly by the host.

mod env_sink;
mod job_registry;

pub use env_sink::EnvSink;
pub use job_registry::{Job, JobLookup, JobRegistry};
