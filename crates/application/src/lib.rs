//! Runref Application - Ports and use cases
//!
//! Resolution and projection only depend on the [`ports::JobRegistry`] and
//! [`ports::EnvSink`] traits; the host (or the infrastructure crate) supplies
//! the implementations.

pub mod error;
pub mod ports;
pub mod use_cases;

pub use error::{ResolveError, ResolveResult};
pub use ports::{EnvSink, Job, JobLookup, JobRegistry};
pub use use_cases::{ProjectEnvironment, ResolveRun};
