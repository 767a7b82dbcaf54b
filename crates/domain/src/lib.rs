//! Runref Domain - Core types
//!
//! This crate defines run references, the token codec, build records and
//! projected environment variables. All types here are pure Rust with no
//! I/O dependencies.

pub mod build;
pub mod environment;
pub mod error;
pub mod reference;
pub mod token;

pub use build::{BuildRecord, default_build_url, default_job_url};
pub use environment::{EnvVars, join_url};
pub use error::{DomainError, DomainResult};
pub use reference::RunReference;
pub use token::{DecodedToken, build_number_of, decode, encode, job_name_of};
