//! Serialization helpers for registry snapshots.
//!
//! JSON output is deterministic (2-space indentation, trailing newline,
//! keys sorted via `BTreeMap` in the snapshot types). YAML is accepted on
//! input only.

mod json;

pub use json::*;
