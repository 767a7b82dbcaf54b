//! Environment variable domain types

mod vars;

pub use vars::{EnvVars, join_url};
