//! Application use cases (resolution and projection).

mod project_environment;
mod resolve_run;

#[cfg(test)]
mod fixtures;

pub use project_environment::ProjectEnvironment;
pub use resolve_run::ResolveRun;
