//! Runref host wiring.
//!
//! Connects the snapshot registry and host configuration to the projection
//! use case. The binary in `main.rs` only adds logging.

pub mod cli;

pub use cli::Cli;

use runref_application::{ProjectEnvironment, ResolveError};
use runref_domain::{DomainError, EnvVars, RunReference};
use runref_infrastructure::{ConfigError, HostConfig, RegistryError, load_registry};
use tracing::info;

/// Errors reported by the command-line host.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Host configuration is missing or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The registry snapshot cannot be loaded.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The reference itself is invalid.
    #[error(transparent)]
    Reference(#[from] DomainError),

    /// The reference does not resolve.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Loads the registry named by `config` and projects `reference`.
///
/// # Errors
/// Returns an error if the registry cannot be loaded or the reference does
/// not resolve. No variables are returned in that case.
pub fn project(config: &HostConfig, reference: &RunReference) -> Result<EnvVars, AppError> {
    let registry = load_registry(&config.registry_path)?;
    let use_case = ProjectEnvironment::new(registry);

    let mut vars = EnvVars::new();
    use_case.execute(reference, config.root_url(), &mut vars)?;

    info!(
        variable = %reference.name(),
        token = %reference.token(),
        count = vars.len(),
        "run reference projected"
    );
    Ok(vars)
}
