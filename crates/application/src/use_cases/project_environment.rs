//! Project environment use case

use runref_domain::{RunReference, join_url};
use tracing::debug;

use crate::error::{ResolveError, ResolveResult};
use crate::ports::{EnvSink, JobRegistry};

use super::ResolveRun;

/// Exposes a resolved run reference as environment variables.
///
/// For a reference named `RUN` the sink receives:
///
/// | key | value |
/// |---|---|
/// | `RUN` | root URL joined with the build URL |
/// | `RUN.jobName` | job name, split at the first `#` |
/// | `RUN.number` | build number text, split at the first `#` |
/// | `RUN` upper-cased | same as `RUN` |
pub struct ProjectEnvironment<R> {
    resolver: ResolveRun<R>,
}

impl<R: JobRegistry> ProjectEnvironment<R> {
    /// Creates a new `ProjectEnvironment` use case.
    pub const fn new(registry: R) -> Self {
        Self {
            resolver: ResolveRun::new(registry),
        }
    }

    /// Executes the use case.
    ///
    /// `root_url` is the host's own address; it is joined to the build URL
    /// with a single `/`.
    ///
    /// # Errors
    /// Propagates any [`ResolveError`] from resolution. The sink is left
    /// untouched on error.
    pub fn execute<S>(
        &self,
        reference: &RunReference,
        root_url: &str,
        sink: &mut S,
    ) -> ResolveResult<()>
    where
        S: EnvSink + ?Sized,
    {
        let build = self.resolver.execute(reference.token())?;
        let url = join_url(root_url, build.url());

        let job_name = reference.job_name().to_string();
        // Resolution succeeded, so the token has at least one '#'.
        let number = reference
            .number()
            .ok_or_else(|| ResolveError::MalformedReference {
                token: reference.token().to_string(),
                reason: "missing '#' separator".to_string(),
            })?
            .to_string();

        sink.put(reference.name().to_string(), url.clone());
        sink.put(reference.job_name_key(), job_name);
        sink.put(reference.number_key(), number);
        sink.put(reference.legacy_key(), url);

        debug!(variable = %reference.name(), token = %reference.token(), "projected run reference");
        Ok(())
    }
}
