//! Resolve run use case

use runref_domain::{BuildRecord, token};
use tracing::debug;

use crate::error::{ResolveError, ResolveResult};
use crate::ports::{Job, JobLookup, JobRegistry};

/// Resolves a `<jobName>#<buildNumber>` token to a build record.
///
/// Every call reads the registry afresh; nothing is cached between calls.
pub struct ResolveRun<R> {
    registry: R,
}

impl<R: JobRegistry> ResolveRun<R> {
    /// Creates a new `ResolveRun` use case.
    pub const fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Executes the use case.
    ///
    /// # Errors
    /// - [`ResolveError::MalformedReference`] if the token cannot be decoded.
    /// - [`ResolveError::JobNotFound`] if no buildable job has the decoded name.
    /// - [`ResolveError::BuildNotFound`] if the job has no such build.
    pub fn execute(&self, token: &str) -> ResolveResult<BuildRecord> {
        let decoded = token::decode(token).map_err(|err| ResolveError::malformed(token, err))?;

        let job = match self.registry.find_job_by_full_name(&decoded.job_name) {
            JobLookup::Buildable(job) => job,
            JobLookup::NotBuildable { kind } => {
                debug!(job = %decoded.job_name, %kind, "item is not a buildable job");
                return Err(ResolveError::JobNotFound {
                    job_name: decoded.job_name,
                });
            }
            JobLookup::NotFound => {
                debug!(job = %decoded.job_name, "job not found");
                return Err(ResolveError::JobNotFound {
                    job_name: decoded.job_name,
                });
            }
        };

        let Some(build) = job.find_build_by_number(decoded.build_number) else {
            debug!(
                job = %decoded.job_name,
                number = decoded.build_number,
                "build not found"
            );
            return Err(ResolveError::BuildNotFound {
                job_name: decoded.job_name,
                build_number: decoded.build_number,
            });
        };

        debug!(
            job = %job.full_name(),
            number = build.number,
            url = %build.url,
            "resolved run reference"
        );
        Ok(build)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::use_cases::fixtures::MockRegistry;
    use pretty_assertions::assert_eq;

    fn registry() -> MockRegistry {
        MockRegistry::new()
            .with_job("myjob", &[(3, "/job/myjob/3/"), (4, "/job/myjob/4/")])
            .with_job("team#1/job", &[(42, "job/team%231/job/job/42/")])
            .with_folder("team")
    }

    #[test]
    fn test_resolve_existing_build() {
        let use_case = ResolveRun::new(registry());
        let build = use_case.execute("myjob#3").expect("should resolve");
        assert_eq!(build.number, 3);
        assert_eq!(build.url(), "/job/myjob/3/");
    }

    #[test]
    fn test_resolve_uses_last_separator() {
        let use_case = ResolveRun::new(registry());
        let build = use_case.execute("team#1/job#42").expect("should resolve");
        assert_eq!(build.job_full_name, "team#1/job");
        assert_eq!(build.number, 42);
    }

    #[test]
    fn test_resolve_unknown_job() {
        let use_case = ResolveRun::new(registry());
        let err = use_case.execute("ghost#1").unwrap_err();
        assert_eq!(
            err,
            ResolveError::JobNotFound {
                job_name: "ghost".to_string()
            }
        );
    }

    #[test]
    fn test_resolve_non_buildable_item() {
        let use_case = ResolveRun::new(registry());
        let err = use_case.execute("team#1").unwrap_err();
        assert_eq!(
            err,
            ResolveError::JobNotFound {
                job_name: "team".to_string()
            }
        );
    }

    #[test]
    fn test_resolve_unknown_build() {
        let use_case = ResolveRun::new(registry());
        let err = use_case.execute("myjob#99").unwrap_err();
        assert_eq!(
            err,
            ResolveError::BuildNotFound {
                job_name: "myjob".to_string(),
                build_number: 99,
            }
        );
    }

    #[test]
    fn test_malformed_token_skips_registry() {
        let registry = registry();
        let use_case = ResolveRun::new(&registry);
        for token in ["no-hash-here", "#5", "myjob#abc", "myjob#3000000000"] {
            let err = use_case.execute(token).unwrap_err();
            match err {
                ResolveError::MalformedReference { token: reported, .. } => {
                    assert_eq!(reported, token);
                }
                other => panic!("{token}: expected MalformedReference, got {other:?}"),
            }
        }
        assert_eq!(registry.lookups.get(), 0);
    }

    #[test]
    fn test_every_call_reads_the_registry() {
        let registry = registry();
        let use_case = ResolveRun::new(&registry);
        use_case.execute("myjob#3").unwrap();
        use_case.execute("myjob#3").unwrap();
        assert_eq!(registry.lookups.get(), 2);
    }
}
