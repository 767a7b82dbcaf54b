//! Job registry port
//!
//! Read-only lookup of jobs and their builds in the host.

use std::sync::Arc;

use runref_domain::BuildRecord;

/// Outcome of looking up an item by full name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobLookup<J> {
    /// The item exists and is a job that records builds.
    Buildable(J),

    /// An item exists under this name but it does not record builds
    /// (a folder, a view, ...).
    NotBuildable {
        /// Host-specific kind of the item, for diagnostics.
        kind: String,
    },

    /// Nothing exists under this name.
    NotFound,
}

impl<J> JobLookup<J> {
    /// Returns the job if the item is buildable.
    #[must_use]
    pub fn buildable(self) -> Option<J> {
        match self {
            Self::Buildable(job) => Some(job),
            Self::NotBuildable { .. } | Self::NotFound => None,
        }
    }
}

/// A job with a numbered build history.
pub trait Job {
    /// Full name of the job, e.g. `team/deploy`.
    fn full_name(&self) -> &str;

    /// Looks up a build by number.
    ///
    /// Returns `None` if the build never existed or was deleted.
    fn find_build_by_number(&self, number: u32) -> Option<BuildRecord>;
}

impl<J: Job + ?Sized> Job for Arc<J> {
    fn full_name(&self) -> &str {
        (**self).full_name()
    }

    fn find_build_by_number(&self, number: u32) -> Option<BuildRecord> {
        (**self).find_build_by_number(number)
    }
}

/// Registry of all items known to the host.
///
/// Lookups read the registry as it is at call time. Implementations are
/// responsible for their own read safety.
pub trait JobRegistry {
    /// Job handle returned by lookups.
    type Job: Job;

    /// Looks up an item by its full name.
    fn find_job_by_full_name(&self, full_name: &str) -> JobLookup<Self::Job>;
}

impl<R: JobRegistry + ?Sized> JobRegistry for &R {
    type Job = R::Job;

    fn find_job_by_full_name(&self, full_name: &str) -> JobLookup<Self::Job> {
        (**self).find_job_by_full_name(full_name)
    }
}

impl<R: JobRegistry + ?Sized> JobRegistry for Arc<R> {
    type Job = R::Job;

    fn find_job_by_full_name(&self, full_name: &str) -> JobLookup<Self::Job> {
        (**self).find_job_by_full_name(full_name)
    }
}
