//! Build records as exposed by a job registry

use serde::{Deserialize, Serialize};

/// One numbered execution of a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRecord {
    /// Full name of the owning job.
    pub job_full_name: String,

    /// Build number, unique within the job.
    pub number: u32,

    /// URL of the build relative to the host root, e.g. `job/myjob/3/`.
    pub url: String,

    /// True while the build is still running.
    #[serde(default)]
    pub building: bool,
}

impl BuildRecord {
    /// Creates a completed build record with an explicit relative URL.
    #[must_use]
    pub fn new(job_full_name: impl Into<String>, number: u32, url: impl Into<String>) -> Self {
        Self {
            job_full_name: job_full_name.into(),
            number,
            url: url.into(),
            building: false,
        }
    }

    /// Creates a completed build record whose URL follows the host's
    /// `job/<segment>/.../<number>/` layout.
    #[must_use]
    pub fn at_default_url(job_full_name: impl Into<String>, number: u32) -> Self {
        let job_full_name = job_full_name.into();
        let url = default_build_url(&job_full_name, number);
        Self::new(job_full_name, number, url)
    }

    /// Marks the build as running or finished.
    #[must_use]
    pub const fn with_building(mut self, building: bool) -> Self {
        self.building = building;
        self
    }

    /// Relative URL suffix of this build.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Relative URL of a job: every `/`-separated segment of the full name
/// becomes `job/<segment>/`.
#[must_use]
pub fn default_job_url(job_full_name: &str) -> String {
    job_full_name
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(String::new(), |mut url, segment| {
            url.push_str("job/");
            url.push_str(segment);
            url.push('/');
            url
        })
}

/// Relative URL of a build: the job URL followed by `<number>/`.
#[must_use]
pub fn default_build_url(job_full_name: &str, number: u32) -> String {
    format!("{}{number}/", default_job_url(job_full_name))
}
