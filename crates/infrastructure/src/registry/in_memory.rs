//! In-memory job registry.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use runref_application::ports::{Job, JobLookup, JobRegistry};
use runref_domain::BuildRecord;

use super::RegistryError;

/// Point-in-time view of one job and its build history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSnapshot {
    full_name: String,
    builds: BTreeMap<u32, BuildRecord>,
}

impl JobSnapshot {
    /// Creates a job with no builds.
    #[must_use]
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            builds: BTreeMap::new(),
        }
    }

    /// Iterates over builds in ascending number order.
    pub fn builds(&self) -> impl Iterator<Item = &BuildRecord> {
        self.builds.values()
    }

    /// Highest build number, if any build exists.
    #[must_use]
    pub fn last_build_number(&self) -> Option<u32> {
        self.builds.keys().next_back().copied()
    }
}

impl Job for JobSnapshot {
    fn full_name(&self) -> &str {
        &self.full_name
    }

    fn find_build_by_number(&self, number: u32) -> Option<BuildRecord> {
        self.builds.get(&number).cloned()
    }
}

#[derive(Debug, Clone)]
enum RegistryItem {
    Job(Arc<JobSnapshot>),
    Folder,
}

/// Thread-safe registry held entirely in memory.
///
/// Lookups hand out `Arc<JobSnapshot>` so the lock is released before the
/// caller walks the build history. Writers copy a job on write when a
/// snapshot of it is still held by a reader.
#[derive(Debug, Default)]
pub struct InMemoryJobRegistry {
    items: RwLock<BTreeMap<String, RegistryItem>>,
}

impl InMemoryJobRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, RegistryItem>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, RegistryItem>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds an empty job.
    ///
    /// # Errors
    /// Returns [`RegistryError::Duplicate`] if the name is taken.
    pub fn insert_job(&self, full_name: impl Into<String>) -> Result<(), RegistryError> {
        let full_name = full_name.into();
        let mut items = self.write();
        if items.contains_key(&full_name) {
            return Err(RegistryError::Duplicate(full_name));
        }
        let job = Arc::new(JobSnapshot::new(full_name.clone()));
        items.insert(full_name, RegistryItem::Job(job));
        Ok(())
    }

    /// Adds an item that cannot hold builds, such as a folder.
    ///
    /// # Errors
    /// Returns [`RegistryError::Duplicate`] if the name is taken.
    pub fn insert_folder(&self, full_name: impl Into<String>) -> Result<(), RegistryError> {
        let full_name = full_name.into();
        let mut items = self.write();
        if items.contains_key(&full_name) {
            return Err(RegistryError::Duplicate(full_name));
        }
        items.insert(full_name, RegistryItem::Folder);
        Ok(())
    }

    /// Records a build under its job, replacing any build with the same number.
    ///
    /// # Errors
    /// Returns [`RegistryError::JobNotFound`] or [`RegistryError::NotBuildable`]
    /// if `build.job_full_name` does not name a job.
    pub fn record_build(&self, build: BuildRecord) -> Result<(), RegistryError> {
        let mut items = self.write();
        match items.get_mut(&build.job_full_name) {
            Some(RegistryItem::Job(job)) => {
                Arc::make_mut(job).builds.insert(build.number, build);
                Ok(())
            }
            Some(RegistryItem::Folder) => Err(RegistryError::NotBuildable(build.job_full_name)),
            None => Err(RegistryError::JobNotFound(build.job_full_name)),
        }
    }

    /// Deletes a build, returning it if it existed.
    pub fn remove_build(&self, job_full_name: &str, number: u32) -> Option<BuildRecord> {
        let mut items = self.write();
        match items.get_mut(job_full_name) {
            Some(RegistryItem::Job(job)) => Arc::make_mut(job).builds.remove(&number),
            Some(RegistryItem::Folder) | None => None,
        }
    }

    /// Deletes an item of any kind. Returns true if it existed.
    pub fn remove(&self, full_name: &str) -> bool {
        self.write().remove(full_name).is_some()
    }

    /// Returns all job snapshots in name order.
    #[must_use]
    pub fn jobs(&self) -> Vec<Arc<JobSnapshot>> {
        self.read()
            .values()
            .filter_map(|item| match item {
                RegistryItem::Job(job) => Some(Arc::clone(job)),
                RegistryItem::Folder => None,
            })
            .collect()
    }

    /// Returns the names of all non-buildable items in name order.
    #[must_use]
    pub fn folders(&self) -> Vec<String> {
        self.read()
            .iter()
            .filter(|(_, item)| matches!(item, RegistryItem::Folder))
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Returns the number of items of any kind.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns true if the registry holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl JobRegistry for InMemoryJobRegistry {
    type Job = Arc<JobSnapshot>;

    fn find_job_by_full_name(&self, full_name: &str) -> JobLookup<Self::Job> {
        match self.read().get(full_name) {
            Some(RegistryItem::Job(job)) => JobLookup::Buildable(Arc::clone(job)),
            Some(RegistryItem::Folder) => JobLookup::NotBuildable {
                kind: "folder".to_string(),
            },
            None => JobLookup::NotFound,
        }
    }
}
