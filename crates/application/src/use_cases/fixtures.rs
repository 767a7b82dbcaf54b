//! In-memory registry shared by use case tests.

use std::cell::Cell;
use std::collections::HashMap;

use runref_domain::BuildRecord;

use crate::ports::{Job, JobLookup, JobRegistry};

#[derive(Debug, Clone)]
pub struct MockJob {
    pub name: String,
    pub builds: HashMap<u32, BuildRecord>,
}

impl Job for MockJob {
    fn full_name(&self) -> &str {
        &self.name
    }

    fn find_build_by_number(&self, number: u32) -> Option<BuildRecord> {
        self.builds.get(&number).cloned()
    }
}

enum MockItem {
    Job(MockJob),
    Folder,
}

/// Registry that also counts lookups.
pub struct MockRegistry {
    items: HashMap<String, MockItem>,
    pub lookups: Cell<usize>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            lookups: Cell::new(0),
        }
    }

    pub fn with_job(mut self, name: &str, builds: &[(u32, &str)]) -> Self {
        let builds = builds
            .iter()
            .map(|&(number, url)| (number, BuildRecord::new(name, number, url)))
            .collect();
        self.items.insert(
            name.to_string(),
            MockItem::Job(MockJob {
                name: name.to_string(),
                builds,
            }),
        );
        self
    }

    pub fn with_folder(mut self, name: &str) -> Self {
        self.items.insert(name.to_string(), MockItem::Folder);
        self
    }
}

impl JobRegistry for MockRegistry {
    type Job = MockJob;

    fn find_job_by_full_name(&self, full_name: &str) -> JobLookup<MockJob> {
        self.lookups.set(self.lookups.get() + 1);
        match self.items.get(full_name) {
            Some(MockItem::Job(job)) => JobLookup::Buildable(job.clone()),
            Some(MockItem::Folder) => JobLookup::NotBuildable {
                kind: "folder".to_string(),
            },
            None => JobLookup::NotFound,
        }
    }
}
