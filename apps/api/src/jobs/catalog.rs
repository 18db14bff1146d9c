use uuid::Uuid;

use crate::jobs::models::Job;
use crate::jobs::search::filter_jobs;

/// The listing currently on screen: the last successfully fetched feed,
/// plus the message of the last failed refresh, if any.
#[derive(Debug, Default)]
pub struct JobCatalog {
    jobs: Vec<Job>,
    last_error: Option<String>,
}

impl JobCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swaps in a freshly normalized listing. Old identities are gone.
    pub fn replace(&mut self, jobs: Vec<Job>) {
        self.jobs = jobs;
        self.last_error = None;
    }

    /// Records a failed refresh. The previous listing is kept.
    pub fn record_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn all(&self) -> &[Job] {
        &self.jobs
    }

    pub fn get(&self, id: Uuid) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    pub fn search(&self, query: &str) -> Vec<&Job> {
        filter_jobs(&self.jobs, query)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
