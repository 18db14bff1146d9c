//! Saved-jobs registry: an in-memory, most-recent-first list of jobs, unique by id.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::jobs::models::Job;

pub const SAVED_MESSAGE: &str = "Job saved successfully!";
pub const ALREADY_SAVED_MESSAGE: &str = "Job already saved.";

/// Outcome of a save. A duplicate is informational, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveOutcome {
    pub success: bool,
    pub message: String,
}

/// Owned by the application state and handed to consumers by reference;
/// callers only mutate it through [`save`](Self::save) and [`remove`](Self::remove).
#[derive(Debug, Default)]
pub struct SavedJobsRegistry {
    jobs: Vec<Job>,
}

impl SavedJobsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends `job` unless a job with the same id is already saved.
    pub fn save(&mut self, job: Job) -> SaveOutcome {
        if self.is_saved(job.id) {
            debug!("Job {} already saved", job.id);
            return SaveOutcome {
                success: false,
                message: ALREADY_SAVED_MESSAGE.to_string(),
            };
        }

        info!("Saved job {} ({})", job.id, job.title);
        self.jobs.insert(0, job);
        SaveOutcome {
            success: true,
            message: SAVED_MESSAGE.to_string(),
        }
    }

    /// Removes the job with `id`. Unknown ids are a no-op.
    pub fn remove(&mut self, id: Uuid) {
        let before = self.jobs.len();
        self.jobs.retain(|j| j.id != id);
        if self.jobs.len() < before {
            info!("Removed saved job {id}");
        }
    }

    pub fn is_saved(&self, id: Uuid) -> bool {
        self.jobs.iter().any(|j| j.id == id)
    }

    pub fn get(&self, id: Uuid) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    /// Most recently saved first.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
