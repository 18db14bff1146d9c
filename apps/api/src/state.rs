use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::application::SessionStore;
use crate::config::Config;
use crate::jobs::{JobCatalog, JobFeed};
use crate::saved::SavedJobsRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Each store is constructed once at startup and handed to handlers by
/// reference. No lock is held across an `.await`; when more than one is
/// taken, the order is catalog → saved → applications.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable feed source. Default: `HttpJobFeed` against `FEED_URL`.
    pub feed: Arc<dyn JobFeed>,
    pub catalog: Arc<RwLock<JobCatalog>>,
    pub saved: Arc<RwLock<SavedJobsRegistry>>,
    pub applications: Arc<Mutex<SessionStore>>,
}

impl AppState {
    pub fn new(config: Config, feed: Arc<dyn JobFeed>) -> Self {
        Self {
            feed,
            catalog: Arc::new(RwLock::new(JobCatalog::new())),
            saved: Arc::new(RwLock::new(SavedJobsRegistry::new())),
            applications: Arc::new(Mutex::new(SessionStore::new(config.session_ttl))),
            config,
        }
    }
}
