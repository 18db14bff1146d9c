// Job listing: feed ingestion, normalization, search, and card summaries.
// Normalization and search are pure; the only I/O lives in `feed`.

pub mod catalog;
pub mod feed;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod search;
pub mod summary;

pub use catalog::JobCatalog;
pub use feed::{fetch_jobs, FeedError, HttpJobFeed, JobFeed};
pub use models::{Job, RawRecord};
pub use normalize::normalize_job;
pub use search::filter_jobs;
