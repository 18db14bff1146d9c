//! Job feed client. The only network I/O in the service.
//!
//! The feed is reached through the [`JobFeed`] trait so the HTTP client can be
//! swapped for a fixture in tests. Whatever the transport, callers get either
//! the complete record list or one [`FeedError`]; never partial data.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::jobs::models::{Job, RawRecord};
use crate::jobs::normalize::normalize_job;

/// Every variant's message is safe to show to the user as-is.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Request timed out. Please check your connection and try again.")]
    Timeout,

    #[error("Network request failed: {0}")]
    Http(reqwest::Error),

    #[error("Server returned {status}: {reason}")]
    Status { status: u16, reason: String },

    #[error("API did not return JSON. Please check the API endpoint.")]
    NotJson,

    #[error("Response body was not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unexpected API response format.")]
    UnexpectedShape,

    #[error("No jobs were returned from the API.")]
    Empty,
}

impl From<reqwest::Error> for FeedError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FeedError::Timeout
        } else {
            FeedError::Http(e)
        }
    }
}

/// Source of raw job records. Carried in `AppState` as `Arc<dyn JobFeed>`.
#[async_trait]
pub trait JobFeed: Send + Sync {
    async fn fetch_records(&self) -> Result<Vec<RawRecord>, FeedError>;
}

/// Fetches the feed over HTTP with a whole-request timeout.
#[derive(Clone)]
pub struct HttpJobFeed {
    client: Client,
    url: String,
}

impl HttpJobFeed {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FeedError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl JobFeed for HttpJobFeed {
    async fn fetch_records(&self) -> Result<Vec<RawRecord>, FeedError> {
        debug!("Fetching job feed from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Job feed returned {status}");
            return Err(FeedError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let is_json = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));
        if !is_json {
            return Err(FeedError::NotJson);
        }

        let body = response.text().await?;
        let value: Value = serde_json::from_str(&body)?;
        extract_records(value)
    }
}

/// Reconciles the feed's response shape into a list of records.
///
/// Accepts a top-level array, an object with a `jobs` array, or an object with
/// a `data` array, checked in that order. An empty list is an error.
pub fn extract_records(value: Value) -> Result<Vec<RawRecord>, FeedError> {
    let records = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match (map.remove("jobs"), map.remove("data")) {
            (Some(Value::Array(items)), _) => items,
            (_, Some(Value::Array(items))) => items,
            _ => return Err(FeedError::UnexpectedShape),
        },
        _ => return Err(FeedError::UnexpectedShape),
    };

    if records.is_empty() {
        return Err(FeedError::Empty);
    }
    Ok(records)
}

/// Fetches the feed and normalizes every record, preserving feed order.
pub async fn fetch_jobs(feed: &dyn JobFeed) -> Result<Vec<Job>, FeedError> {
    let records = feed.fetch_records().await?;
    let jobs: Vec<Job> = records.iter().map(normalize_job).collect();
    info!("Fetched {} jobs from feed", jobs.len());
    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct FixtureFeed(Result<Value, ()>);

    #[async_trait]
    impl JobFeed for FixtureFeed {
        async fn fetch_records(&self) -> Result<Vec<RawRecord>, FeedError> {
            match &self.0 {
                Ok(v) => extract_records(v.clone()),
                Err(()) => Err(FeedError::Timeout),
            }
        }
    }

    #[test]
    fn test_extract_top_level_array() {
        let records = extract_records(json!([{ "title": "A" }, { "title": "B" }])).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_extract_jobs_then_data_keys() {
        let records = extract_records(json!({ "jobs": [{ "title": "A" }] })).unwrap();
        assert_eq!(records[0]["title"], "A");

        let records = extract_records(json!({ "data": [{ "title": "B" }] })).unwrap();
        assert_eq!(records[0]["title"], "B");

        // `jobs` present but not an array falls through to `data`
        let records =
            extract_records(json!({ "jobs": "nope", "data": [{ "title": "C" }] })).unwrap();
        assert_eq!(records[0]["title"], "C");
    }

    #[test]
    fn test_extract_rejects_other_shapes() {
        for value in [json!({ "results": [] }), json!("jobs"), json!(12), json!(null)] {
            assert!(matches!(
                extract_records(value),
                Err(FeedError::UnexpectedShape)
            ));
        }
    }

    #[test]
    fn test_extract_rejects_empty_list() {
        assert!(matches!(extract_records(json!([])), Err(FeedError::Empty)));
        assert!(matches!(
            extract_records(json!({ "jobs": [] })),
            Err(FeedError::Empty)
        ));
    }

    #[test]
    fn test_feed_error_messages_are_user_facing() {
        assert_eq!(
            FeedError::Timeout.to_string(),
            "Request timed out. Please check your connection and try again."
        );
        assert_eq!(
            FeedError::Status {
                status: 503,
                reason: "Service Unavailable".to_string()
            }
            .to_string(),
            "Server returned 503: Service Unavailable"
        );
        assert_eq!(
            FeedError::UnexpectedShape.to_string(),
            "Unexpected API response format."
        );
    }

    #[tokio::test]
    async fn test_fetch_jobs_normalizes_in_order() {
        let feed = FixtureFeed(Ok(json!({ "data": [{ "title": "Engineer" }, { "companyName": "Acme" }] })));
        let jobs = fetch_jobs(&feed).await.unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].title, "Engineer");
        assert_eq!(jobs[0].company_name, "Unknown Company");
        assert_eq!(jobs[1].title, "Untitled");
        assert_eq!(jobs[1].company_name, "Acme");
    }

    #[tokio::test]
    async fn test_fetch_jobs_propagates_feed_error() {
        let feed = FixtureFeed(Err(()));
        assert!(matches!(fetch_jobs(&feed).await, Err(FeedError::Timeout)));
    }
}
