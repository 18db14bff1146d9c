//! Axum route handlers for the job listing.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::feed::{fetch_jobs, FeedError};
use crate::jobs::models::Job;
use crate::jobs::summary::{results_label, JobSummary};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListJobsQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub query: String,
    pub count: usize,
    pub results_label: String,
    pub jobs: Vec<JobSummary>,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub count: usize,
}

/// Fetches the feed and swaps the catalog. A failure is recorded on the
/// catalog so the listing can report it; the previous listing is kept.
pub async fn refresh_catalog(state: &AppState) -> Result<usize, FeedError> {
    match fetch_jobs(state.feed.as_ref()).await {
        Ok(jobs) => {
            let count = jobs.len();
            state.catalog.write().await.replace(jobs);
            info!("Job catalog replaced with {count} jobs");
            Ok(count)
        }
        Err(e) => {
            warn!("Job feed refresh failed: {e}");
            state.catalog.write().await.record_error(e.to_string());
            Err(e)
        }
    }
}

/// GET /api/v1/jobs?q=
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(params): Query<ListJobsQuery>,
) -> Result<Json<JobListResponse>, AppError> {
    let catalog = state.catalog.read().await;
    if catalog.is_empty() {
        if let Some(message) = catalog.last_error() {
            return Err(AppError::FeedUnavailable(message.to_string()));
        }
    }

    let saved = state.saved.read().await;
    let jobs: Vec<JobSummary> = catalog
        .search(&params.q)
        .into_iter()
        .map(|job| JobSummary::new(job, saved.is_saved(job.id)))
        .collect();

    Ok(Json(JobListResponse {
        query: params.q,
        count: jobs.len(),
        results_label: results_label(jobs.len()),
        jobs,
    }))
}

/// POST /api/v1/jobs/refresh
pub async fn handle_refresh(
    State(state): State<AppState>,
) -> Result<Json<RefreshResponse>, AppError> {
    let count = refresh_catalog(&state).await?;
    Ok(Json(RefreshResponse { count }))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Job>, AppError> {
    let job = state.catalog.read().await.get(id).cloned();
    job.map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}
