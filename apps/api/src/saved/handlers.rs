//! Axum route handlers for the saved-jobs list.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::summary::JobSummary;
use crate::saved::registry::SaveOutcome;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SaveJobRequest {
    pub job_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct SavedListResponse {
    pub count: usize,
    pub jobs: Vec<JobSummary>,
}

#[derive(Debug, Serialize)]
pub struct SavedStatusResponse {
    pub saved: bool,
}

/// GET /api/v1/saved
pub async fn handle_list_saved(State(state): State<AppState>) -> Json<SavedListResponse> {
    let saved = state.saved.read().await;
    let jobs: Vec<JobSummary> = saved
        .jobs()
        .iter()
        .map(|job| JobSummary::new(job, true))
        .collect();
    Json(SavedListResponse {
        count: jobs.len(),
        jobs,
    })
}

/// POST /api/v1/saved
///
/// 201 on a new save, 409 when the job is already saved. Both carry the
/// `{success, message}` outcome for the caller to display.
pub async fn handle_save_job(
    State(state): State<AppState>,
    Json(req): Json<SaveJobRequest>,
) -> Result<(StatusCode, Json<SaveOutcome>), AppError> {
    let job = state
        .catalog
        .read()
        .await
        .get(req.job_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", req.job_id)))?;

    let outcome = state.saved.write().await.save(job);
    let status = if outcome.success {
        StatusCode::CREATED
    } else {
        StatusCode::CONFLICT
    };
    Ok((status, Json(outcome)))
}

/// GET /api/v1/saved/:id
pub async fn handle_saved_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Json<SavedStatusResponse> {
    let saved = state.saved.read().await.is_saved(id);
    Json(SavedStatusResponse { saved })
}

/// DELETE /api/v1/saved/:id
pub async fn handle_remove_saved(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> StatusCode {
    state.saved.write().await.remove(id);
    StatusCode::NO_CONTENT
}
