//! Axum route handlers for job applications.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::application::form::{validate, ApplicationForm, ApplicationFormErrors};
use crate::application::session::{ApplicationSession, FormEvent, FormPhase, SessionSnapshot};
use crate::application::store::SessionStore;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct OpenApplicationRequest {
    pub job_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub errors: ApplicationFormErrors,
}

/// POST /api/v1/applications/validate
///
/// Stateless check of a whole form.
pub async fn handle_validate(Json(form): Json<ApplicationForm>) -> Json<ValidateResponse> {
    let errors = validate(&form);
    Json(ValidateResponse {
        valid: errors.is_empty(),
        errors,
    })
}

/// POST /api/v1/applications
///
/// Opens a form for a job from the current listing or the saved list.
pub async fn handle_open_application(
    State(state): State<AppState>,
    Json(req): Json<OpenApplicationRequest>,
) -> Result<(StatusCode, Json<SessionSnapshot>), AppError> {
    let listed = state.catalog.read().await.get(req.job_id).cloned();
    let job = match listed {
        Some(job) => job,
        None => state
            .saved
            .read()
            .await
            .get(req.job_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Job {} not found", req.job_id)))?,
    };

    let session = ApplicationSession::new(&job);
    let snapshot = session.snapshot();
    state.applications.lock().await.insert(session);

    debug!("Opened application {} for job {}", snapshot.id, job.id);
    Ok((StatusCode::CREATED, Json(snapshot)))
}

/// GET /api/v1/applications/:id
pub async fn handle_get_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let sessions = state.applications.lock().await;
    let session = sessions.get(&id).ok_or_else(|| not_found(id))?;
    Ok(Json(session.snapshot()))
}

/// POST /api/v1/applications/:id/events
///
/// Applies one form event. A valid `submit` holds the request for the
/// simulated submission latency and answers with the settled session.
/// Settlement runs on its own task, so it completes even if the caller
/// goes away mid-wait.
pub async fn handle_application_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(event): Json<FormEvent>,
) -> Result<Json<SessionSnapshot>, AppError> {
    {
        let mut sessions = state.applications.lock().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        if session.apply(event)? != FormPhase::Submitting {
            return Ok(Json(session.snapshot()));
        }
    }

    let settlement = spawn_settlement(state.applications.clone(), id, state.config.submit_delay);
    if let Err(e) = settlement.await {
        warn!("Settlement task for application {id} failed: {e}");
    }

    let sessions = state.applications.lock().await;
    let session = sessions.get(&id).ok_or_else(|| not_found(id))?;
    Ok(Json(session.snapshot()))
}

/// Waits out the simulated latency, then settles the submission.
fn spawn_settlement(
    sessions: Arc<Mutex<SessionStore>>,
    id: Uuid,
    delay: Duration,
) -> JoinHandle<()> {
    debug!("Application {id} submitting, settling in {delay:?}");
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        match sessions.lock().await.get_mut(&id) {
            Some(session) => {
                if let Err(e) = session.settle() {
                    warn!("Application {id} could not settle: {e}");
                }
            }
            None => debug!("Application {id} discarded before settling"),
        }
    })
}

/// DELETE /api/v1/applications/:id
pub async fn handle_discard_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> StatusCode {
    state.applications.lock().await.remove(&id);
    StatusCode::NO_CONTENT
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Application {id} not found"))
}
