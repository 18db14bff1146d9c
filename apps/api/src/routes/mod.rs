pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::application::handlers as applications;
use crate::jobs::handlers as jobs;
use crate::saved::handlers as saved;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job listing
        .route("/api/v1/jobs", get(jobs::handle_list_jobs))
        .route("/api/v1/jobs/refresh", post(jobs::handle_refresh))
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        // Saved jobs
        .route(
            "/api/v1/saved",
            get(saved::handle_list_saved).post(saved::handle_save_job),
        )
        .route(
            "/api/v1/saved/:id",
            get(saved::handle_saved_status).delete(saved::handle_remove_saved),
        )
        // Applications
        .route(
            "/api/v1/applications/validate",
            post(applications::handle_validate),
        )
        .route(
            "/api/v1/applications",
            post(applications::handle_open_application),
        )
        .route(
            "/api/v1/applications/:id",
            get(applications::handle_get_application)
                .delete(applications::handle_discard_application),
        )
        .route(
            "/api/v1/applications/:id/events",
            post(applications::handle_application_event),
        )
        .with_state(state)
}
