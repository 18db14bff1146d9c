//! Job board API: feed normalization, search, saved jobs, and application
//! form validation behind an axum router.

pub mod application;
pub mod config;
pub mod errors;
pub mod jobs;
pub mod routes;
pub mod saved;
pub mod state;

pub use config::Config;
pub use routes::build_router;
pub use state::AppState;
