use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/submit", post(handlers::submit_form))
        .route("/reset", post(handlers::reset_form))
        .route("/api/view", get(handlers::get_view))
        .route("/api/check", post(handlers::check))
        .route("/api/submit", post(handlers::submit))
        .route("/api/sort", post(handlers::sort))
        .route("/api/reset", post(handlers::reset))
        .with_state(state)
}
