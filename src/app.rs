use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/today", get(handlers::get_today))
        .route("/api/display", get(handlers::get_display))
        .route("/api/dates", get(handlers::get_dates))
        .route("/api/snapshot", get(handlers::get_snapshot))
        .route("/api/refresh", post(handlers::refresh))
        .with_state(state)
}
