use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/habits", get(handlers::get_habits).put(handlers::put_habits))
        .route("/api/habits/:id/insight", get(handlers::get_insight))
        .route(
            "/api/dashboard",
            get(handlers::get_dashboard).post(handlers::post_dashboard),
        )
        .with_state(state)
}
