use axum::{
    Router,
    routing::{any, get},
};

use crate::{
    state::AppState,
    web::handler::{home_handler, health_live_handler, not_found_handler, select_handler},
};

pub fn all_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/select", get(select_handler))
        .route("/health/liveness", get(health_live_handler))
        .fallback(any(not_found_handler))
        .with_state(state)
}
