use axum::{
    extract::{Json, State},
    response::IntoResponse,
};
use selectmock::SelectResponse;
use serde::Serialize;
use tracing::{info, warn};

use crate::{
    Error, Result,
    health::{LiveStatus, check_liveness},
    state::AppState,
};

#[derive(Serialize)]
pub struct AppMeta {
    pub name: String,
    pub version: String,
}

pub async fn home_handler() -> impl IntoResponse {
    Json(AppMeta {
        name: "select-mock".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn not_found_handler() -> Result<()> {
    Err(Error::NotFound {
        msg: "Not Found".to_string(),
    })
}

pub async fn health_live_handler() -> Result<Json<LiveStatus>> {
    let health = check_liveness().await?;
    Ok(Json(health))
}

pub async fn select_handler(
    State(state): State<AppState>,
) -> Result<Json<&'static SelectResponse>> {
    match state.responder.fetch_options().await {
        Ok(res) => {
            info!("Select data served: {} options", res.data.len());
            Ok(Json(res))
        }
        Err(e) => {
            warn!("Select data failed: {}", e);
            Err(Error::Mock { source: e })
        }
    }
}
