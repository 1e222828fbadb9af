use axum::{
    Json, Router, middleware,
    response::{IntoResponse, Response},
};
use snafu::ResultExt;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::Result;
use crate::error::{BindSnafu, ErrorInfo, ErrorResponse, ServeSnafu};
use crate::state::AppState;
use crate::web::routes::all_routes;

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(all_routes(state))
        .layer(middleware::map_response(response_mapper))
}

pub async fn run_web_server(state: AppState) -> Result<()> {
    let port = state.config.server.port;
    let app = build_app(state);

    // Demo backend, local clients only
    let ip = "127.0.0.1";
    let addr = format!("{}:{}", ip, port);

    let listener = TcpListener::bind(&addr)
        .await
        .context(BindSnafu { addr: addr.clone() })?;
    info!("HTTP server running on {}", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context(ServeSnafu)?;

    info!("HTTP server stopped");

    Ok(())
}

async fn response_mapper(res: Response) -> Response {
    let error = res.extensions().get::<ErrorInfo>();
    if let Some(e) = error {
        if e.status_code.is_server_error() {
            error!("{}", e.message);
            if let Some(bt) = &e.backtrace {
                error!("{}", bt);
            }
        }

        let body = ErrorResponse {
            status_code: e.status_code.as_u16(),
            message: &e.message,
            error: e.status_code.canonical_reason().unwrap_or("Unknown Error"),
        };

        return (e.status_code, Json(body)).into_response();
    }
    res
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use selectmock::{FixedRandom, MockResponder, NoDelayTimer};
    use serde_json::{Value, json};

    use crate::config::Config;

    fn test_server(sample: f64) -> TestServer {
        let config = Config::from_vars(|_| None).unwrap();
        let responder = MockResponder::builder()
            .timer(NoDelayTimer)
            .random(FixedRandom::new(sample))
            .build()
            .unwrap();

        TestServer::new(build_app(AppState { config, responder })).unwrap()
    }

    #[tokio::test]
    async fn test_select_success() {
        let server = test_server(0.1);

        let res = server.get("/select").await;
        res.assert_status_ok();
        res.assert_json(&json!({
            "code": 0,
            "data": [
                { "label": "apple", "value": 1 },
                { "label": "banana", "value": 2 },
                { "label": "tangerine", "value": 3, "disabled": true }
            ],
            "message": "Get Select data successfully"
        }));
    }

    #[tokio::test]
    async fn test_select_failure() {
        let server = test_server(0.95);

        let res = server.get("/select").await;
        res.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        res.assert_json(&json!({
            "status_code": 500,
            "message": "interface error",
            "error": "Internal Server Error"
        }));
    }

    #[tokio::test]
    async fn test_liveness() {
        let server = test_server(0.1);

        let res = server.get("/health/liveness").await;
        res.assert_status_ok();
        res.assert_json(&json!({ "status": "UP" }));
    }

    #[tokio::test]
    async fn test_home() {
        let server = test_server(0.1);

        let res = server.get("/").await;
        res.assert_status_ok();
        let body: Value = res.json();
        assert_eq!(body["name"], "select-mock");
    }

    #[tokio::test]
    async fn test_not_found() {
        let server = test_server(0.1);

        let res = server.get("/nope").await;
        res.assert_status_not_found();
        let body: Value = res.json();
        assert_eq!(body["status_code"], 404);
        assert_eq!(body["message"], "Not Found");
    }
}
