use axum::extract::FromRef;
use selectmock::MockResponder;

use crate::config::Config;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub config: Config,
    pub responder: MockResponder,
}
