pub mod info;
pub mod signal;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/signal", post(signal::receive_signal))
        .route("/health", get(info::health))
        .route("/test", get(info::test_info).post(info::test_echo))
        .route("/", get(info::service_info))
        .fallback(info::not_found)
        .with_state(state)
}
