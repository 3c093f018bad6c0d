use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};
use tracing::{error, info, warn};

use common::models::DispatchResult;
use relay::{formatter, validator};

use crate::state::AppState;

/// Main webhook endpoint: validate the raw payload, render the message,
/// relay it to Telegram, and map the outcome onto the response status.
pub async fn receive_signal(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Response {
    let signal = match validator::validate(&payload) {
        Ok(signal) => signal,
        Err(failure) => {
            warn!("Rejected signal payload: {}", failure);
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "status": "error",
                    "message": failure.to_string(),
                    "errors": failure.violations,
                })),
            )
                .into_response();
        }
    };

    info!(
        "Signal received: {} {}",
        signal.signal_type, signal.symbol
    );

    let message = formatter::format_signal(&signal, &state.config.default_category, Utc::now());
    let chat_id = signal
        .channel_id
        .as_deref()
        .unwrap_or(&state.config.default_channel);

    match state
        .dispatcher
        .dispatch(&signal.bot_token, chat_id, &message)
        .await
    {
        DispatchResult::Delivered => (
            StatusCode::OK,
            Json(json!({
                "status": "success",
                "message": "Signal sent to Telegram successfully",
                "signal_type": signal.signal_type,
                "symbol": signal.symbol,
                "confidence": signal.confidence,
            })),
        )
            .into_response(),
        DispatchResult::PlatformRejected(reason) => {
            relay_failure(StatusCode::BAD_GATEWAY, &reason)
        }
        DispatchResult::NetworkFailure => relay_failure(StatusCode::BAD_GATEWAY, "network error"),
        DispatchResult::Timeout => relay_failure(StatusCode::GATEWAY_TIMEOUT, "request timeout"),
    }
}

fn relay_failure(status: StatusCode, reason: &str) -> Response {
    error!("Failed to send signal to Telegram: {}", reason);
    (
        status,
        Json(json!({
            "status": "error",
            "message": format!("Failed to send signal to Telegram: {}", reason),
        })),
    )
        .into_response()
}
