use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "Spikecast Signal Relay",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

pub async fn test_info() -> Json<Value> {
    Json(json!({
        "status": "success",
        "message": "Spikecast signal relay is operational",
        "endpoints": {
            "POST /signal": "Main webhook for trading signals",
            "GET /health": "Health check endpoint",
            "GET /test": "This test endpoint",
            "GET /": "API documentation",
        },
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

pub async fn test_echo(payload: Option<Json<Value>>) -> Json<Value> {
    let received = payload.map(|Json(v)| v).unwrap_or_else(|| json!({}));
    Json(json!({
        "status": "success",
        "message": "Test signal received successfully",
        "received_data": received,
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

pub async fn service_info() -> Json<Value> {
    Json(json!({
        "service": "Spikecast Signal Relay",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "operational",
        "description": "Relays MT5 trading signals to Telegram channels",
        "endpoints": {
            "POST /signal": {
                "description": "Main webhook endpoint for trading signals",
                "content_type": "application/json",
                "required_fields": [
                    "signal_type (BUY/SELL)",
                    "symbol",
                    "entry_price",
                    "tp_price",
                    "sl_price",
                    "bot_token",
                ],
                "optional_fields": [
                    "confidence",
                    "signal_category",
                    "timestamp",
                    "channel_id",
                ],
            },
            "GET /health": "Health check endpoint",
            "GET /test": "Test endpoint for debugging",
            "GET /": "This documentation",
        },
        "support": "@SpikecastSupport",
    }))
}

pub async fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "status": "error",
            "message": "Endpoint not found",
            "available_endpoints": ["/signal", "/health", "/test", "/"],
        })),
    )
}
