use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;
use tracing::{error, info};

use crate::services::cleanup_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/caixa", post(cleanup_caixa))
        .route("/purchases", post(cleanup_purchases))
}

// Wire contract: a report object on success, `{ success: false, error }`
// with a 500 on any failure.

pub async fn cleanup_caixa(State(state): State<AppState>) -> Response {
    info!("POST /api/cleanup/caixa - Pruning old transactions and balances");

    match cleanup_service::cleanup_caixa(&state.pool).await {
        Ok(report) => Json(report).into_response(),
        Err(e) => {
            error!("Caixa cleanup failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

pub async fn cleanup_purchases(State(state): State<AppState>) -> Response {
    info!("POST /api/cleanup/purchases - Pruning old purchases");

    match cleanup_service::cleanup_purchases(&state.pool).await {
        Ok(report) => Json(report).into_response(),
        Err(e) => {
            error!("Purchases cleanup failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
