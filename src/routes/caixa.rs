use axum::extract::{Path, Query, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::dates;
use crate::errors::AppError;
use crate::models::{CashTransaction, CreateCashTransaction, DailySummary};
use crate::services::caixa_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/summary", get(get_summary))
        .route("/transactions", post(create_transaction))
        .route("/transactions/:id", delete(delete_transaction))
}

#[derive(Debug, Deserialize)]
pub struct SummaryParams {
    pub date: Option<NaiveDate>,
}

pub async fn get_summary(
    State(state): State<AppState>,
    Query(params): Query<SummaryParams>,
) -> Result<Json<DailySummary>, AppError> {
    let date = params.date.unwrap_or_else(dates::today);
    info!("GET /api/caixa/summary - Reconciling {}", date);

    let summary = caixa_service::daily_summary(&state.pool, date).await?;
    Ok(Json(summary))
}

pub async fn create_transaction(
    State(state): State<AppState>,
    Json(data): Json<CreateCashTransaction>,
) -> Result<Json<CashTransaction>, AppError> {
    info!("POST /api/caixa/transactions - Adding manual entry");

    let transaction = caixa_service::add_transaction(&state.pool, data).await?;
    Ok(Json(transaction))
}

pub async fn delete_transaction(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    info!("DELETE /api/caixa/transactions/{} - Removing entry", id);

    caixa_service::remove_transaction(&state.pool, id).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}
