use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::dates;
use crate::errors::AppError;
use crate::models::{CreatePurchase, Purchase};
use crate::services::purchase_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_purchases).post(create_purchase))
}

#[derive(Debug, Deserialize)]
pub struct DayParams {
    pub date: Option<NaiveDate>,
}

pub async fn list_purchases(
    State(state): State<AppState>,
    Query(params): Query<DayParams>,
) -> Result<Json<Vec<Purchase>>, AppError> {
    let date = params.date.unwrap_or_else(dates::today);
    info!("GET /api/compras - Listing purchases for {}", date);

    let purchases = purchase_service::list_for_day(&state.pool, date).await?;
    Ok(Json(purchases))
}

pub async fn create_purchase(
    State(state): State<AppState>,
    Json(data): Json<CreatePurchase>,
) -> Result<Json<Purchase>, AppError> {
    info!(
        "POST /api/compras - Recording purchase of {}",
        data.material_name
    );

    let purchase = purchase_service::record_purchase(&state.pool, data).await?;
    Ok(Json(purchase))
}
