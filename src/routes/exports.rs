use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::dates;
use crate::db::inventory_queries;
use crate::errors::AppError;
use crate::services::{caixa_service, export_service, purchase_service};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/compras", get(export_purchases))
        .route("/estoque", get(export_inventory))
        .route("/caixa", get(export_cash_flow))
}

#[derive(Debug, Deserialize)]
pub struct DayParams {
    pub date: Option<NaiveDate>,
}

fn csv_attachment(filename: String, csv: String) -> Response {
    (
        [
            (
                header::CONTENT_TYPE,
                "text/csv; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        csv,
    )
        .into_response()
}

pub async fn export_purchases(
    State(state): State<AppState>,
    Query(params): Query<DayParams>,
) -> Result<Response, AppError> {
    let date = params.date.unwrap_or_else(dates::today);
    info!("GET /api/export/compras - Exporting purchases for {}", date);

    let purchases = purchase_service::list_for_day(&state.pool, date).await?;
    let csv = export_service::purchases_csv(&purchases)?;
    Ok(csv_attachment(export_service::purchases_filename(date), csv))
}

pub async fn export_inventory(State(state): State<AppState>) -> Result<Response, AppError> {
    info!("GET /api/export/estoque - Exporting inventory");

    let inventory = inventory_queries::fetch_all_with_prices(&state.pool).await?;
    let csv = export_service::inventory_csv(&inventory)?;
    Ok(csv_attachment(export_service::inventory_filename(), csv))
}

pub async fn export_cash_flow(
    State(state): State<AppState>,
    Query(params): Query<DayParams>,
) -> Result<Response, AppError> {
    let date = params.date.unwrap_or_else(dates::today);
    info!("GET /api/export/caixa - Exporting cash flow for {}", date);

    let summary = caixa_service::daily_summary(&state.pool, date).await?;
    let csv = export_service::cash_flow_csv(&summary)?;
    Ok(csv_attachment(export_service::cash_flow_filename(date), csv))
}
