use axum::extract::{Path, State};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use bigdecimal::BigDecimal;
use tracing::{error, info};
use uuid::Uuid;

use crate::db::inventory_queries;
use crate::errors::AppError;
use crate::models::{InventoryView, RemoveQuantity, UpdateInventoryQuantity};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_inventory))
        .route("/:id", put(set_quantity))
        .route("/:id/remove", post(remove_quantity))
}

pub async fn list_inventory(
    State(state): State<AppState>,
) -> Result<Json<Vec<InventoryView>>, AppError> {
    info!("GET /api/estoque - Listing inventory");

    let inventory = inventory_queries::fetch_all_with_prices(&state.pool)
        .await
        .map_err(|e| {
            error!("Failed to fetch inventory: {}", e);
            AppError::Db(e)
        })?;

    Ok(Json(inventory))
}

pub async fn set_quantity(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateInventoryQuantity>,
) -> Result<Json<Vec<InventoryView>>, AppError> {
    info!("PUT /api/estoque/{} - Setting quantity", id);

    if data.quantity_kg < BigDecimal::from(0) {
        return Err(AppError::Validation("Quantity cannot be negative".into()));
    }

    let updated = inventory_queries::set_quantity(&state.pool, id, &data.quantity_kg)
        .await
        .map_err(|e| {
            error!("Failed to update inventory {}: {}", id, e);
            AppError::Db(e)
        })?;
    if updated == 0 {
        return Err(AppError::NotFound);
    }

    let inventory = inventory_queries::fetch_all_with_prices(&state.pool).await?;
    Ok(Json(inventory))
}

/// Subtracts a sold/shipped quantity from a stock row. Going below zero is
/// refused; the operator corrects the row with a plain update instead.
pub async fn remove_quantity(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<RemoveQuantity>,
) -> Result<Json<Vec<InventoryView>>, AppError> {
    info!("POST /api/estoque/{}/remove - Removing quantity", id);

    if data.quantity_kg <= BigDecimal::from(0) {
        return Err(AppError::Validation("Quantity must be > 0".into()));
    }

    let item = inventory_queries::fetch_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;

    if data.quantity_kg > item.quantity_kg {
        return Err(AppError::Validation(format!(
            "Cannot remove {} kg from a stock of {} kg",
            data.quantity_kg, item.quantity_kg
        )));
    }

    let remaining = &item.quantity_kg - &data.quantity_kg;
    inventory_queries::set_quantity(&state.pool, id, &remaining).await?;

    let inventory = inventory_queries::fetch_all_with_prices(&state.pool).await?;
    Ok(Json(inventory))
}
