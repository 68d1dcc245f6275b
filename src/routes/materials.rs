use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use bigdecimal::BigDecimal;
use tracing::{error, info};
use uuid::Uuid;

use crate::db::material_price_queries;
use crate::errors::{map_unique_violation, AppError};
use crate::models::{CreateMaterialPrice, MaterialPrice, UpdateMaterialPrice};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_materials).post(create_material))
        .route("/:id", put(update_material))
}

pub async fn list_materials(
    State(state): State<AppState>,
) -> Result<Json<Vec<MaterialPrice>>, AppError> {
    info!("GET /api/precos - Listing material prices");

    let materials = material_price_queries::fetch_all(&state.pool)
        .await
        .map_err(|e| {
            error!("Failed to fetch material prices: {}", e);
            AppError::Db(e)
        })?;

    Ok(Json(materials))
}

pub async fn create_material(
    State(state): State<AppState>,
    Json(mut data): Json<CreateMaterialPrice>,
) -> Result<Json<MaterialPrice>, AppError> {
    info!("POST /api/precos - Creating material {}", data.material_name);

    data.material_name = data.material_name.trim().to_string();
    if data.material_name.is_empty() {
        return Err(AppError::Validation("Material name cannot be empty".into()));
    }
    if data.price_per_kg <= BigDecimal::from(0) {
        return Err(AppError::Validation("Price must be > 0".into()));
    }

    let material = material_price_queries::create(&state.pool, &data)
        .await
        .map_err(|e| map_unique_violation(e, "Material already registered"))?;

    Ok(Json(material))
}

pub async fn update_material(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateMaterialPrice>,
) -> Result<Json<Vec<MaterialPrice>>, AppError> {
    info!("PUT /api/precos/{} - Updating price", id);

    if data.price_per_kg <= BigDecimal::from(0) {
        return Err(AppError::Validation("Price must be > 0".into()));
    }

    let updated = material_price_queries::update_price(&state.pool, id, &data.price_per_kg)
        .await
        .map_err(|e| {
            error!("Failed to update material {}: {}", id, e);
            AppError::Db(e)
        })?;
    if updated == 0 {
        return Err(AppError::NotFound);
    }

    // Read-after-write, no caching: hand the refreshed table back.
    let materials = material_price_queries::fetch_all(&state.pool).await?;
    Ok(Json(materials))
}
