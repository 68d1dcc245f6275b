use bigdecimal::rounding::RoundingMode;
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::error;

use crate::dates;
use crate::db::{inventory_queries, material_price_queries, purchase_queries};
use crate::errors::AppError;
use crate::models::{CreatePurchase, Purchase};

/// `total_value = quantity_kg × price_per_kg`, rounded half-up to 2 dp.
pub fn compute_total(quantity_kg: &BigDecimal, price_per_kg: &BigDecimal) -> BigDecimal {
    (quantity_kg * price_per_kg).with_scale_round(2, RoundingMode::HalfUp)
}

/// Records a purchase for today. The unit price comes from the price table,
/// never from the client. The purchase row and the inventory increment
/// commit in one transaction; a failure leaves neither behind.
pub async fn record_purchase(
    pool: &PgPool,
    input: CreatePurchase,
) -> Result<Purchase, AppError> {
    let material_name = input.material_name.trim().to_string();
    if material_name.is_empty() {
        return Err(AppError::Validation("Select a material".into()));
    }
    if input.quantity_kg <= BigDecimal::from(0) {
        return Err(AppError::Validation("Quantity must be > 0".into()));
    }

    let material = material_price_queries::fetch_by_name(pool, &material_name)
        .await?
        .ok_or_else(|| AppError::Validation(format!("Unknown material: {material_name}")))?;

    let total_value = compute_total(&input.quantity_kg, &material.price_per_kg);
    let purchase = Purchase::new(
        material.material_name,
        input.quantity_kg,
        material.price_per_kg,
        total_value,
        dates::today(),
    );

    let mut tx = pool.begin().await?;
    purchase_queries::create_in_tx(&mut tx, &purchase).await?;
    inventory_queries::increment_or_insert(&mut tx, &purchase.material_name, &purchase.quantity_kg)
        .await?;
    tx.commit().await.map_err(|e| {
        error!("Failed to commit purchase of {}: {}", purchase.material_name, e);
        AppError::Db(e)
    })?;

    Ok(purchase)
}

pub async fn list_for_day(pool: &PgPool, date: NaiveDate) -> Result<Vec<Purchase>, AppError> {
    Ok(purchase_queries::fetch_by_date(pool, date).await?)
}
