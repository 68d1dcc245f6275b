use bigdecimal::BigDecimal;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::models::{InventoryItem, InventoryView};

/// Inventory ordered by material, enriched with the current purchase price
/// (zero when the material has no price row).
pub async fn fetch_all_with_prices(pool: &PgPool) -> Result<Vec<InventoryView>, sqlx::Error> {
    sqlx::query_as::<_, InventoryView>(
        "SELECT i.id, i.material_name, i.quantity_kg, i.last_updated,
                COALESCE(p.price_per_kg, 0) AS price_per_kg
         FROM inventory i
         LEFT JOIN materials_prices p ON p.material_name = i.material_name
         ORDER BY i.material_name",
    )
    .fetch_all(pool)
    .await
}

pub async fn fetch_by_id(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<InventoryItem>, sqlx::Error> {
    sqlx::query_as::<_, InventoryItem>(
        "SELECT id, material_name, quantity_kg, last_updated
         FROM inventory
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn set_quantity(
    pool: &PgPool,
    id: Uuid,
    quantity_kg: &BigDecimal,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE inventory
         SET quantity_kg = $1, last_updated = now()
         WHERE id = $2",
    )
    .bind(quantity_kg)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

/// Adds `quantity_kg` to the material's row, creating it when the material
/// has never been stocked. Runs inside the purchase transaction.
pub async fn increment_or_insert(
    tx: &mut Transaction<'_, Postgres>,
    material_name: &str,
    quantity_kg: &BigDecimal,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO inventory (id, material_name, quantity_kg, last_updated)
         VALUES ($1, $2, $3, now())
         ON CONFLICT (material_name)
         DO UPDATE SET quantity_kg = inventory.quantity_kg + EXCLUDED.quantity_kg,
                       last_updated = now()",
    )
    .bind(Uuid::new_v4())
    .bind(material_name)
    .bind(quantity_kg)
    .execute(&mut **tx)
    .await?;
    Ok(())
}
