use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::Purchase;

/// Inserts inside the caller's transaction so the purchase row and the
/// inventory increment commit together.
pub async fn create_in_tx(
    tx: &mut Transaction<'_, Postgres>,
    purchase: &Purchase,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO purchases
             (id, material_name, quantity_kg, price_per_kg, total_value, purchase_date, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(purchase.id)
    .bind(&purchase.material_name)
    .bind(&purchase.quantity_kg)
    .bind(&purchase.price_per_kg)
    .bind(&purchase.total_value)
    .bind(purchase.purchase_date)
    .bind(purchase.created_at)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

pub async fn fetch_by_date(
    pool: &PgPool,
    date: NaiveDate,
) -> Result<Vec<Purchase>, sqlx::Error> {
    sqlx::query_as::<_, Purchase>(
        "SELECT id, material_name, quantity_kg, price_per_kg, total_value, purchase_date, created_at
         FROM purchases
         WHERE purchase_date = $1
         ORDER BY created_at DESC",
    )
    .bind(date)
    .fetch_all(pool)
    .await
}

pub async fn delete_on_or_before(
    pool: &PgPool,
    cutoff: NaiveDate,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM purchases WHERE purchase_date <= $1")
        .bind(cutoff)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
