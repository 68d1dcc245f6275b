use bigdecimal::BigDecimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{CreateMaterialPrice, MaterialPrice};

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<MaterialPrice>, sqlx::Error> {
    sqlx::query_as::<_, MaterialPrice>(
        "SELECT id, material_name, price_per_kg, updated_at
         FROM materials_prices
         ORDER BY material_name",
    )
    .fetch_all(pool)
    .await
}

pub async fn fetch_by_name(
    pool: &PgPool,
    material_name: &str,
) -> Result<Option<MaterialPrice>, sqlx::Error> {
    sqlx::query_as::<_, MaterialPrice>(
        "SELECT id, material_name, price_per_kg, updated_at
         FROM materials_prices
         WHERE material_name = $1",
    )
    .bind(material_name)
    .fetch_optional(pool)
    .await
}

pub async fn create(
    pool: &PgPool,
    data: &CreateMaterialPrice,
) -> Result<MaterialPrice, sqlx::Error> {
    sqlx::query_as::<_, MaterialPrice>(
        "INSERT INTO materials_prices (id, material_name, price_per_kg, updated_at)
         VALUES ($1, $2, $3, now())
         RETURNING id, material_name, price_per_kg, updated_at",
    )
    .bind(Uuid::new_v4())
    .bind(&data.material_name)
    .bind(&data.price_per_kg)
    .fetch_one(pool)
    .await
}

pub async fn update_price(
    pool: &PgPool,
    id: Uuid,
    price_per_kg: &BigDecimal,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE materials_prices
         SET price_per_kg = $1, updated_at = now()
         WHERE id = $2",
    )
    .bind(price_per_kg)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}
