use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MaterialPrice {
    pub id: uuid::Uuid,
    pub material_name: String,
    pub price_per_kg: BigDecimal,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateMaterialPrice {
    pub material_name: String,
    pub price_per_kg: BigDecimal,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateMaterialPrice {
    pub price_per_kg: BigDecimal,
}
