use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Purchase {
    pub id: uuid::Uuid,
    pub material_name: String,
    pub quantity_kg: BigDecimal,
    pub price_per_kg: BigDecimal,
    pub total_value: BigDecimal,
    pub purchase_date: NaiveDate,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// The price is looked up from the price table and the total is computed
/// server-side; neither is accepted from the client.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatePurchase {
    pub material_name: String,
    pub quantity_kg: BigDecimal,
}

impl Purchase {
    pub fn new(
        material_name: String,
        quantity_kg: BigDecimal,
        price_per_kg: BigDecimal,
        total_value: BigDecimal,
        purchase_date: NaiveDate,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            material_name,
            quantity_kg,
            price_per_kg,
            total_value,
            purchase_date,
            created_at: chrono::Utc::now(),
        }
    }
}
