use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InventoryItem {
    pub id: uuid::Uuid,
    pub material_name: String,
    pub quantity_kg: BigDecimal,
    pub last_updated: chrono::DateTime<chrono::Utc>,
}

/// Inventory row enriched with the current purchase price so the client can
/// show the stock value. Materials without a price row report zero.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct InventoryView {
    pub id: uuid::Uuid,
    pub material_name: String,
    pub quantity_kg: BigDecimal,
    pub last_updated: chrono::DateTime<chrono::Utc>,
    pub price_per_kg: BigDecimal,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateInventoryQuantity {
    pub quantity_kg: BigDecimal,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RemoveQuantity {
    pub quantity_kg: BigDecimal,
}
