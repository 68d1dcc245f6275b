use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Entrada,
    Saida,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Entrada => "entrada",
            TransactionType::Saida => "saida",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CashTransaction {
    pub id: uuid::Uuid,
    pub transaction_type: String, // "entrada" | "saida", constrained by the schema
    pub description: String,
    pub amount: BigDecimal,
    pub transaction_date: NaiveDate,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub is_automatic: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateCashTransaction {
    pub transaction_type: TransactionType,
    pub description: String,
    pub amount: BigDecimal,
}

impl CashTransaction {
    /// Builds a manual entry for `transaction_date`; automatic entries are
    /// only ever created by other flows, never through this constructor.
    pub fn new(data: CreateCashTransaction, transaction_date: NaiveDate) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            transaction_type: data.transaction_type.as_str().to_string(),
            description: data.description,
            amount: data.amount,
            transaction_date,
            created_at: chrono::Utc::now(),
            is_automatic: false,
        }
    }
}
