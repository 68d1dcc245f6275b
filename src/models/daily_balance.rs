use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::CashTransaction;

/// One persisted row per calendar day that had activity. The closing figure
/// shown to the user is derived on read and is not written back here, so the
/// stored `closing_balance` can lag the displayed one.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DailyBalance {
    pub balance_date: NaiveDate,
    pub opening_balance: BigDecimal,
    pub closing_balance: BigDecimal,
}

/// Result of folding a day's transactions over the opening balance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTotals {
    pub total_in: BigDecimal,
    pub total_out: BigDecimal,
    pub current_balance: BigDecimal,
}

/// What the caixa page renders: resolved opening balance, the day's totals
/// and the transaction list ordered `created_at DESC`.
#[derive(Debug, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub opening_balance: BigDecimal,
    pub total_in: BigDecimal,
    pub total_out: BigDecimal,
    pub current_balance: BigDecimal,
    pub transactions: Vec<CashTransaction>,
}
