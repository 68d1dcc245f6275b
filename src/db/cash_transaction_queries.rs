use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::CashTransaction;

pub async fn create(
    pool: &PgPool,
    transaction: &CashTransaction,
) -> Result<CashTransaction, sqlx::Error> {
    sqlx::query_as::<_, CashTransaction>(
        "INSERT INTO cash_transactions
             (id, transaction_type, description, amount, transaction_date, created_at, is_automatic)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING id, transaction_type, description, amount, transaction_date, created_at, is_automatic"
    )
    .bind(transaction.id)
    .bind(&transaction.transaction_type)
    .bind(&transaction.description)
    .bind(&transaction.amount)
    .bind(transaction.transaction_date)
    .bind(transaction.created_at)
    .bind(transaction.is_automatic)
    .fetch_one(pool)
    .await
}

/// Transactions whose `created_at` falls inside `[start, end)`, newest first.
pub async fn fetch_for_window(
    pool: &PgPool,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Vec<CashTransaction>, sqlx::Error> {
    sqlx::query_as::<_, CashTransaction>(
        "SELECT id, transaction_type, description, amount, transaction_date, created_at, is_automatic
         FROM cash_transactions
         WHERE created_at >= $1 AND created_at < $2
         ORDER BY created_at DESC"
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await
}

pub async fn fetch_by_id(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<CashTransaction>, sqlx::Error> {
    sqlx::query_as::<_, CashTransaction>(
        "SELECT id, transaction_type, description, amount, transaction_date, created_at, is_automatic
         FROM cash_transactions
         WHERE id = $1"
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_by_id(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM cash_transactions WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Retention delete: everything dated on or before `cutoff`.
pub async fn delete_on_or_before(
    pool: &PgPool,
    cutoff: NaiveDate,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM cash_transactions WHERE transaction_date <= $1")
        .bind(cutoff)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
