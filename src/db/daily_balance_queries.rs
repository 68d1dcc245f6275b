use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::DailyBalance;

pub async fn fetch_by_date(
    pool: &PgPool,
    date: NaiveDate,
) -> Result<Option<DailyBalance>, sqlx::Error> {
    sqlx::query_as::<_, DailyBalance>(
        "SELECT balance_date, opening_balance, closing_balance
         FROM daily_balance
         WHERE balance_date = $1",
    )
    .bind(date)
    .fetch_optional(pool)
    .await
}

/// Most recent balance row strictly before `date`, if any.
pub async fn fetch_latest_before(
    pool: &PgPool,
    date: NaiveDate,
) -> Result<Option<DailyBalance>, sqlx::Error> {
    sqlx::query_as::<_, DailyBalance>(
        "SELECT balance_date, opening_balance, closing_balance
         FROM daily_balance
         WHERE balance_date < $1
         ORDER BY balance_date DESC
         LIMIT 1",
    )
    .bind(date)
    .fetch_optional(pool)
    .await
}

pub async fn delete_on_or_before(
    pool: &PgPool,
    cutoff: NaiveDate,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM daily_balance WHERE balance_date <= $1")
        .bind(cutoff)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
