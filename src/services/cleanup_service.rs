//! Age-based retention pruning. Deletes are unconditional bulk operations
//! with no archival step; running them twice in a row deletes nothing the
//! second time.

use sqlx::PgPool;
use tracing::{error, info};

use crate::dates;
use crate::db::{cash_transaction_queries, daily_balance_queries, purchase_queries};
use crate::errors::AppError;
use crate::models::{CaixaCleanupReport, PurchasesCleanupReport};

/// Deletes cash transactions and daily balances dated on or before
/// today − 2 days. The balance delete is not attempted if the transaction
/// delete fails, so a failed run can leave the two tables pruned unevenly.
pub async fn cleanup_caixa(pool: &PgPool) -> Result<CaixaCleanupReport, AppError> {
    let cutoff = dates::retention_cutoff(dates::today());

    let deleted_transactions = cash_transaction_queries::delete_on_or_before(pool, cutoff)
        .await
        .map_err(|e| {
            error!("Failed to prune cash transactions up to {}: {}", cutoff, e);
            AppError::Db(e)
        })?;

    let deleted_balances = daily_balance_queries::delete_on_or_before(pool, cutoff)
        .await
        .map_err(|e| {
            error!("Failed to prune daily balances up to {}: {}", cutoff, e);
            AppError::Db(e)
        })?;

    info!(
        "Caixa cleanup up to {}: {} transactions, {} balances",
        cutoff, deleted_transactions, deleted_balances
    );
    Ok(CaixaCleanupReport {
        success: true,
        deleted_transactions,
        deleted_balances,
    })
}

/// Deletes purchases dated on or before today − 2 days.
pub async fn cleanup_purchases(pool: &PgPool) -> Result<PurchasesCleanupReport, AppError> {
    let cutoff = dates::retention_cutoff(dates::today());

    let deleted = purchase_queries::delete_on_or_before(pool, cutoff)
        .await
        .map_err(|e| {
            error!("Failed to prune purchases up to {}: {}", cutoff, e);
            AppError::Db(e)
        })?;

    info!("Purchases cleanup up to {}: {} rows", cutoff, deleted);
    Ok(PurchasesCleanupReport {
        success: true,
        deleted,
    })
}
