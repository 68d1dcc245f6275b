//! Daily balance reconciliation: opening-balance resolution, the pure fold
//! that turns a day's transactions into totals, and manual entry/removal.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::{error, warn};
use uuid::Uuid;

use crate::dates;
use crate::db::{cash_transaction_queries, daily_balance_queries};
use crate::errors::AppError;
use crate::models::{
    CashTransaction, CreateCashTransaction, DailyBalance, DailySummary, DailyTotals,
};

/// Pure selection behind the resolver: the day's own row wins, otherwise
/// the most recent earlier day's closing balance is inherited, otherwise
/// the yard starts from zero.
pub fn select_opening(
    day_row: Option<DailyBalance>,
    previous: Option<DailyBalance>,
) -> BigDecimal {
    if let Some(balance) = day_row {
        return balance.opening_balance;
    }
    match previous {
        Some(previous) => previous.closing_balance,
        None => BigDecimal::from(0),
    }
}

/// Opening balance for `date`: the day's own row if one exists, otherwise
/// the closing balance of the most recent earlier day, otherwise zero.
///
/// A store failure propagates; it must never be read as "no rows, start
/// from zero".
pub async fn resolve_opening_balance(
    pool: &PgPool,
    date: NaiveDate,
) -> Result<BigDecimal, AppError> {
    let day_row = daily_balance_queries::fetch_by_date(pool, date).await?;
    let previous = if day_row.is_some() {
        None
    } else {
        daily_balance_queries::fetch_latest_before(pool, date).await?
    };
    Ok(select_opening(day_row, previous))
}

/// Commutative fold over an already-fetched day of transactions.
/// `current_balance = opening + Σ entrada − Σ saida`; an empty day yields
/// the opening balance unchanged.
pub fn aggregate_totals(
    opening_balance: &BigDecimal,
    transactions: &[CashTransaction],
) -> DailyTotals {
    let mut total_in = BigDecimal::from(0);
    let mut total_out = BigDecimal::from(0);
    for tx in transactions {
        match tx.transaction_type.as_str() {
            "entrada" => total_in += &tx.amount,
            "saida" => total_out += &tx.amount,
            // Unreachable under the schema CHECK; a row slipping through a
            // future migration must not silently skew the fold.
            other => warn!(
                "Skipping transaction {} with unknown type '{}'",
                tx.id, other
            ),
        }
    }
    let current_balance = opening_balance + &total_in - &total_out;
    DailyTotals {
        total_in,
        total_out,
        current_balance,
    }
}

/// Everything the caixa page shows for `date`: resolved opening balance,
/// the day's transactions (newest first) and the derived totals. The
/// derived closing figure is not written back to `daily_balance`.
pub async fn daily_summary(pool: &PgPool, date: NaiveDate) -> Result<DailySummary, AppError> {
    let opening_balance = resolve_opening_balance(pool, date).await?;

    let (start, end) = dates::day_window(date);
    let transactions = cash_transaction_queries::fetch_for_window(pool, start, end)
        .await
        .map_err(|e| {
            error!("Failed to fetch transactions for {}: {}", date, e);
            AppError::Db(e)
        })?;

    let totals = aggregate_totals(&opening_balance, &transactions);
    Ok(DailySummary {
        date,
        opening_balance,
        total_in: totals.total_in,
        total_out: totals.total_out,
        current_balance: totals.current_balance,
        transactions,
    })
}

/// Records a manual entry for today. Validation happens here, at the
/// boundary, not in the client.
pub async fn add_transaction(
    pool: &PgPool,
    input: CreateCashTransaction,
) -> Result<CashTransaction, AppError> {
    if input.description.trim().is_empty() {
        return Err(AppError::Validation("Description cannot be empty".into()));
    }
    if input.amount <= BigDecimal::from(0) {
        return Err(AppError::Validation("Amount must be > 0".into()));
    }

    let input = CreateCashTransaction {
        description: input.description.trim().to_string(),
        ..input
    };
    let transaction = CashTransaction::new(input, dates::today());
    cash_transaction_queries::create(pool, &transaction)
        .await
        .map_err(|e| {
            error!("Failed to create cash transaction: {}", e);
            AppError::Db(e)
        })
}

/// Removes a manual entry by id. Automatic entries are created by other
/// flows and are refused here, matching the policy that the interface
/// never offers them a removal control.
pub async fn remove_transaction(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    let transaction = cash_transaction_queries::fetch_by_id(pool, id)
        .await?
        .ok_or(AppError::NotFound)?;

    if transaction.is_automatic {
        return Err(AppError::Validation(
            "Automatic transactions cannot be removed".into(),
        ));
    }

    cash_transaction_queries::delete_by_id(pool, id).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn tx(kind: TransactionType, amount: &str) -> CashTransaction {
        CashTransaction::new(
            CreateCashTransaction {
                transaction_type: kind,
                description: "test".into(),
                amount: dec(amount),
            },
            "2025-01-10".parse().unwrap(),
        )
    }

    #[test]
    fn empty_day_keeps_the_opening_balance() {
        let totals = aggregate_totals(&dec("100.00"), &[]);
        assert_eq!(totals.total_in, BigDecimal::from(0));
        assert_eq!(totals.total_out, BigDecimal::from(0));
        assert_eq!(totals.current_balance, dec("100.00"));
    }

    #[test]
    fn entrada_and_saida_roll_into_the_running_balance() {
        let transactions = vec![
            tx(TransactionType::Entrada, "50.00"),
            tx(TransactionType::Saida, "30.00"),
        ];
        let totals = aggregate_totals(&dec("100.00"), &transactions);
        assert_eq!(totals.total_in, dec("50.00"));
        assert_eq!(totals.total_out, dec("30.00"));
        assert_eq!(totals.current_balance, dec("120.00"));
    }

    #[test]
    fn aggregation_is_order_independent() {
        let mut transactions = vec![
            tx(TransactionType::Entrada, "10.00"),
            tx(TransactionType::Saida, "4.50"),
            tx(TransactionType::Entrada, "2.25"),
            tx(TransactionType::Saida, "1.00"),
        ];
        let forward = aggregate_totals(&dec("0"), &transactions);
        transactions.reverse();
        let backward = aggregate_totals(&dec("0"), &transactions);
        assert_eq!(forward, backward);
    }

    #[test]
    fn overdrafts_are_representable() {
        let transactions = vec![tx(TransactionType::Saida, "150.00")];
        let totals = aggregate_totals(&dec("100.00"), &transactions);
        assert_eq!(totals.current_balance, dec("-50.00"));
    }

    #[test]
    fn rows_with_an_unknown_type_do_not_skew_the_fold() {
        let mut odd = tx(TransactionType::Entrada, "99.99");
        odd.transaction_type = "ajuste".to_string();
        let transactions = vec![odd, tx(TransactionType::Entrada, "50.00")];
        let totals = aggregate_totals(&dec("100.00"), &transactions);
        assert_eq!(totals.total_in, dec("50.00"));
        assert_eq!(totals.current_balance, dec("150.00"));
    }

    fn balance_row(date: &str, opening: &str, closing: &str) -> DailyBalance {
        DailyBalance {
            balance_date: date.parse().unwrap(),
            opening_balance: dec(opening),
            closing_balance: dec(closing),
        }
    }

    #[test]
    fn persisted_day_row_yields_its_opening_balance_exactly() {
        let day = balance_row("2025-01-10", "250.75", "310.00");
        // Even with an earlier row available, the day's own row wins.
        let previous = balance_row("2025-01-09", "100.00", "999.99");
        assert_eq!(select_opening(Some(day), Some(previous)), dec("250.75"));
    }

    #[test]
    fn absent_day_row_inherits_the_previous_closing_balance() {
        let previous = balance_row("2025-01-08", "80.00", "145.30");
        assert_eq!(select_opening(None, Some(previous)), dec("145.30"));
    }

    #[test]
    fn no_balance_rows_at_all_resolve_to_zero() {
        assert_eq!(select_opening(None, None), BigDecimal::from(0));
    }
}
