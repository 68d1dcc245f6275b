//! End-to-end checks of the daily balance reconciliation math and the
//! retention cutoff, exercised through the public crate API.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;

use sucatao_backend::dates;
use sucatao_backend::models::{CashTransaction, CreateCashTransaction, TransactionType};
use sucatao_backend::services::{caixa_service, purchase_service};

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn tx(kind: TransactionType, amount: &str) -> CashTransaction {
    CashTransaction::new(
        CreateCashTransaction {
            transaction_type: kind,
            description: "movimento".into(),
            amount: dec(amount),
        },
        date("2025-01-10"),
    )
}

#[test]
fn reconciliation_matches_the_reference_scenario() {
    // opening 100.00, +50.00 entrada, -30.00 saida -> 120.00
    let transactions = vec![
        tx(TransactionType::Entrada, "50.00"),
        tx(TransactionType::Saida, "30.00"),
    ];
    let totals = caixa_service::aggregate_totals(&dec("100.00"), &transactions);
    assert_eq!(totals.total_in, dec("50.00"));
    assert_eq!(totals.total_out, dec("30.00"));
    assert_eq!(totals.current_balance, dec("120.00"));
}

#[test]
fn current_balance_always_equals_opening_plus_in_minus_out() {
    let transactions = vec![
        tx(TransactionType::Entrada, "12.34"),
        tx(TransactionType::Entrada, "0.01"),
        tx(TransactionType::Saida, "7.77"),
        tx(TransactionType::Saida, "100.00"),
    ];
    let totals = caixa_service::aggregate_totals(&dec("55.55"), &transactions);
    let expected = dec("55.55") + &totals.total_in - &totals.total_out;
    assert_eq!(totals.current_balance, expected);
}

#[test]
fn cutoff_keeps_yesterday_and_drops_the_day_before() {
    let today = date("2025-01-10");
    let cutoff = dates::retention_cutoff(today);
    assert_eq!(cutoff, date("2025-01-08"));

    // transaction_date <= cutoff is deleted, cutoff + 1 day survives
    assert!(date("2025-01-08") <= cutoff);
    assert!(date("2025-01-09") > cutoff);
}

#[test]
fn retention_pruning_converges_on_the_second_pass() {
    let today = date("2025-01-10");
    let cutoff = dates::retention_cutoff(today);

    let days: Vec<NaiveDate> = (5..=10)
        .map(|d| date(&format!("2025-01-{d:02}")))
        .collect();
    let survivors: Vec<NaiveDate> = days.iter().copied().filter(|d| *d > cutoff).collect();
    assert_eq!(survivors, vec![date("2025-01-09"), date("2025-01-10")]);

    // a repeated run over the survivors deletes nothing further
    let second_pass: Vec<NaiveDate> =
        survivors.iter().copied().filter(|d| *d > cutoff).collect();
    assert_eq!(second_pass, survivors);
}

#[test]
fn purchase_total_round_trips_at_two_decimals() {
    assert_eq!(
        purchase_service::compute_total(&dec("12.5"), &dec("0.80")),
        dec("10.00")
    );
}
