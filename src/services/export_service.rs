//! CSV renditions of the day reports. Column sets, labels and trailing
//! total rows mirror the printed spreadsheets; cell styling is the
//! spreadsheet viewer's problem, not ours.

use bigdecimal::rounding::RoundingMode;
use bigdecimal::BigDecimal;
use chrono::NaiveDate;

use crate::dates::yard_offset;
use crate::errors::AppError;
use crate::models::{DailySummary, InventoryView, Purchase};

fn money(value: &BigDecimal) -> String {
    value.with_scale_round(2, RoundingMode::HalfUp).to_string()
}

fn writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new().flexible(true).from_writer(Vec::new())
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, AppError> {
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Report(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Report(e.to_string()))
}

pub fn purchases_filename(date: NaiveDate) -> String {
    format!("compras-{date}.csv")
}

pub fn inventory_filename() -> String {
    "estoque-geral.csv".to_string()
}

pub fn cash_flow_filename(date: NaiveDate) -> String {
    format!("caixa-{date}.csv")
}

pub fn purchases_csv(purchases: &[Purchase]) -> Result<String, AppError> {
    let mut w = writer();
    w.write_record([
        "Material",
        "Quantidade (kg)",
        "Preço/kg",
        "Valor Total",
        "Data",
        "Hora",
    ])
    .map_err(|e| AppError::Report(e.to_string()))?;

    let mut total_kg = BigDecimal::from(0);
    let mut total_value = BigDecimal::from(0);
    for purchase in purchases {
        let local = purchase.created_at.with_timezone(&yard_offset());
        w.write_record([
            purchase.material_name.clone(),
            money(&purchase.quantity_kg),
            money(&purchase.price_per_kg),
            money(&purchase.total_value),
            purchase.purchase_date.format("%d/%m/%Y").to_string(),
            local.format("%H:%M").to_string(),
        ])
        .map_err(|e| AppError::Report(e.to_string()))?;
        total_kg += &purchase.quantity_kg;
        total_value += &purchase.total_value;
    }

    w.write_record(["", "", "", "", "", ""])
        .map_err(|e| AppError::Report(e.to_string()))?;
    w.write_record([
        "TOTAL GERAL".to_string(),
        money(&total_kg),
        String::new(),
        money(&total_value),
        String::new(),
        String::new(),
    ])
    .map_err(|e| AppError::Report(e.to_string()))?;

    finish(w)
}

pub fn inventory_csv(items: &[InventoryView]) -> Result<String, AppError> {
    let mut w = writer();
    w.write_record(["Material", "Quantidade em Estoque (kg)", "Última Atualização"])
        .map_err(|e| AppError::Report(e.to_string()))?;

    let mut total_kg = BigDecimal::from(0);
    for item in items {
        let local = item.last_updated.with_timezone(&yard_offset());
        w.write_record([
            item.material_name.clone(),
            money(&item.quantity_kg),
            local.format("%d/%m/%Y %H:%M").to_string(),
        ])
        .map_err(|e| AppError::Report(e.to_string()))?;
        total_kg += &item.quantity_kg;
    }

    w.write_record(["", "", ""])
        .map_err(|e| AppError::Report(e.to_string()))?;
    w.write_record([
        "TOTAL GERAL EM ESTOQUE".to_string(),
        money(&total_kg),
        String::new(),
    ])
    .map_err(|e| AppError::Report(e.to_string()))?;

    finish(w)
}

pub fn cash_flow_csv(summary: &DailySummary) -> Result<String, AppError> {
    let mut w = writer();
    w.write_record(["Saldo Inicial:", money(&summary.opening_balance).as_str()])
        .map_err(|e| AppError::Report(e.to_string()))?;
    w.write_record(["Entradas:", money(&summary.total_in).as_str()])
        .map_err(|e| AppError::Report(e.to_string()))?;
    w.write_record(["Saídas:", money(&summary.total_out).as_str()])
        .map_err(|e| AppError::Report(e.to_string()))?;
    w.write_record(["SALDO ATUAL:", money(&summary.current_balance).as_str()])
        .map_err(|e| AppError::Report(e.to_string()))?;
    w.write_record([""]).map_err(|e| AppError::Report(e.to_string()))?;

    w.write_record(["Tipo", "Descrição", "Valor", "Hora", "Origem"])
        .map_err(|e| AppError::Report(e.to_string()))?;
    for tx in &summary.transactions {
        let local = tx.created_at.with_timezone(&yard_offset());
        let kind = if tx.transaction_type == "entrada" {
            "ENTRADA"
        } else {
            "SAÍDA"
        };
        w.write_record([
            kind.to_string(),
            tx.description.clone(),
            money(&tx.amount),
            local.format("%H:%M").to_string(),
            if tx.is_automatic { "Automático" } else { "Manual" }.to_string(),
        ])
        .map_err(|e| AppError::Report(e.to_string()))?;
    }

    finish(w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CashTransaction, CreateCashTransaction, TransactionType};
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn purchases_report_carries_headers_and_grand_total() {
        let purchases = vec![
            Purchase::new(
                "Ferro".into(),
                dec("12.5"),
                dec("0.80"),
                dec("10.00"),
                "2025-01-10".parse().unwrap(),
            ),
            Purchase::new(
                "Cobre".into(),
                dec("2.0"),
                dec("35.00"),
                dec("70.00"),
                "2025-01-10".parse().unwrap(),
            ),
        ];
        let csv = purchases_csv(&purchases).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Material,Quantidade (kg),Preço/kg,Valor Total,Data,Hora"
        );
        assert!(csv.contains("Ferro,12.50,0.80,10.00,10/01/2025"));
        assert!(csv.lines().last().unwrap().starts_with("TOTAL GERAL,14.50,,80.00"));
    }

    #[test]
    fn inventory_report_totals_the_stock_weight() {
        let items = vec![
            InventoryView {
                id: uuid::Uuid::new_v4(),
                material_name: "Latinha".into(),
                quantity_kg: dec("40.00"),
                last_updated: chrono::Utc::now(),
                price_per_kg: dec("6.50"),
            },
            InventoryView {
                id: uuid::Uuid::new_v4(),
                material_name: "Ferro".into(),
                quantity_kg: dec("12.50"),
                last_updated: chrono::Utc::now(),
                price_per_kg: dec("0.80"),
            },
        ];
        let csv = inventory_csv(&items).unwrap();
        assert_eq!(
            csv.lines().next().unwrap(),
            "Material,Quantidade em Estoque (kg),Última Atualização"
        );
        assert!(csv.lines().last().unwrap().starts_with("TOTAL GERAL EM ESTOQUE,52.50"));
    }

    #[test]
    fn cash_flow_report_opens_with_the_summary_block() {
        let tx = CashTransaction::new(
            CreateCashTransaction {
                transaction_type: TransactionType::Entrada,
                description: "venda de lote".into(),
                amount: dec("50.00"),
            },
            "2025-01-10".parse().unwrap(),
        );
        let summary = DailySummary {
            date: "2025-01-10".parse().unwrap(),
            opening_balance: dec("100.00"),
            total_in: dec("50.00"),
            total_out: dec("0"),
            current_balance: dec("150.00"),
            transactions: vec![tx],
        };
        let csv = cash_flow_csv(&summary).unwrap();
        assert!(csv.starts_with("Saldo Inicial:,100.00"));
        assert!(csv.contains("SALDO ATUAL:,150.00"));
        assert!(csv.contains("Tipo,Descrição,Valor,Hora,Origem"));
        assert!(csv.contains("ENTRADA,venda de lote,50.00"));
        assert!(csv.lines().last().unwrap().ends_with(",Manual"));
    }

    #[test]
    fn empty_purchase_list_still_renders_a_zero_total() {
        let csv = purchases_csv(&[]).unwrap();
        assert!(csv.lines().last().unwrap().contains("0.00"));
    }
}
