use serde::Serialize;

/// Wire shape of `POST /api/cleanup/caixa`.
#[derive(Debug, Serialize)]
pub struct CaixaCleanupReport {
    pub success: bool,
    #[serde(rename = "deletedTransactions")]
    pub deleted_transactions: u64,
    #[serde(rename = "deletedBalances")]
    pub deleted_balances: u64,
}

/// Wire shape of `POST /api/cleanup/purchases`.
#[derive(Debug, Serialize)]
pub struct PurchasesCleanupReport {
    pub success: bool,
    pub deleted: u64,
}
