mod cash_transaction;
mod cleanup;
mod daily_balance;
mod inventory;
mod material_price;
mod purchase;
mod weighing;

pub use cash_transaction::{CashTransaction, CreateCashTransaction, TransactionType};
pub use cleanup::{CaixaCleanupReport, PurchasesCleanupReport};
pub use daily_balance::{DailyBalance, DailySummary, DailyTotals};
pub use inventory::{InventoryItem, InventoryView, RemoveQuantity, UpdateInventoryQuantity};
pub use material_price::{CreateMaterialPrice, MaterialPrice, UpdateMaterialPrice};
pub use purchase::{CreatePurchase, Purchase};
pub use weighing::{Demonstrative, DemonstrativeLine, WeighingForm, WeighingProduct};
