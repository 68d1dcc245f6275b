//! Desktop-variant persistence: one JSON document on disk, owned by a
//! single-writer actor so concurrent windows cannot race the
//! read-modify-write.

mod document;
mod yard_store;

pub use document::{MaterialEntry, PurchaseEntry, StockEntry, YardDocument};
pub use yard_store::{NewPurchase, ReportKind, StoreError, YardStore};
