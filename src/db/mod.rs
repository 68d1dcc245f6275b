pub mod cash_transaction_queries;
pub mod daily_balance_queries;
pub mod inventory_queries;
pub mod material_price_queries;
pub mod purchase_queries;
