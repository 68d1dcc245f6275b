pub mod caixa;
pub mod cleanup;
pub mod exports;
pub mod health;
pub mod inventory;
pub mod materials;
pub mod purchases;
pub mod weighing;
