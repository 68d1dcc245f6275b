pub mod caixa_service;
pub mod cleanup_service;
pub mod export_service;
pub mod purchase_service;
pub mod weighing_service;
