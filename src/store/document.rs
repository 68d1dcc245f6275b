use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialEntry {
    pub id: u32,
    pub material: String,
    pub valor: BigDecimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockEntry {
    pub material: String,
    pub peso: BigDecimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseEntry {
    pub id: uuid::Uuid,
    pub fornecedor: String,
    pub material: String,
    pub peso: BigDecimal,
    #[serde(default)]
    pub valor_total: Option<BigDecimal>,
    pub data: chrono::DateTime<chrono::Utc>,
}

/// The whole persisted document: price table, stock levels and purchase
/// history. Always written back as one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YardDocument {
    pub precos: Vec<MaterialEntry>,
    pub estoque: Vec<StockEntry>,
    pub historico: Vec<PurchaseEntry>,
}

impl YardDocument {
    /// Default price list used when the file does not exist yet.
    pub fn seed() -> Self {
        fn dec(s: &str) -> BigDecimal {
            s.parse().expect("seed prices are valid decimals")
        }
        Self {
            precos: vec![
                MaterialEntry { id: 1, material: "Latinha".into(), valor: dec("6.50") },
                MaterialEntry { id: 2, material: "Cobre".into(), valor: dec("35.00") },
                MaterialEntry { id: 3, material: "Ferro".into(), valor: dec("0.80") },
                MaterialEntry { id: 4, material: "Papelão".into(), valor: dec("0.20") },
            ],
            estoque: Vec::new(),
            historico: Vec::new(),
        }
    }
}
