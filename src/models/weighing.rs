use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Weighing form as filled at the scale. Nothing here is persisted; the
/// demonstrative is computed per request and handed to the PDF renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeighingForm {
    #[serde(default)]
    pub razao_social: String,
    #[serde(default)]
    pub boleto: String,
    #[serde(default)]
    pub nome_fornecedor: String,
    #[serde(default)]
    pub cnpj_cpf: String,
    #[serde(default)]
    pub cidade: String,
    #[serde(default)]
    pub uf: String,
    #[serde(default)]
    pub tipo_pesagem: String,
    #[serde(default)]
    pub motorista: String,
    #[serde(default)]
    pub placa: String,
    #[serde(default)]
    pub balanceiro: String,
    #[serde(default)]
    pub observacao: String,
    pub produtos: Vec<WeighingProduct>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeighingProduct {
    pub nome: String,
    pub bruto: BigDecimal,
    pub tara: BigDecimal,
    #[serde(default)]
    pub desc_kg: BigDecimal,
    pub preco: BigDecimal,
    #[serde(default)]
    pub unidade: String,
    #[serde(default)]
    pub hora: String,
}

/// One computed product row of the demonstrative.
#[derive(Debug, Clone, Serialize)]
pub struct DemonstrativeLine {
    pub nome: String,
    pub bruto: BigDecimal,
    pub tara: BigDecimal,
    pub desc_kg: BigDecimal,
    pub liquido: BigDecimal,
    pub preco: BigDecimal,
    pub unidade: String,
    pub total_rs: BigDecimal,
    pub hora: String,
}

/// Everything that appears on the printed "demonstrativo de pesagem":
/// the computed rows, the summary block and the artifact filename.
#[derive(Debug, Serialize)]
pub struct Demonstrative {
    pub filename: String,
    pub form: WeighingForm,
    pub linhas: Vec<DemonstrativeLine>,
    pub total_bruto: BigDecimal,
    pub total_tara: BigDecimal,
    pub total_liquido: BigDecimal,
    pub total_geral: BigDecimal,
}
