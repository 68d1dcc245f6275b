//! Computes every figure printed on the weighing demonstrative. The PDF
//! drawing itself is delegated; this service owns the numbers.

use bigdecimal::rounding::RoundingMode;
use bigdecimal::BigDecimal;

use crate::errors::AppError;
use crate::models::{Demonstrative, DemonstrativeLine, WeighingForm};

/// `demonstrativo-<boleto>.pdf`, falling back to `pesagem` when the form
/// has no boleto number.
pub fn demonstrative_filename(boleto: &str) -> String {
    let reference = boleto.trim();
    if reference.is_empty() {
        "demonstrativo-pesagem.pdf".to_string()
    } else {
        format!("demonstrativo-{reference}.pdf")
    }
}

/// Per row: `liquido = bruto − tara − desc_kg`, `total = liquido × preco`
/// (2 dp). A row whose deductions exceed the gross weight is a scale
/// operator mistake and is rejected.
pub fn compute_demonstrative(form: WeighingForm) -> Result<Demonstrative, AppError> {
    if form.produtos.is_empty() {
        return Err(AppError::Validation(
            "Weighing needs at least one product".into(),
        ));
    }

    let zero = BigDecimal::from(0);
    let mut linhas = Vec::with_capacity(form.produtos.len());
    let mut total_bruto = zero.clone();
    let mut total_tara = zero.clone();
    let mut total_liquido = zero.clone();
    let mut total_geral = zero.clone();

    for produto in &form.produtos {
        if produto.nome.trim().is_empty() {
            return Err(AppError::Validation("Product name cannot be empty".into()));
        }
        if produto.bruto <= zero {
            return Err(AppError::Validation(format!(
                "Gross weight must be > 0 for {}",
                produto.nome
            )));
        }
        if produto.tara < zero || produto.desc_kg < zero || produto.preco < zero {
            return Err(AppError::Validation(format!(
                "Negative tare, discount or price for {}",
                produto.nome
            )));
        }

        let liquido = &produto.bruto - &produto.tara - &produto.desc_kg;
        if liquido < zero {
            return Err(AppError::Validation(format!(
                "Deductions exceed gross weight for {}",
                produto.nome
            )));
        }
        let total_rs = (&liquido * &produto.preco).with_scale_round(2, RoundingMode::HalfUp);

        total_bruto += &produto.bruto;
        total_tara += &produto.tara;
        total_liquido += &liquido;
        total_geral += &total_rs;

        linhas.push(DemonstrativeLine {
            nome: produto.nome.clone(),
            bruto: produto.bruto.clone(),
            tara: produto.tara.clone(),
            desc_kg: produto.desc_kg.clone(),
            liquido,
            preco: produto.preco.clone(),
            unidade: produto.unidade.clone(),
            total_rs,
            hora: produto.hora.clone(),
        });
    }

    let filename = demonstrative_filename(&form.boleto);
    Ok(Demonstrative {
        filename,
        form,
        linhas,
        total_bruto,
        total_tara,
        total_liquido,
        total_geral,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeighingProduct;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn produto(nome: &str, bruto: &str, tara: &str, desc: &str, preco: &str) -> WeighingProduct {
        WeighingProduct {
            nome: nome.into(),
            bruto: dec(bruto),
            tara: dec(tara),
            desc_kg: dec(desc),
            preco: dec(preco),
            unidade: "kg".into(),
            hora: "08:30".into(),
        }
    }

    fn form(produtos: Vec<WeighingProduct>) -> WeighingForm {
        WeighingForm {
            razao_social: String::new(),
            boleto: "1042".into(),
            nome_fornecedor: "Fornecedor Teste".into(),
            cnpj_cpf: String::new(),
            cidade: "Itaguaí".into(),
            uf: "RJ".into(),
            tipo_pesagem: "entrada".into(),
            motorista: String::new(),
            placa: String::new(),
            balanceiro: String::new(),
            observacao: String::new(),
            produtos,
        }
    }

    #[test]
    fn net_weight_subtracts_tare_and_discount() {
        let result = compute_demonstrative(form(vec![produto(
            "Ferro", "1200.0", "150.0", "50.0", "0.80",
        )]))
        .unwrap();
        assert_eq!(result.linhas[0].liquido, dec("1000.0"));
        assert_eq!(result.linhas[0].total_rs, dec("800.00"));
        assert_eq!(result.total_geral, dec("800.00"));
    }

    #[test]
    fn totals_sum_across_rows() {
        let result = compute_demonstrative(form(vec![
            produto("Ferro", "100.0", "10.0", "0", "0.80"),
            produto("Cobre", "20.0", "2.0", "0", "35.00"),
        ]))
        .unwrap();
        assert_eq!(result.total_bruto, dec("120.0"));
        assert_eq!(result.total_liquido, dec("108.0"));
        // 90 * 0.80 + 18 * 35.00
        assert_eq!(result.total_geral, dec("702.00"));
    }

    #[test]
    fn deductions_larger_than_gross_are_rejected() {
        let result =
            compute_demonstrative(form(vec![produto("Ferro", "100.0", "90.0", "20.0", "0.80")]));
        assert!(result.is_err());
    }

    #[test]
    fn filename_falls_back_when_boleto_is_blank() {
        assert_eq!(demonstrative_filename("  "), "demonstrativo-pesagem.pdf");
        assert_eq!(demonstrative_filename("1042"), "demonstrativo-1042.pdf");
    }

    #[test]
    fn empty_product_list_is_rejected() {
        assert!(compute_demonstrative(form(vec![])).is_err());
    }
}
