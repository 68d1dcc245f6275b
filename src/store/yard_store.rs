use std::path::{Path, PathBuf};

use bigdecimal::rounding::RoundingMode;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{error, info};

use crate::dates::yard_offset;
use crate::store::document::{MaterialEntry, PurchaseEntry, StockEntry, YardDocument};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Document error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Report error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Store task is gone")]
    Closed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPurchase {
    pub fornecedor: String,
    pub material: String,
    pub peso: BigDecimal,
    #[serde(default)]
    pub valor_total: Option<BigDecimal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Today's purchase history.
    Dia,
    /// Current stock levels.
    Estoque,
}

enum Command {
    GetDados(oneshot::Sender<YardDocument>),
    UpdatePrecos(Vec<MaterialEntry>, oneshot::Sender<Result<(), StoreError>>),
    UpdateEstoque(Vec<StockEntry>, oneshot::Sender<Result<(), StoreError>>),
    SalvarCompra(NewPurchase, oneshot::Sender<Result<PurchaseEntry, StoreError>>),
    GerarRelatorio(ReportKind, PathBuf, oneshot::Sender<Result<PathBuf, StoreError>>),
}

/// Handle to the single-writer task that owns the JSON document. Clones
/// share the same queue, so every mutation is serialized.
#[derive(Clone)]
pub struct YardStore {
    tx: mpsc::Sender<Command>,
}

impl YardStore {
    /// Loads the document (seeding the default price list when the file is
    /// missing) and spawns the writer task.
    pub fn open(path: PathBuf) -> Result<Self, StoreError> {
        let document = load_or_seed(&path)?;
        let (tx, rx) = mpsc::channel(32);
        tokio::spawn(run(path, document, rx));
        Ok(Self { tx })
    }

    pub async fn get_dados(&self) -> Result<YardDocument, StoreError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::GetDados(reply))
            .await
            .map_err(|_| StoreError::Closed)?;
        rx.await.map_err(|_| StoreError::Closed)
    }

    pub async fn update_precos(&self, precos: Vec<MaterialEntry>) -> Result<(), StoreError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::UpdatePrecos(precos, reply))
            .await
            .map_err(|_| StoreError::Closed)?;
        rx.await.map_err(|_| StoreError::Closed)?
    }

    pub async fn update_estoque(&self, estoque: Vec<StockEntry>) -> Result<(), StoreError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::UpdateEstoque(estoque, reply))
            .await
            .map_err(|_| StoreError::Closed)?;
        rx.await.map_err(|_| StoreError::Closed)?
    }

    /// Appends the purchase to the history and bumps the matching stock row
    /// (creating it for an unseen material). Both land in the same file
    /// write.
    pub async fn salvar_compra(&self, compra: NewPurchase) -> Result<PurchaseEntry, StoreError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::SalvarCompra(compra, reply))
            .await
            .map_err(|_| StoreError::Closed)?;
        rx.await.map_err(|_| StoreError::Closed)?
    }

    /// Writes the requested CSV report into `dir` and returns its path.
    pub async fn gerar_relatorio(
        &self,
        kind: ReportKind,
        dir: &Path,
    ) -> Result<PathBuf, StoreError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::GerarRelatorio(kind, dir.to_path_buf(), reply))
            .await
            .map_err(|_| StoreError::Closed)?;
        rx.await.map_err(|_| StoreError::Closed)?
    }
}

fn load_or_seed(path: &Path) -> Result<YardDocument, StoreError> {
    if path.exists() {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    } else {
        let document = YardDocument::seed();
        persist(path, &document)?;
        info!("Seeded yard document at {}", path.display());
        Ok(document)
    }
}

fn persist(path: &Path, document: &YardDocument) -> Result<(), StoreError> {
    let raw = serde_json::to_string_pretty(document)?;
    std::fs::write(path, raw)?;
    Ok(())
}

async fn run(path: PathBuf, mut document: YardDocument, mut rx: mpsc::Receiver<Command>) {
    while let Some(command) = rx.recv().await {
        match command {
            Command::GetDados(reply) => {
                let _ = reply.send(document.clone());
            }
            Command::UpdatePrecos(precos, reply) => {
                document.precos = precos;
                let _ = reply.send(persist(&path, &document));
            }
            Command::UpdateEstoque(estoque, reply) => {
                document.estoque = estoque;
                let _ = reply.send(persist(&path, &document));
            }
            Command::SalvarCompra(compra, reply) => {
                let _ = reply.send(apply_purchase(&path, &mut document, compra));
            }
            Command::GerarRelatorio(kind, dir, reply) => {
                let _ = reply.send(write_report(&document, kind, &dir));
            }
        }
    }
}

fn apply_purchase(
    path: &Path,
    document: &mut YardDocument,
    compra: NewPurchase,
) -> Result<PurchaseEntry, StoreError> {
    let entry = PurchaseEntry {
        id: uuid::Uuid::new_v4(),
        fornecedor: compra.fornecedor,
        material: compra.material,
        peso: compra.peso,
        valor_total: compra.valor_total,
        data: chrono::Utc::now(),
    };
    document.historico.push(entry.clone());

    match document
        .estoque
        .iter_mut()
        .find(|item| item.material == entry.material)
    {
        Some(item) => item.peso += &entry.peso,
        None => document.estoque.push(StockEntry {
            material: entry.material.clone(),
            peso: entry.peso.clone(),
        }),
    }

    if let Err(e) = persist(path, document) {
        error!("Failed to persist purchase of {}: {}", entry.material, e);
        return Err(e);
    }
    Ok(entry)
}

fn write_report(
    document: &YardDocument,
    kind: ReportKind,
    dir: &Path,
) -> Result<PathBuf, StoreError> {
    let (filename, contents) = match kind {
        ReportKind::Estoque => ("estoque-geral.csv", stock_report(document)?),
        ReportKind::Dia => ("compras-do-dia.csv", purchases_report(document)?),
    };
    let path = dir.join(filename);
    std::fs::write(&path, contents)?;
    Ok(path)
}

fn money(value: &BigDecimal) -> String {
    value.with_scale_round(2, RoundingMode::HalfUp).to_string()
}

fn stock_report(document: &YardDocument) -> Result<String, StoreError> {
    let mut w = csv::Writer::from_writer(Vec::new());
    w.write_record(["MATERIAL", "PESO TOTAL (KG)"])?;
    for item in &document.estoque {
        w.write_record([item.material.clone(), money(&item.peso)])?;
    }
    finish(w)
}

fn purchases_report(document: &YardDocument) -> Result<String, StoreError> {
    let mut w = csv::Writer::from_writer(Vec::new());
    w.write_record([
        "DATA/HORA",
        "FORNECEDOR",
        "MATERIAL",
        "PESO (KG)",
        "VALOR TOTAL (R$)",
    ])?;
    for item in &document.historico {
        let local = item.data.with_timezone(&yard_offset());
        w.write_record([
            local.format("%d/%m/%Y %H:%M").to_string(),
            item.fornecedor.clone(),
            item.material.clone(),
            money(&item.peso),
            item.valor_total.as_ref().map(money).unwrap_or_default(),
        ])?;
    }
    finish(w)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, StoreError> {
    let bytes = writer.into_inner().map_err(|e| {
        StoreError::Io(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))
    })?;
    String::from_utf8(bytes)
        .map_err(|e| StoreError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn compra(material: &str, peso: &str) -> NewPurchase {
        NewPurchase {
            fornecedor: "Fornecedor Teste".into(),
            material: material.into(),
            peso: dec(peso),
            valor_total: None,
        }
    }

    #[tokio::test]
    async fn missing_file_is_seeded_with_the_default_price_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = YardStore::open(dir.path().join("db.json")).unwrap();
        let dados = store.get_dados().await.unwrap();
        assert_eq!(dados.precos.len(), 4);
        assert!(dados.estoque.is_empty());
        assert!(dados.historico.is_empty());
    }

    #[tokio::test]
    async fn purchase_of_unseen_material_creates_the_stock_row() {
        let dir = tempfile::tempdir().unwrap();
        let store = YardStore::open(dir.path().join("db.json")).unwrap();

        store.salvar_compra(compra("Ferro", "120.5")).await.unwrap();
        let dados = store.get_dados().await.unwrap();
        assert_eq!(dados.historico.len(), 1);
        assert_eq!(dados.estoque.len(), 1);
        assert_eq!(dados.estoque[0].peso, dec("120.5"));
    }

    #[tokio::test]
    async fn repeat_purchase_increments_the_existing_row() {
        let dir = tempfile::tempdir().unwrap();
        let store = YardStore::open(dir.path().join("db.json")).unwrap();

        store.salvar_compra(compra("Ferro", "100")).await.unwrap();
        store.salvar_compra(compra("Ferro", "50.5")).await.unwrap();
        let dados = store.get_dados().await.unwrap();
        assert_eq!(dados.estoque.len(), 1);
        assert_eq!(dados.estoque[0].peso, dec("150.5"));
    }

    #[tokio::test]
    async fn document_survives_a_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");

        let store = YardStore::open(path.clone()).unwrap();
        store.salvar_compra(compra("Cobre", "12")).await.unwrap();
        drop(store);

        let reopened = YardStore::open(path).unwrap();
        let dados = reopened.get_dados().await.unwrap();
        assert_eq!(dados.historico.len(), 1);
        assert_eq!(dados.estoque[0].material, "Cobre");
    }

    #[tokio::test]
    async fn update_precos_overwrites_the_whole_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = YardStore::open(dir.path().join("db.json")).unwrap();

        store
            .update_precos(vec![MaterialEntry {
                id: 1,
                material: "Alumínio".into(),
                valor: dec("7.20"),
            }])
            .await
            .unwrap();
        let dados = store.get_dados().await.unwrap();
        assert_eq!(dados.precos.len(), 1);
        assert_eq!(dados.precos[0].material, "Alumínio");
    }

    #[tokio::test]
    async fn stock_report_lands_in_the_requested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = YardStore::open(dir.path().join("db.json")).unwrap();
        store.salvar_compra(compra("Ferro", "80")).await.unwrap();

        let path = store
            .gerar_relatorio(ReportKind::Estoque, dir.path())
            .await
            .unwrap();
        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.starts_with("MATERIAL,PESO TOTAL (KG)"));
        assert!(contents.contains("Ferro,80.00"));
    }
}
