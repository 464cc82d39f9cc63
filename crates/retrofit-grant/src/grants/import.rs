use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use super::catalog::WorkCategory;
use super::domain::{LineEntry, WorksBill};

#[derive(Debug, Error)]
pub enum BillImportError {
    #[error("failed to read bill of works: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid bill of works CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: unknown work category '{category}'")]
    UnknownCategory { line: u64, category: String },
    #[error("line {line}: item '{item_id}' is not part of the {category} catalog")]
    UnknownItem {
        line: u64,
        category: WorkCategory,
        item_id: String,
    },
}

#[derive(Debug, Deserialize)]
struct BillRow {
    category: String,
    item_id: String,
    #[serde(default)]
    quantity: String,
    #[serde(default)]
    price: String,
    #[serde(default)]
    vat: String,
}

/// Loads a bill of works from CSV with the header `category,item_id,quantity,price,vat`.
///
/// Numeric columns are kept as text so the calculator applies its usual lenient parsing;
/// only categories and item ids are validated against the catalog.
pub struct BillImporter;

impl BillImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<WorksBill, BillImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<WorksBill, BillImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let mut bill = WorksBill::default();

        for record in csv_reader.records() {
            let record = record?;
            let line = record.position().map(|pos| pos.line()).unwrap_or_default();
            let row: BillRow = record.deserialize(Some(&headers))?;

            let category = WorkCategory::from_key(&row.category).ok_or_else(|| {
                BillImportError::UnknownCategory {
                    line,
                    category: row.category.clone(),
                }
            })?;
            let item = category
                .find_item(&row.item_id)
                .ok_or_else(|| BillImportError::UnknownItem {
                    line,
                    category,
                    item_id: row.item_id.clone(),
                })?;

            bill.insert(
                category,
                item.id,
                LineEntry {
                    quantity: row.quantity,
                    price: row.price,
                    vat: row.vat,
                },
            );
        }

        info!(entries = bill.len(), "imported bill of works");
        Ok(bill)
    }
}
