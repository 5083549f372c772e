use error_stack::ResultExt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument};

use crate::domain::record::Record;
use crate::domain::table::{TableName, DEFAULT_COLUMNS, DEFAULT_ROWS};
use crate::ports::spreadsheet_store::SpreadsheetStore;

#[derive(Error, Debug)]
pub enum SpreadsheetGatewayError {
    #[error("Failed to ensure the required tables exist")]
    EnsureTables,
    #[error("Failed to read table {0}")]
    ReadTable(TableName),
    #[error("Failed to write table {0}")]
    WriteTable(TableName),
}

/// Record-level access to the dashboard's tables.
pub struct SpreadsheetGateway {
    store: Arc<dyn SpreadsheetStore>,
}

impl std::fmt::Debug for SpreadsheetGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpreadsheetGateway")
            .field("store", &"<SpreadsheetStore>")
            .finish()
    }
}

impl SpreadsheetGateway {
    pub fn new(store: Arc<dyn SpreadsheetStore>) -> Self {
        Self { store }
    }

    /// Creates every required table that is missing and returns the ones it
    /// created. Safe to call on every page load.
    #[instrument(skip(self))]
    pub async fn ensure_tables(
        &self,
    ) -> error_stack::Result<Vec<TableName>, SpreadsheetGatewayError> {
        let existing = self
            .store
            .table_titles()
            .await
            .change_context(SpreadsheetGatewayError::EnsureTables)?;

        let mut created = Vec::new();
        for table in TableName::required() {
            if existing.iter().any(|title| title == table.title()) {
                continue;
            }
            self.store
                .add_table(table.title(), DEFAULT_ROWS, DEFAULT_COLUMNS)
                .await
                .change_context(SpreadsheetGatewayError::EnsureTables)?;
            info!("Created table {}", table);
            created.push(table);
        }

        Ok(created)
    }

    /// All rows of `table`, keyed by its header row.
    #[instrument(skip(self))]
    pub async fn read_table(
        &self,
        table: TableName,
    ) -> error_stack::Result<Vec<Record>, SpreadsheetGatewayError> {
        let grid = self
            .store
            .read_values(table.title())
            .await
            .change_context(SpreadsheetGatewayError::ReadTable(table))?;

        Ok(records_from_grid(grid))
    }

    /// Overwrites `table` from its first cell with a header row and one row per
    /// record. Writing no records leaves the table untouched.
    #[instrument(skip(self, records), fields(records = records.len()))]
    pub async fn write_table(
        &self,
        table: TableName,
        records: &[Record],
    ) -> error_stack::Result<(), SpreadsheetGatewayError> {
        if records.is_empty() {
            return Ok(());
        }

        let header = derive_header(table.declared_schema(), records);
        let mut values = Vec::with_capacity(records.len() + 1);
        values.push(header.clone());
        values.extend(records.iter().map(|record| {
            header
                .iter()
                .map(|key| record.value_or_blank(key).to_string())
                .collect::<Vec<_>>()
        }));

        self.store
            .write_values(table.title(), values)
            .await
            .change_context(SpreadsheetGatewayError::WriteTable(table))
    }
}

/// Turns a header-first grid into records. Blank rows inside the table are
/// kept as all-empty records so a write-back covers the same rows.
pub fn records_from_grid(grid: Vec<Vec<String>>) -> Vec<Record> {
    let mut rows = grid.into_iter();
    let Some(header) = rows.next() else {
        return Vec::new();
    };

    rows.map(|row| Record::from_row(&header, &row)).collect()
}

/// Columns to write: the declared schema if there is one, otherwise the first
/// record's keys; then any key first seen in a later record.
///
/// # Examples
/// ```
/// use competitor_intel_core::application::spreadsheet_gateway::derive_header;
/// use competitor_intel_core::domain::record::Record;
/// let records = [
///     Record::new().with("b", "1").with("a", "2"),
///     Record::new().with("a", "3").with("c", "4"),
/// ];
/// assert_eq!(derive_header(None, &records), vec!["b", "a", "c"]);
/// assert_eq!(derive_header(Some(&["a", "x"][..]), &records), vec!["a", "x", "b", "c"]);
/// ```
pub fn derive_header(schema: Option<&[&str]>, records: &[Record]) -> Vec<String> {
    let mut header: Vec<String> = schema
        .unwrap_or_default()
        .iter()
        .map(|column| column.to_string())
        .collect();

    for key in records.iter().flat_map(|record| record.keys()) {
        if !header.iter().any(|column| column == key) {
            header.push(key.to_string());
        }
    }

    header
}
