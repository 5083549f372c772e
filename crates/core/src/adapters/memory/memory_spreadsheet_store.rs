use error_stack::{report, ResultExt};
use std::collections::HashSet;
use tokio::sync::RwLock;

use crate::ports::spreadsheet_store::{SpreadsheetStore, SpreadsheetStoreError};

#[derive(Debug, Clone)]
struct MemoryTable {
    title: String,
    rows: i32,
    columns: i32,
    cells: Vec<Vec<String>>,
}

/// A spreadsheet kept in memory. Writes overlay cells starting at A1 and reads
/// trim trailing blanks, like the Sheets values API.
#[derive(Debug, Default)]
pub struct MemorySpreadsheetStore {
    tables: RwLock<Vec<MemoryTable>>,
    failing_reads: RwLock<HashSet<String>>,
    writes: RwLock<usize>,
}

impl MemorySpreadsheetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tab holding `cells`.
    pub fn with_table(mut self, title: &str, cells: Vec<Vec<&str>>) -> Self {
        let cells = cells
            .into_iter()
            .map(|row| row.into_iter().map(str::to_string).collect())
            .collect();
        self.tables.get_mut().push(MemoryTable {
            title: title.to_string(),
            rows: 100,
            columns: 26,
            cells,
        });
        self
    }

    /// Makes every read of `title` fail.
    pub fn with_failing_reads(mut self, title: &str) -> Self {
        self.failing_reads.get_mut().insert(title.to_string());
        self
    }

    /// Number of tabs titled `title`.
    pub async fn table_count(&self, title: &str) -> usize {
        self.tables
            .read()
            .await
            .iter()
            .filter(|t| t.title == title)
            .count()
    }

    /// Size a tab was created with.
    pub async fn table_size(&self, title: &str) -> Option<(i32, i32)> {
        self.tables
            .read()
            .await
            .iter()
            .find(|t| t.title == title)
            .map(|t| (t.rows, t.columns))
    }

    /// Raw cells of a tab, untrimmed.
    pub async fn cells(&self, title: &str) -> Option<Vec<Vec<String>>> {
        self.tables
            .read()
            .await
            .iter()
            .find(|t| t.title == title)
            .map(|t| t.cells.clone())
    }

    /// Number of successful `write_values` calls.
    pub async fn write_count(&self) -> usize {
        *self.writes.read().await
    }
}

fn trimmed(cells: &[Vec<String>]) -> Vec<Vec<String>> {
    let mut grid: Vec<Vec<String>> = cells
        .iter()
        .map(|row| {
            let len = row.iter().rposition(|c| !c.is_empty()).map_or(0, |i| i + 1);
            row[..len].to_vec()
        })
        .collect();
    while grid.last().is_some_and(|row| row.is_empty()) {
        grid.pop();
    }
    grid
}

#[async_trait::async_trait]
impl SpreadsheetStore for MemorySpreadsheetStore {
    async fn table_titles(&self) -> error_stack::Result<Vec<String>, SpreadsheetStoreError> {
        Ok(self
            .tables
            .read()
            .await
            .iter()
            .map(|t| t.title.clone())
            .collect())
    }

    async fn add_table(
        &self,
        title: &str,
        rows: i32,
        columns: i32,
    ) -> error_stack::Result<(), SpreadsheetStoreError> {
        let mut tables = self.tables.write().await;
        if tables.iter().any(|t| t.title == title) {
            return Err(report!(SpreadsheetStoreError::FailedToAddTable(
                title.to_string()
            )))
            .attach_printable(format!("A sheet with the name \"{}\" already exists", title));
        }
        tables.push(MemoryTable {
            title: title.to_string(),
            rows,
            columns,
            cells: Vec::new(),
        });
        Ok(())
    }

    async fn read_values(
        &self,
        title: &str,
    ) -> error_stack::Result<Vec<Vec<String>>, SpreadsheetStoreError> {
        if self.failing_reads.read().await.contains(title) {
            return Err(report!(SpreadsheetStoreError::FailedToFetchTable(
                title.to_string()
            )))
            .attach_printable("injected read failure");
        }

        self.tables
            .read()
            .await
            .iter()
            .find(|t| t.title == title)
            .map(|t| trimmed(&t.cells))
            .ok_or(report!(SpreadsheetStoreError::FailedToFetchTable(
                title.to_string()
            )))
            .attach_printable_lazy(|| format!("Unable to parse range: {}", title))
    }

    async fn write_values(
        &self,
        title: &str,
        values: Vec<Vec<String>>,
    ) -> error_stack::Result<(), SpreadsheetStoreError> {
        let mut tables = self.tables.write().await;
        let table = tables
            .iter_mut()
            .find(|t| t.title == title)
            .ok_or(report!(SpreadsheetStoreError::FailedToWriteTable(
                title.to_string()
            )))?;

        for (r, row) in values.into_iter().enumerate() {
            if table.cells.len() <= r {
                table.cells.resize(r + 1, Vec::new());
            }
            let target = &mut table.cells[r];
            for (c, value) in row.into_iter().enumerate() {
                if target.len() <= c {
                    target.resize(c + 1, String::new());
                }
                target[c] = value;
            }
        }
        drop(tables);

        *self.writes.write().await += 1;
        Ok(())
    }
}
