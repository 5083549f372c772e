use error_stack::ResultExt;
use tracing::{info, instrument};

use crate::application::spreadsheet_gateway::SpreadsheetGateway;
use crate::domain::competitor::CompetitorForm;
use crate::domain::record::Record;
use crate::domain::table::TableName;

use super::PageError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompetitorsView {
    pub rows: Vec<Record>,
}

#[derive(Debug)]
pub struct CompetitorsPage<'a> {
    sheets: &'a SpreadsheetGateway,
}

impl<'a> CompetitorsPage<'a> {
    pub fn new(sheets: &'a SpreadsheetGateway) -> Self {
        Self { sheets }
    }

    #[instrument(skip(self))]
    pub async fn load(&self) -> error_stack::Result<CompetitorsView, PageError> {
        self.sheets
            .ensure_tables()
            .await
            .change_context(PageError::Competitors)?;

        let rows = self
            .sheets
            .read_table(TableName::Competitors)
            .await
            .change_context(PageError::Competitors)?;

        Ok(CompetitorsView { rows })
    }

    /// Appends the submitted competitor and writes the whole table back.
    /// Nothing is validated; a concurrent submission may be overwritten.
    #[instrument(skip(self))]
    pub async fn submit(&self, form: CompetitorForm) -> error_stack::Result<Record, PageError> {
        let mut rows = self.load().await?.rows;
        let record = form.into_record();
        rows.push(record.clone());

        self.sheets
            .write_table(TableName::Competitors, &rows)
            .await
            .change_context(PageError::Competitors)?;

        info!(
            "Saved competitor '{}' ({} rows)",
            record.value_or_blank("id"),
            rows.len()
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemorySpreadsheetStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_load_creates_tables_and_starts_empty() {
        let store = Arc::new(MemorySpreadsheetStore::new());
        let sheets = SpreadsheetGateway::new(store.clone());

        let view = CompetitorsPage::new(&sheets).load().await.unwrap();

        assert!(view.rows.is_empty());
        assert_eq!(store.table_count("competitors").await, 1);
        assert_eq!(store.table_count("news").await, 1);
    }

    #[tokio::test]
    async fn test_submit_appends_to_existing_rows() {
        let store = Arc::new(MemorySpreadsheetStore::new().with_table(
            "competitors",
            vec![
                vec!["id", "name", "website"],
                vec!["globex", "Globex", "https://globex.test"],
            ],
        ));
        let sheets = SpreadsheetGateway::new(store.clone());
        let page = CompetitorsPage::new(&sheets);

        let saved = page
            .submit(CompetitorForm {
                name: "Acme Corp".to_string(),
                tickers: "ACME, ACM".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(saved.get("id"), Some("acme-corp"));

        let rows = page.load().await.unwrap().rows;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("id"), Some("globex"));
        assert_eq!(rows[0].get("website"), Some("https://globex.test"));
        assert_eq!(rows[0].get("tickers"), Some(""));
        assert_eq!(rows[1].get("name"), Some("Acme Corp"));
        assert_eq!(rows[1].get("tickers"), Some("ACME, ACM"));
        assert_eq!(rows[1].get("active(bool)"), Some("TRUE"));
    }

    #[tokio::test]
    async fn test_submit_over_blank_rows_adds_one_row() {
        let store = Arc::new(MemorySpreadsheetStore::new().with_table(
            "competitors",
            vec![
                vec!["id", "name"],
                vec![],
                vec![],
                vec!["globex", "Globex"],
            ],
        ));
        let sheets = SpreadsheetGateway::new(store.clone());
        let page = CompetitorsPage::new(&sheets);

        page.submit(CompetitorForm {
            name: "Acme".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

        let ids: Vec<String> = page
            .load()
            .await
            .unwrap()
            .rows
            .iter()
            .map(|r| r.value_or_blank("id").to_string())
            .filter(|id| !id.is_empty())
            .collect();
        assert_eq!(ids, vec!["globex", "acme"]);
        assert_eq!(store.cells("competitors").await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_submit_does_not_check_duplicates() {
        let store = Arc::new(MemorySpreadsheetStore::new());
        let sheets = SpreadsheetGateway::new(store);
        let page = CompetitorsPage::new(&sheets);
        let form = CompetitorForm {
            name: "Acme".to_string(),
            ..Default::default()
        };

        page.submit(form.clone()).await.unwrap();
        page.submit(form).await.unwrap();

        let rows = page.load().await.unwrap().rows;
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.get("id") == Some("acme")));
    }
}
