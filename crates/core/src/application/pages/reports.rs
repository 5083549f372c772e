use tracing::{instrument, warn};

use crate::application::spreadsheet_gateway::SpreadsheetGateway;
use crate::domain::table::TableName;
use crate::domain::table_load::TableLoad;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportsView {
    pub financial_metrics: TableLoad,
    pub news: TableLoad,
}

#[derive(Debug)]
pub struct ReportsPage<'a> {
    sheets: &'a SpreadsheetGateway,
}

impl<'a> ReportsPage<'a> {
    pub fn new(sheets: &'a SpreadsheetGateway) -> Self {
        Self { sheets }
    }

    /// Loads both report tables. A table that cannot be read is reported as
    /// failed without affecting the other.
    #[instrument(skip(self))]
    pub async fn load(&self) -> ReportsView {
        let (financial_metrics, news) = tokio::join!(
            self.load_table(TableName::FinancialMetrics),
            self.load_table(TableName::News)
        );

        ReportsView {
            financial_metrics,
            news,
        }
    }

    async fn load_table(&self, table: TableName) -> TableLoad {
        match self.sheets.read_table(table).await {
            Ok(rows) => TableLoad::from_rows(rows),
            Err(report) => {
                warn!("Could not load {}: {:?}", table, report);
                TableLoad::Failed(report.current_context().to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemorySpreadsheetStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_failed_table_does_not_hide_the_other() {
        let store = MemorySpreadsheetStore::new()
            .with_table("financial_metrics", vec![vec!["metric"], vec!["revenue"]])
            .with_table(
                "news",
                vec![vec!["headline"], vec!["Acme opens Berlin office"]],
            )
            .with_failing_reads("financial_metrics");
        let sheets = SpreadsheetGateway::new(Arc::new(store));

        let view = ReportsPage::new(&sheets).load().await;

        assert!(view.financial_metrics.is_failed());
        assert_eq!(view.news.rows().len(), 1);
        assert_eq!(
            view.news.rows()[0].get("headline"),
            Some("Acme opens Berlin office")
        );
    }

    #[tokio::test]
    async fn test_missing_tables_are_failures_not_empty() {
        let sheets = SpreadsheetGateway::new(Arc::new(MemorySpreadsheetStore::new()));
        let view = ReportsPage::new(&sheets).load().await;
        assert!(view.financial_metrics.is_failed());
        assert!(view.news.is_failed());
    }

    #[tokio::test]
    async fn test_empty_tables() {
        let store = MemorySpreadsheetStore::new()
            .with_table("financial_metrics", vec![])
            .with_table("news", vec![vec!["headline"]]);
        let sheets = SpreadsheetGateway::new(Arc::new(store));

        let view = ReportsPage::new(&sheets).load().await;

        assert_eq!(view.financial_metrics, TableLoad::Empty);
        assert_eq!(view.news, TableLoad::Empty);
    }
}
