use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpreadsheetStoreError {
    #[error("Failed to fetch spreadsheet")]
    FailedToFetchSpreadsheet,
    #[error("Failed to add table '{0}'")]
    FailedToAddTable(String),
    #[error("Failed to fetch table '{0}'")]
    FailedToFetchTable(String),
    #[error("Failed to write table '{0}'")]
    FailedToWriteTable(String),
}

/// A spreadsheet whose tabs are addressed by title.
#[async_trait::async_trait]
pub trait SpreadsheetStore: Send + Sync {
    /// Titles of every tab, in spreadsheet order.
    async fn table_titles(&self) -> error_stack::Result<Vec<String>, SpreadsheetStoreError>;

    async fn add_table(
        &self,
        title: &str,
        rows: i32,
        columns: i32,
    ) -> error_stack::Result<(), SpreadsheetStoreError>;

    /// All values of a tab as text. Trailing empty cells of a row and trailing
    /// empty rows are not returned. Fails when the tab does not exist.
    async fn read_values(
        &self,
        title: &str,
    ) -> error_stack::Result<Vec<Vec<String>>, SpreadsheetStoreError>;

    /// Writes `values` starting at the tab's first cell. Cells outside the
    /// written block keep their previous contents.
    async fn write_values(
        &self,
        title: &str,
        values: Vec<Vec<String>>,
    ) -> error_stack::Result<(), SpreadsheetStoreError>;
}
