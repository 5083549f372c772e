pub mod file_store;
pub mod spreadsheet_store;

pub use file_store::{FileStore, FileStoreError};
pub use spreadsheet_store::{SpreadsheetStore, SpreadsheetStoreError};
