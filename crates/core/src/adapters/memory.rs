//! In-memory stores behaving like the Google adapters, for tests.

pub mod memory_file_store;
pub mod memory_spreadsheet_store;

pub use memory_file_store::MemoryFileStore;
pub use memory_spreadsheet_store::MemorySpreadsheetStore;
