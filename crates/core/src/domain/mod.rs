pub mod competitor;
pub mod file_entry;
pub mod record;
pub mod table;
pub mod table_load;

pub use competitor::{derive_identifier, CompetitorForm};
pub use file_entry::FileEntry;
pub use record::Record;
pub use table::TableName;
pub use table_load::TableLoad;
