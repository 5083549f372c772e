pub mod google_spreadsheet_store;
pub mod http_client;
pub mod text_grid;
pub mod value_range_factory;
