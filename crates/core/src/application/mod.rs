pub mod context;
pub mod file_listing_gateway;
pub mod pages;
pub mod spreadsheet_gateway;

pub use context::AppContext;
