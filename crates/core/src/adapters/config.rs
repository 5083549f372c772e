pub mod app_config;
pub mod general_config;
pub mod google_config;
pub mod server_config;
