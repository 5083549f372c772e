pub mod config;
pub mod credentials;
pub mod drive;
#[cfg(any(test, feature = "test-util"))]
pub mod memory;
pub mod sheets;
