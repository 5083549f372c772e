pub mod automations;
pub mod competitors;
pub mod library;
pub mod reports;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("Competitors page failed")]
    Competitors,
    #[error("Library page failed")]
    Library,
}
