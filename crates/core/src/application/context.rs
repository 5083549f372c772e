use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use error_stack::ResultExt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument};

use crate::adapters::config::app_config::AppConfig;
use crate::adapters::credentials::CredentialProvider;
use crate::adapters::drive::google_drive_store::GoogleDriveStore;
use crate::adapters::sheets::google_spreadsheet_store::GoogleSpreadsheetStore;
use crate::ports::file_store::FileStore;
use crate::ports::spreadsheet_store::SpreadsheetStore;

use super::file_listing_gateway::FileListingGateway;
use super::pages::{competitors::CompetitorsPage, library::LibraryPage, reports::ReportsPage};
use super::spreadsheet_gateway::SpreadsheetGateway;

#[derive(Error, Debug)]
pub enum AppContextError {
    #[error("Invalid configuration")]
    InvalidConfig,
    #[error("Failed to authorize the Google clients")]
    Authorization,
}

/// Everything a page needs, built once at startup and shared by every request.
pub struct AppContext {
    pub sheets: SpreadsheetGateway,
    pub files: FileListingGateway,
    pub timezone: Tz,
    pub sheet_id: String,
    pub drive_top_folder_id: String,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("timezone", &self.timezone)
            .field("sheet_id", &self.sheet_id)
            .field("drive_top_folder_id", &self.drive_top_folder_id)
            .finish()
    }
}

impl AppContext {
    pub fn new(
        config: &AppConfig,
        spreadsheet_store: Arc<dyn SpreadsheetStore>,
        file_store: Arc<dyn FileStore>,
    ) -> error_stack::Result<Self, AppContextError> {
        let timezone = config
            .general
            .tz()
            .change_context(AppContextError::InvalidConfig)?;

        Ok(AppContext {
            sheets: SpreadsheetGateway::new(spreadsheet_store),
            files: FileListingGateway::new(file_store),
            timezone,
            sheet_id: config.google.sheet_id.clone(),
            drive_top_folder_id: config.google.drive_top_folder_id.clone(),
        })
    }

    /// Authorizes against Google Sheets and Drive with the configured service
    /// account.
    #[instrument(name = "AppContext::connect", skip_all)]
    pub async fn connect(config: &AppConfig) -> error_stack::Result<Self, AppContextError> {
        config
            .validate()
            .change_context(AppContextError::InvalidConfig)?;

        let credentials = CredentialProvider::from_json(&config.google.service_account_json)
            .change_context(AppContextError::Authorization)?;
        info!("Authorizing as {}", credentials.client_email());

        let spreadsheet_store =
            GoogleSpreadsheetStore::new(config.google.sheet_id.clone(), &credentials)
                .await
                .change_context(AppContextError::Authorization)?;
        let file_store = GoogleDriveStore::new(&credentials)
            .await
            .change_context(AppContextError::Authorization)?;

        Self::new(config, Arc::new(spreadsheet_store), Arc::new(file_store))
    }

    pub fn competitors(&self) -> CompetitorsPage<'_> {
        CompetitorsPage::new(&self.sheets)
    }

    pub fn library(&self) -> LibraryPage<'_> {
        LibraryPage::new(&self.files, &self.drive_top_folder_id)
    }

    pub fn reports(&self) -> ReportsPage<'_> {
        ReportsPage::new(&self.sheets)
    }

    pub fn local_time(&self) -> String {
        self.local_time_at(Utc::now())
    }

    /// `now` in the configured timezone, to the minute.
    pub fn local_time_at(&self, now: DateTime<Utc>) -> String {
        now.with_timezone(&self.timezone)
            .format("%Y-%m-%d %H:%M")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::config::general_config::GeneralConfig;
    use crate::adapters::memory::{MemoryFileStore, MemorySpreadsheetStore};
    use chrono::TimeZone;

    fn context(timezone: &str) -> error_stack::Result<AppContext, AppContextError> {
        let config = AppConfig {
            general: GeneralConfig {
                timezone: timezone.to_string(),
            },
            ..Default::default()
        };
        AppContext::new(
            &config,
            Arc::new(MemorySpreadsheetStore::new()),
            Arc::new(MemoryFileStore::new()),
        )
    }

    #[test]
    fn test_local_time_uses_timezone() {
        let ctx = context("Europe/Berlin").unwrap();
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 59).unwrap();
        assert_eq!(ctx.local_time_at(now), "2024-01-15 10:30");

        let summer = Utc.with_ymd_and_hms(2024, 7, 15, 9, 30, 0).unwrap();
        assert_eq!(ctx.local_time_at(summer), "2024-07-15 11:30");
    }

    #[test]
    fn test_invalid_timezone() {
        let err = context("Nowhere/Special").unwrap_err();
        assert!(matches!(
            err.current_context(),
            AppContextError::InvalidConfig
        ));
    }

    #[tokio::test]
    async fn test_connect_without_credential_fails() {
        let err = AppContext::connect(&AppConfig::default()).await.unwrap_err();
        assert!(matches!(
            err.current_context(),
            AppContextError::InvalidConfig
        ));
    }
}
