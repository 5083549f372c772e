use error_stack::ResultExt;
use google_sheets4::{
    api::{
        AddSheetRequest, BatchUpdateSpreadsheetRequest, GridProperties, Request, SheetProperties,
        ValueRange,
    },
    Sheets,
};
use std::fmt::Debug;
use tracing::instrument;

use crate::adapters::credentials::{
    CredentialError, CredentialProvider, HttpsConnector, SPREADSHEETS_SCOPE,
};
use crate::ports::spreadsheet_store::{SpreadsheetStore, SpreadsheetStoreError};

use super::{http_client, text_grid::IntoTextGrid, value_range_factory::ValueRangeFactory};

/// A Google Sheets spreadsheet opened by its identifier.
pub struct GoogleSpreadsheetStore {
    spreadsheet_id: String,
    hub: Sheets<HttpsConnector>,
}

impl Debug for GoogleSpreadsheetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GoogleSpreadsheetStore {{ spreadsheet_id: {:?} }}",
            self.spreadsheet_id
        )
    }
}

/// A1 reference to a whole tab, quoting the title the way Sheets expects.
fn quoted_title(title: &str) -> String {
    format!("'{}'", title.replace('\'', "''"))
}

impl GoogleSpreadsheetStore {
    #[instrument(name = "GoogleSpreadsheetStore::new", skip(credentials))]
    pub async fn new(
        spreadsheet_id: String,
        credentials: &CredentialProvider,
    ) -> error_stack::Result<Self, CredentialError> {
        let client = http_client::http_client();
        let auth = credentials.authenticator(client.clone()).await?;
        let hub = Sheets::new(client, auth);

        Ok(GoogleSpreadsheetStore {
            spreadsheet_id,
            hub,
        })
    }
}

#[async_trait::async_trait]
impl SpreadsheetStore for GoogleSpreadsheetStore {
    #[instrument]
    async fn table_titles(&self) -> error_stack::Result<Vec<String>, SpreadsheetStoreError> {
        let response = self
            .hub
            .spreadsheets()
            .get(&self.spreadsheet_id)
            .add_scope(SPREADSHEETS_SCOPE)
            .doit()
            .await
            .change_context(SpreadsheetStoreError::FailedToFetchSpreadsheet)
            .attach_printable_lazy(|| format!("spreadsheet {}", self.spreadsheet_id))?;

        let titles = response
            .1
            .sheets
            .unwrap_or_default()
            .into_iter()
            .filter_map(|sheet| sheet.properties.and_then(|p| p.title))
            .collect();

        Ok(titles)
    }

    #[instrument]
    async fn add_table(
        &self,
        title: &str,
        rows: i32,
        columns: i32,
    ) -> error_stack::Result<(), SpreadsheetStoreError> {
        let request = BatchUpdateSpreadsheetRequest {
            requests: Some(vec![Request {
                add_sheet: Some(AddSheetRequest {
                    properties: Some(SheetProperties {
                        title: Some(title.to_string()),
                        grid_properties: Some(GridProperties {
                            row_count: Some(rows),
                            column_count: Some(columns),
                            ..Default::default()
                        }),
                        ..Default::default()
                    }),
                }),
                ..Default::default()
            }]),
            ..Default::default()
        };

        self.hub
            .spreadsheets()
            .batch_update(request, &self.spreadsheet_id)
            .add_scope(SPREADSHEETS_SCOPE)
            .doit()
            .await
            .map(|_| ())
            .change_context_lazy(|| SpreadsheetStoreError::FailedToAddTable(title.to_string()))
    }

    #[instrument]
    async fn read_values(
        &self,
        title: &str,
    ) -> error_stack::Result<Vec<Vec<String>>, SpreadsheetStoreError> {
        let response = self
            .hub
            .spreadsheets()
            .values_get(&self.spreadsheet_id, &quoted_title(title))
            .add_scope(SPREADSHEETS_SCOPE)
            .doit()
            .await
            .change_context_lazy(|| SpreadsheetStoreError::FailedToFetchTable(title.to_string()))?;

        Ok(response.1.values.unwrap_or_default().into_text_grid())
    }

    #[instrument(skip(values), fields(rows = values.len()))]
    async fn write_values(
        &self,
        title: &str,
        values: Vec<Vec<String>>,
    ) -> error_stack::Result<(), SpreadsheetStoreError> {
        let range = format!("{}!A1", quoted_title(title));
        self.hub
            .spreadsheets()
            .values_update(ValueRange::from_rows(values), &self.spreadsheet_id, &range)
            .value_input_option("RAW")
            .add_scope(SPREADSHEETS_SCOPE)
            .doit()
            .await
            .map(|_| ())
            .change_context_lazy(|| SpreadsheetStoreError::FailedToWriteTable(title.to_string()))
            .attach_printable_lazy(|| format!("Failed to write to range {}", range))
    }
}
