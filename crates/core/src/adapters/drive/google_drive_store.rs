use error_stack::{report, ResultExt};
use serde::Deserialize;
use tracing::instrument;

use crate::adapters::credentials::{
    CredentialError, CredentialProvider, GoogleAuthenticator, DRIVE_SCOPE,
};
use crate::adapters::sheets::http_client;
use crate::domain::file_entry::FileEntry;
use crate::ports::file_store::{FileStore, FileStoreError};

const FILES_ENDPOINT: &str = "https://www.googleapis.com/drive/v3/files";
const LIST_FIELDS: &str = "files(id,name,mimeType,webViewLink)";

#[derive(Deserialize, Debug)]
struct FileList {
    #[serde(default)]
    files: Vec<FileEntry>,
}

/// Drive v3 files listing, authorized as the service account.
pub struct GoogleDriveStore {
    http: reqwest::Client,
    auth: GoogleAuthenticator,
}

impl std::fmt::Debug for GoogleDriveStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GoogleDriveStore")
    }
}

/// Drive search query matching the non-trashed children of `folder_id`.
///
/// # Examples
/// ```
/// use competitor_intel_core::adapters::drive::google_drive_store::children_query;
/// assert_eq!(children_query("abc"), "'abc' in parents and trashed=false");
/// ```
pub fn children_query(folder_id: &str) -> String {
    let escaped = folder_id.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{}' in parents and trashed=false", escaped)
}

impl GoogleDriveStore {
    #[instrument(name = "GoogleDriveStore::new", skip(credentials))]
    pub async fn new(
        credentials: &CredentialProvider,
    ) -> error_stack::Result<Self, CredentialError> {
        let auth = credentials
            .authenticator(http_client::http_client())
            .await?;

        Ok(GoogleDriveStore {
            http: reqwest::Client::new(),
            auth,
        })
    }

    async fn bearer_token(&self) -> error_stack::Result<String, FileStoreError> {
        let token = self
            .auth
            .token(&[DRIVE_SCOPE])
            .await
            .change_context(FileStoreError::Unauthorized)?;

        token
            .token()
            .map(str::to_string)
            .ok_or(report!(FileStoreError::Unauthorized))
            .attach_printable("access token response carried no token")
    }
}

#[async_trait::async_trait]
impl FileStore for GoogleDriveStore {
    #[instrument]
    async fn list_children(
        &self,
        folder_id: &str,
    ) -> error_stack::Result<Vec<FileEntry>, FileStoreError> {
        let token = self.bearer_token().await?;
        let query = children_query(folder_id);

        let list = self
            .http
            .get(FILES_ENDPOINT)
            .bearer_auth(token)
            .query(&[("q", query.as_str()), ("fields", LIST_FIELDS)])
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .change_context_lazy(|| FileStoreError::FailedToListFolder(folder_id.to_string()))?
            .json::<FileList>()
            .await
            .change_context_lazy(|| FileStoreError::FailedToListFolder(folder_id.to_string()))
            .attach_printable("unexpected files.list response body")?;

        Ok(list.files)
    }
}
