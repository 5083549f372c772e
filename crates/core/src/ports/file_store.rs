use thiserror::Error;

use crate::domain::file_entry::FileEntry;

#[derive(Error, Debug)]
pub enum FileStoreError {
    #[error("Failed to authorize file store request")]
    Unauthorized,
    #[error("Failed to list children of folder '{0}'")]
    FailedToListFolder(String),
}

#[async_trait::async_trait]
pub trait FileStore: Send + Sync {
    /// Non-trashed immediate children of `folder_id`. Only the first page of
    /// results is returned.
    async fn list_children(
        &self,
        folder_id: &str,
    ) -> error_stack::Result<Vec<FileEntry>, FileStoreError>;
}
