use error_stack::ResultExt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::domain::file_entry::FileEntry;
use crate::ports::file_store::FileStore;

#[derive(Error, Debug)]
pub enum FileListingGatewayError {
    #[error("Failed to list folder '{0}'")]
    ListFolder(String),
}

pub struct FileListingGateway {
    store: Arc<dyn FileStore>,
}

impl std::fmt::Debug for FileListingGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileListingGateway")
            .field("store", &"<FileStore>")
            .finish()
    }
}

impl FileListingGateway {
    pub fn new(store: Arc<dyn FileStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn list_children(
        &self,
        folder_id: &str,
    ) -> error_stack::Result<Vec<FileEntry>, FileListingGatewayError> {
        let entries = self
            .store
            .list_children(folder_id)
            .await
            .change_context_lazy(|| FileListingGatewayError::ListFolder(folder_id.to_string()))?;
        debug!("Folder {} has {} children", folder_id, entries.len());
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryFileStore;

    #[tokio::test]
    async fn test_empty_folder_lists_nothing() {
        let gateway = FileListingGateway::new(Arc::new(MemoryFileStore::new()));
        let entries = gateway.list_children("empty-folder").await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_lists_only_the_requested_folder() {
        let entry = |id: &str| FileEntry {
            id: id.to_string(),
            name: format!("{}.pdf", id),
            mime_type: "application/pdf".to_string(),
            web_view_link: None,
        };
        let store = MemoryFileStore::new()
            .with_child("top", entry("a"))
            .with_child("top", entry("b"))
            .with_child("other", entry("c"));
        let gateway = FileListingGateway::new(Arc::new(store));

        let entries = gateway.list_children("top").await.unwrap();

        assert_eq!(
            entries.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(),
            vec!["a", "b"]
        );
    }
}
