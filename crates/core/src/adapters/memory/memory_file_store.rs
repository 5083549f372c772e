use std::collections::HashMap;

use crate::domain::file_entry::FileEntry;
use crate::ports::file_store::{FileStore, FileStoreError};

/// Folders and their children, held in memory.
#[derive(Debug, Default)]
pub struct MemoryFileStore {
    folders: HashMap<String, Vec<FileEntry>>,
}

impl MemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_child(mut self, folder_id: &str, entry: FileEntry) -> Self {
        self.folders
            .entry(folder_id.to_string())
            .or_default()
            .push(entry);
        self
    }
}

#[async_trait::async_trait]
impl FileStore for MemoryFileStore {
    async fn list_children(
        &self,
        folder_id: &str,
    ) -> error_stack::Result<Vec<FileEntry>, FileStoreError> {
        Ok(self.folders.get(folder_id).cloned().unwrap_or_default())
    }
}
