use error_stack::ResultExt;
use tracing::instrument;

use crate::application::file_listing_gateway::FileListingGateway;
use crate::domain::file_entry::FileEntry;

use super::PageError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryView {
    /// No top folder configured.
    Unconfigured,
    Empty,
    Entries(Vec<FileEntry>),
}

#[derive(Debug)]
pub struct LibraryPage<'a> {
    files: &'a FileListingGateway,
    folder_id: &'a str,
}

impl<'a> LibraryPage<'a> {
    pub fn new(files: &'a FileListingGateway, folder_id: &'a str) -> Self {
        Self { files, folder_id }
    }

    #[instrument(skip(self), fields(folder_id = self.folder_id))]
    pub async fn load(&self) -> error_stack::Result<LibraryView, PageError> {
        if self.folder_id.is_empty() {
            return Ok(LibraryView::Unconfigured);
        }

        let entries = self
            .files
            .list_children(self.folder_id)
            .await
            .change_context(PageError::Library)?;

        Ok(if entries.is_empty() {
            LibraryView::Empty
        } else {
            LibraryView::Entries(entries)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryFileStore;
    use std::sync::Arc;

    fn report_pdf() -> FileEntry {
        FileEntry {
            id: "f1".to_string(),
            name: "Acme Q3 report.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            web_view_link: Some("https://drive.google.com/file/d/f1/view".to_string()),
        }
    }

    #[tokio::test]
    async fn test_unconfigured_folder() {
        let files = FileListingGateway::new(Arc::new(
            MemoryFileStore::new().with_child("", report_pdf()),
        ));
        let view = LibraryPage::new(&files, "").load().await.unwrap();
        assert_eq!(view, LibraryView::Unconfigured);
    }

    #[tokio::test]
    async fn test_empty_folder() {
        let files = FileListingGateway::new(Arc::new(MemoryFileStore::new()));
        let view = LibraryPage::new(&files, "top").load().await.unwrap();
        assert_eq!(view, LibraryView::Empty);
    }

    #[tokio::test]
    async fn test_folder_entries() {
        let files = FileListingGateway::new(Arc::new(
            MemoryFileStore::new().with_child("top", report_pdf()),
        ));
        let view = LibraryPage::new(&files, "top").load().await.unwrap();
        assert_eq!(view, LibraryView::Entries(vec![report_pdf()]));
    }
}
