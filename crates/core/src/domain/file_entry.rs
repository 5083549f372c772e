use serde::Deserialize;

/// A child of the library folder, as listed by the file store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub id: String,
    pub name: String,
    pub mime_type: String,
    #[serde(default)]
    pub web_view_link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_drive_file() {
        let entry: FileEntry = serde_json::from_str(
            r#"{"id":"1a","name":"Q3.pdf","mimeType":"application/pdf","webViewLink":"https://drive.google.com/file/d/1a/view"}"#,
        )
        .unwrap();
        assert_eq!(entry.name, "Q3.pdf");
        assert_eq!(entry.mime_type, "application/pdf");
        assert_eq!(
            entry.web_view_link.as_deref(),
            Some("https://drive.google.com/file/d/1a/view")
        );
    }

    #[test]
    fn test_deserialize_without_link() {
        let entry: FileEntry = serde_json::from_str(
            r#"{"id":"2b","name":"Acme","mimeType":"application/vnd.google-apps.folder"}"#,
        )
        .unwrap();
        assert_eq!(entry.web_view_link, None);
        assert_eq!(entry.mime_type, "application/vnd.google-apps.folder");
    }
}
