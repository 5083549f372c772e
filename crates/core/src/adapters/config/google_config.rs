#[derive(serde::Deserialize, Clone, Default)]
pub struct GoogleConfig {
    /// Serialized service account key. Required.
    #[serde(default)]
    pub service_account_json: String,
    #[serde(default)]
    pub sheet_id: String,
    #[serde(default)]
    pub drive_top_folder_id: String,
}

// Keeps the private key out of logs.
impl std::fmt::Debug for GoogleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleConfig")
            .field(
                "service_account_json",
                &if self.service_account_json.is_empty() {
                    "<unset>"
                } else {
                    "<redacted>"
                },
            )
            .field("sheet_id", &self.sheet_id)
            .field("drive_top_folder_id", &self.drive_top_folder_id)
            .finish()
    }
}
