use serde::Deserialize;

use super::record::Record;

/// Header of the `competitors` table.
pub const COMPETITOR_COLUMNS: [&str; 14] = [
    "id",
    "name",
    "website",
    "ir_url",
    "news_rss",
    "linkedin_url",
    "tickers",
    "currency",
    "fiscal_calendar_notes",
    "drive_folder_id",
    "tags",
    "active(bool)",
    "created_at",
    "updated_at",
];

/// Derives a competitor identifier from its display name: lowercased, with
/// every space replaced by a hyphen.
///
/// # Examples
/// ```
/// use competitor_intel_core::domain::competitor::derive_identifier;
/// assert_eq!(derive_identifier("Acme Corp"), "acme-corp");
/// assert_eq!(derive_identifier(""), "");
/// ```
pub fn derive_identifier(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// The add-competitor form. Every field is free text and may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CompetitorForm {
    pub name: String,
    pub website: String,
    pub ir_url: String,
    pub news_rss: String,
    pub linkedin_url: String,
    pub tickers: String,
    pub currency: String,
    pub fiscal_calendar_notes: String,
    pub drive_folder_id: String,
    pub tags: String,
}

impl CompetitorForm {
    /// The row appended to the `competitors` table for this submission.
    /// New competitors start active; timestamps are left empty.
    pub fn into_record(self) -> Record {
        Record::new()
            .with("id", derive_identifier(&self.name))
            .with("name", self.name)
            .with("website", self.website)
            .with("ir_url", self.ir_url)
            .with("news_rss", self.news_rss)
            .with("linkedin_url", self.linkedin_url)
            .with("tickers", self.tickers)
            .with("currency", self.currency)
            .with("fiscal_calendar_notes", self.fiscal_calendar_notes)
            .with("drive_folder_id", self.drive_folder_id)
            .with("tags", self.tags)
            .with("active(bool)", "TRUE")
            .with("created_at", "")
            .with("updated_at", "")
    }
}
