use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

use super::competitor::COMPETITOR_COLUMNS;

/// Rows given to a table created by `ensure_tables`.
pub const DEFAULT_ROWS: i32 = 100;
/// Columns given to a table created by `ensure_tables`.
pub const DEFAULT_COLUMNS: i32 = 26;

/// The fixed set of tables the dashboard keeps in its spreadsheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum TableName {
    Competitors,
    Files,
    FinancialRuns,
    FinancialMetrics,
    News,
}

impl TableName {
    /// Every table that must exist before the Competitors page runs.
    pub fn required() -> impl Iterator<Item = TableName> {
        TableName::iter()
    }

    pub fn title(&self) -> &str {
        self.as_ref()
    }

    /// Columns this table is written with, in order. Tables without a declared
    /// schema take their columns from the records written to them.
    pub fn declared_schema(&self) -> Option<&'static [&'static str]> {
        match self {
            TableName::Competitors => Some(&COMPETITOR_COLUMNS),
            _ => None,
        }
    }
}
