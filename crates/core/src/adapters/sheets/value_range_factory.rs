use google_sheets4::api::ValueRange;
use serde_json::Value;

/// Header suffix marking a column whose `TRUE`/`FALSE` cells are real booleans.
const BOOL_COLUMN_SUFFIX: &str = "(bool)";

pub trait ValueRangeFactory {
    /// Rows are header-first. Values are sent as-is, so the write must use
    /// the `RAW` input option.
    fn from_rows(rows: Vec<Vec<String>>) -> Self;
}

fn wrap_value(value: String, bool_column: bool) -> Value {
    match (bool_column, value.as_str()) {
        (true, "TRUE") => Value::Bool(true),
        (true, "FALSE") => Value::Bool(false),
        _ => Value::String(value),
    }
}

impl ValueRangeFactory for ValueRange {
    fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let bool_columns = rows
            .first()
            .map(|header| {
                header
                    .iter()
                    .map(|key| key.ends_with(BOOL_COLUMN_SUFFIX))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        let values = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                row.into_iter()
                    .enumerate()
                    .map(|(column, value)| {
                        let bool_column =
                            index > 0 && bool_columns.get(column).copied().unwrap_or(false);
                        wrap_value(value, bool_column)
                    })
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        ValueRange {
            major_dimension: Some("ROWS".to_string()),
            range: None,
            values: Some(values),
        }
    }
}
