use serde_json::Value;

/// Text form of a cell value as returned by the Sheets API.
///
/// # Examples
/// ```
/// use competitor_intel_core::adapters::sheets::text_grid::cell_text;
/// use serde_json::json;
/// assert_eq!(cell_text(&json!("EUR")), "EUR");
/// assert_eq!(cell_text(&json!(42)), "42");
/// assert_eq!(cell_text(&json!(true)), "TRUE");
/// assert_eq!(cell_text(&json!(null)), "");
/// ```
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "TRUE".to_string(),
        Value::Bool(false) => "FALSE".to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub trait IntoTextGrid {
    fn into_text_grid(self) -> Vec<Vec<String>>;
}

impl IntoTextGrid for Vec<Vec<Value>> {
    fn into_text_grid(self) -> Vec<Vec<String>> {
        self.into_iter()
            .map(|row| row.iter().map(cell_text).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_into_text_grid() {
        let grid = vec![
            vec![json!("id"), json!("revenue")],
            vec![json!("acme"), json!(1250.5)],
        ]
        .into_text_grid();
        assert_eq!(
            grid,
            vec![
                vec!["id".to_string(), "revenue".to_string()],
                vec!["acme".to_string(), "1250.5".to_string()]
            ]
        );
    }

    #[test]
    fn test_string_is_not_quoted() {
        assert_eq!(cell_text(&json!("say \"hi\"")), "say \"hi\"");
    }
}
