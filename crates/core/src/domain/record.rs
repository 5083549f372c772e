use std::fmt::Formatter;

/// One spreadsheet row, keyed by the header cells of its table.
///
/// Field order follows insertion order, which for rows read from a table is
/// the header order. Inserting an existing key replaces its value in place.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Record { fields: Vec::new() }
    }

    /// Builds a record from a header row and one data row. Cells missing at the
    /// end of the data row read as empty text.
    ///
    /// # Examples
    /// ```
    /// use competitor_intel_core::domain::record::Record;
    /// let header = vec!["id".to_string(), "name".to_string()];
    /// let record = Record::from_row(&header, &["acme".to_string()]);
    /// assert_eq!(record.get("id"), Some("acme"));
    /// assert_eq!(record.get("name"), Some(""));
    /// ```
    pub fn from_row(header: &[String], row: &[String]) -> Self {
        header
            .iter()
            .enumerate()
            .map(|(index, key)| {
                let value = row.get(index).cloned().unwrap_or_default();
                (key.clone(), value)
            })
            .collect()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Value for `key`, or empty text when the record lacks it.
    pub fn value_or_blank(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

impl std::fmt::Debug for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order() {
        let record = Record::new().with("b", "2").with("a", "1");
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let record = Record::new()
            .with("id", "x")
            .with("name", "X")
            .with("id", "y");
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("id"), Some("y"));
        assert_eq!(record.keys().next(), Some("id"));
    }

    #[test]
    fn test_from_row_pads_missing_cells() {
        let header = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let record = Record::from_row(&header, &["1".to_string()]);
        assert_eq!(record.get("a"), Some("1"));
        assert_eq!(record.get("b"), Some(""));
        assert_eq!(record.get("c"), Some(""));
    }

    #[test]
    fn test_from_row_ignores_cells_past_header() {
        let header = vec!["a".to_string()];
        let record = Record::from_row(&header, &["1".to_string(), "extra".to_string()]);
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_value_or_blank() {
        let record = Record::new().with("a", "1");
        assert_eq!(record.value_or_blank("a"), "1");
        assert_eq!(record.value_or_blank("missing"), "");
    }

    #[test]
    fn test_debug_is_a_map() {
        let record = Record::new().with("id", "acme");
        assert_eq!(format!("{:?}", record), r#"{"id": "acme"}"#);
    }
}
