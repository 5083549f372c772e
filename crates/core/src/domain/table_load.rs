use super::record::Record;

/// Outcome of loading a table for display, keeping "nothing there yet" apart
/// from "could not be read".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableLoad {
    Loaded(Vec<Record>),
    Empty,
    Failed(String),
}

impl TableLoad {
    pub fn from_rows(rows: Vec<Record>) -> Self {
        if rows.is_empty() {
            TableLoad::Empty
        } else {
            TableLoad::Loaded(rows)
        }
    }

    pub fn rows(&self) -> &[Record] {
        match self {
            TableLoad::Loaded(rows) => rows,
            TableLoad::Empty | TableLoad::Failed(_) => &[],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TableLoad::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        assert_eq!(TableLoad::from_rows(vec![]), TableLoad::Empty);
        let rows = vec![Record::new().with("a", "1")];
        assert_eq!(TableLoad::from_rows(rows.clone()), TableLoad::Loaded(rows));
    }

    #[test]
    fn test_failed_has_no_rows() {
        let load = TableLoad::Failed("quota".to_string());
        assert!(load.is_failed());
        assert!(load.rows().is_empty());
    }
}
