use crate::error::{DgeError, Result};

/// A table of string values with named columns
///
/// Used for per-feature (gene) and per-sample annotation. Rows are kept in the order of the
/// count matrix they describe.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl AnnotationTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != columns.len()) {
            return Err(DgeError::InvalidDataset {
                reason: format!(
                    "annotation row {} has {} fields, expected {}",
                    i + 1,
                    row.len(),
                    columns.len()
                ),
            });
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// All values of a named column, in row order
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(self.rows.iter().map(|r| r[idx].as_str()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_column_lookup() {
        let table = AnnotationTable::new(
            strings(&["id", "group"]),
            vec![strings(&["s1", "ctrl"]), strings(&["s2", "trt"])],
        )
        .unwrap();

        assert_eq!(table.column("group"), Some(vec!["ctrl", "trt"]));
        assert_eq!(table.column("batch"), None);
        assert_eq!(table.n_rows(), 2);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = AnnotationTable::new(strings(&["id", "group"]), vec![strings(&["s1"])]);
        assert!(matches!(result, Err(DgeError::InvalidDataset { .. })));
    }
}
