use ndarray::Array2;

use crate::error::{DgeError, Result};

/// A numeric matrix with column labels and optional row labels
///
/// Design matrices have one row per sample and one column per model coefficient. Contrast
/// matrices have one row per coefficient and one column per comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledMatrix {
    values: Array2<f64>,
    row_names: Option<Vec<String>>,
    col_names: Vec<String>,
}

impl LabeledMatrix {
    pub fn new(
        values: Array2<f64>,
        row_names: Option<Vec<String>>,
        col_names: Vec<String>,
    ) -> Result<Self> {
        let (n_rows, n_cols) = values.dim();
        if let Some(names) = &row_names {
            if names.len() != n_rows {
                return Err(DgeError::InvalidMatrix {
                    reason: format!("{} row names for {} rows", names.len(), n_rows),
                });
            }
        }
        if col_names.len() != n_cols {
            return Err(DgeError::InvalidMatrix {
                reason: format!("{} column names for {} columns", col_names.len(), n_cols),
            });
        }
        Ok(Self { values, row_names, col_names })
    }

    pub fn n_rows(&self) -> usize {
        self.values.nrows()
    }

    pub fn n_cols(&self) -> usize {
        self.values.ncols()
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn row_names(&self) -> Option<&[String]> {
        self.row_names.as_deref()
    }

    pub fn col_names(&self) -> &[String] {
        &self.col_names
    }

    /// Row names that were never set, or are the default `1..n` sequence
    pub fn has_default_row_names(&self) -> bool {
        match &self.row_names {
            None => true,
            Some(names) => names
                .iter()
                .enumerate()
                .all(|(i, name)| *name == (i + 1).to_string()),
        }
    }

    /// Row names as written to disk, falling back to `1..n`
    pub fn row_labels(&self) -> Vec<String> {
        match &self.row_names {
            Some(names) => names.clone(),
            None => (1..=self.n_rows()).map(|i| i.to_string()).collect(),
        }
    }

    pub fn with_row_names(mut self, names: Vec<String>) -> Result<Self> {
        if names.len() != self.n_rows() {
            return Err(DgeError::InvalidMatrix {
                reason: format!("{} row names for {} rows", names.len(), self.n_rows()),
            });
        }
        self.row_names = Some(names);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn cols(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("c{}", i)).collect()
    }

    #[test]
    fn test_default_row_names() {
        let m = LabeledMatrix::new(array![[1.0], [0.0]], None, cols(1)).unwrap();
        assert!(m.has_default_row_names());
        assert_eq!(m.row_labels(), vec!["1", "2"]);

        let m = m.with_row_names(vec!["1".into(), "2".into()]).unwrap();
        assert!(m.has_default_row_names());

        let m = m.with_row_names(vec!["s1".into(), "s2".into()]).unwrap();
        assert!(!m.has_default_row_names());
    }

    #[test]
    fn test_padded_or_signed_numbers_are_not_default() {
        for names in [["01", "02"], ["+1", "+2"], [" 1", "2"]] {
            let m = LabeledMatrix::new(
                array![[1.0], [0.0]],
                Some(names.iter().map(|s| s.to_string()).collect()),
                cols(1),
            )
            .unwrap();
            assert!(!m.has_default_row_names(), "{:?}", names);
        }
    }

    #[test]
    fn test_out_of_order_sequence_is_not_default() {
        let m = LabeledMatrix::new(
            array![[1.0], [0.0]],
            Some(vec!["2".into(), "1".into()]),
            cols(1),
        )
        .unwrap();
        assert!(!m.has_default_row_names());
    }

    #[test]
    fn test_label_count_checked() {
        let bad_cols = LabeledMatrix::new(array![[1.0, 2.0]], None, cols(1));
        assert!(matches!(bad_cols, Err(DgeError::InvalidMatrix { .. })));

        let bad_rows = LabeledMatrix::new(array![[1.0]], Some(vec![]), cols(1));
        assert!(bad_rows.is_err());
    }
}
