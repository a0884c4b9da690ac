use ndarray::{Array2, ArrayView2};

use crate::dataset::{AnnotationTable, SampleGroups};
use crate::error::{DgeError, Result};

/// Counts (features x samples) with feature annotation, sample annotation and sample groups
///
/// Row order of `genes` follows the count rows, row order of `samples` and `groups` follows the
/// count columns. All of this is checked once on construction; the dataset is read-only after.
#[derive(Debug, Clone)]
pub struct ExpressionDataset {
    counts: Array2<f64>,
    feature_ids: Vec<String>,
    sample_ids: Vec<String>,
    genes: AnnotationTable,
    samples: AnnotationTable,
    groups: SampleGroups,
}

impl ExpressionDataset {
    pub fn new(
        counts: Array2<f64>,
        feature_ids: Vec<String>,
        sample_ids: Vec<String>,
        genes: AnnotationTable,
        samples: AnnotationTable,
        groups: SampleGroups,
    ) -> Result<Self> {
        let (n_features, n_samples) = counts.dim();

        check_len("feature ids", feature_ids.len(), n_features)?;
        check_len("sample ids", sample_ids.len(), n_samples)?;
        check_len("feature annotation rows", genes.n_rows(), n_features)?;
        check_len("sample annotation rows", samples.n_rows(), n_samples)?;
        check_len("sample group labels", groups.len(), n_samples)?;

        if counts.iter().any(|&x| x < 0.0 || !x.is_finite()) {
            return Err(DgeError::InvalidDataset {
                reason: "counts must be non-negative finite values".to_string(),
            });
        }
        if counts.iter().any(|&x| x != x.round()) {
            log::warn!("Some count values are not integers");
        }

        Ok(Self { counts, feature_ids, sample_ids, genes, samples, groups })
    }

    pub fn n_features(&self) -> usize {
        self.counts.nrows()
    }

    pub fn n_samples(&self) -> usize {
        self.counts.ncols()
    }

    pub fn counts(&self) -> ArrayView2<'_, f64> {
        self.counts.view()
    }

    pub fn feature_ids(&self) -> &[String] {
        &self.feature_ids
    }

    pub fn sample_ids(&self) -> &[String] {
        &self.sample_ids
    }

    pub fn genes(&self) -> &AnnotationTable {
        &self.genes
    }

    pub fn samples(&self) -> &AnnotationTable {
        &self.samples
    }

    pub fn groups(&self) -> &SampleGroups {
        &self.groups
    }
}

fn check_len(what: &str, got: usize, expected: usize) -> Result<()> {
    if got != expected {
        return Err(DgeError::InvalidDataset {
            reason: format!("{} {}, expected {}", got, what, expected),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn genes(ids: &[&str]) -> AnnotationTable {
        AnnotationTable::new(strings(&["id"]), ids.iter().map(|i| strings(&[*i])).collect()).unwrap()
    }

    #[test]
    fn test_valid_dataset() {
        let dataset = ExpressionDataset::new(
            array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]],
            strings(&["g1", "g2", "g3"]),
            strings(&["s1", "s2"]),
            genes(&["g1", "g2", "g3"]),
            genes(&["s1", "s2"]),
            SampleGroups::new(strings(&["a", "b"])),
        )
        .unwrap();
        assert_eq!(dataset.n_features(), 3);
        assert_eq!(dataset.n_samples(), 2);
    }

    #[test]
    fn test_annotation_rows_must_match_counts() {
        let result = ExpressionDataset::new(
            array![[1.0, 2.0]],
            strings(&["g1"]),
            strings(&["s1", "s2"]),
            genes(&["g1", "g2"]),
            genes(&["s1", "s2"]),
            SampleGroups::new(strings(&["a", "b"])),
        );
        assert!(matches!(result, Err(DgeError::InvalidDataset { .. })));
    }

    #[test]
    fn test_negative_counts_rejected() {
        let result = ExpressionDataset::new(
            array![[-1.0]],
            strings(&["g1"]),
            strings(&["s1"]),
            genes(&["g1"]),
            genes(&["s1"]),
            SampleGroups::new(strings(&["a"])),
        );
        assert!(result.is_err());
    }
}
