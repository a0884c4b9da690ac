use log::debug;

use crate::dataset::{ExpressionDataset, LabeledMatrix};
use crate::error::{DgeError, Result};

/// Check that counts, design and contrast fit together
///
/// Checks run in order and stop at the first failure:
/// 1. design rows == count columns
/// 2. design row names == count column names (same order)
/// 3. contrast rows == design columns
///
/// Returns the design to write to disk. A design without row names, or with the default `1..n`
/// names, gets the dataset's sample ids before the name check.
pub fn validate(
    dataset: &ExpressionDataset,
    design: &LabeledMatrix,
    contrast: &LabeledMatrix,
) -> Result<LabeledMatrix> {
    if design.n_rows() != dataset.n_samples() {
        return Err(DgeError::DesignRowCount {
            design_rows: design.n_rows(),
            count_cols: dataset.n_samples(),
        });
    }

    let design = if design.has_default_row_names() {
        debug!("Design matrix has no row names, using sample ids");
        design.clone().with_row_names(dataset.sample_ids().to_vec())?
    } else {
        design.clone()
    };
    if design.row_names() != Some(dataset.sample_ids()) {
        return Err(DgeError::DesignRowNames);
    }

    if contrast.n_rows() != design.n_cols() {
        return Err(DgeError::ContrastRowCount {
            contrast_rows: contrast.n_rows(),
            design_cols: design.n_cols(),
        });
    }

    Ok(design)
}
