//! Tab-delimited readers for the job inputs
//!
//! All readers accept tab or comma delimiters (detected from the header line), skip blank lines
//! and strip surrounding quotes from every field.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;
use ndarray::Array2;

use crate::dataset::{AnnotationTable, ExpressionDataset, LabeledMatrix, SampleGroups};
use crate::error::{DgeError, Result};

/// Header fields and data rows of a delimited text file
struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

fn strip_quotes(s: &str) -> String {
    let s = s.trim();
    if s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"')) || (s.starts_with('\'') && s.ends_with('\'')))
    {
        s[1..s.len() - 1].to_string()
    } else {
        s.to_string()
    }
}

fn read_table(path: &Path) -> Result<Table> {
    info!("Reading table {}", path.display());
    let reader = BufReader::new(File::open(path)?);
    let mut lines = reader.lines();

    let header_line = lines.next().ok_or_else(|| DgeError::InvalidDataset {
        reason: format!("{} is empty", path.display()),
    })??;
    let delimiter = if header_line.contains('\t') { '\t' } else { ',' };
    let header = header_line.split(delimiter).map(strip_quotes).collect();

    let mut rows = Vec::new();
    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        rows.push(line.split(delimiter).map(strip_quotes).collect());
    }

    Ok(Table { header, rows })
}

fn parse_number(value: &str, path: &Path) -> Result<f64> {
    value.parse::<f64>().map_err(|_| DgeError::InvalidDataset {
        reason: format!("invalid number '{}' in {}", value, path.display()),
    })
}

/// Read a count matrix: first column feature ids, header row sample ids
pub fn read_counts<P: AsRef<Path>>(path: P) -> Result<(Array2<f64>, Vec<String>, Vec<String>)> {
    let path = path.as_ref();
    let table = read_table(path)?;
    if table.header.len() < 2 {
        return Err(DgeError::InvalidDataset {
            reason: format!("{} has no sample columns", path.display()),
        });
    }
    let sample_ids: Vec<String> = table.header[1..].to_vec();
    let n_samples = sample_ids.len();

    let mut counts = Array2::zeros((table.rows.len(), n_samples));
    let mut feature_ids = Vec::with_capacity(table.rows.len());
    for (i, row) in table.rows.iter().enumerate() {
        if row.len() != n_samples + 1 {
            return Err(DgeError::InvalidDataset {
                reason: format!(
                    "{} row {} has {} columns, expected {}",
                    path.display(),
                    i + 2,
                    row.len(),
                    n_samples + 1
                ),
            });
        }
        feature_ids.push(row[0].clone());
        for (j, value) in row[1..].iter().enumerate() {
            counts[[i, j]] = parse_number(value, path)?;
        }
    }

    Ok((counts, feature_ids, sample_ids))
}

/// Read an annotation table, keeping every column
pub fn read_annotation<P: AsRef<Path>>(path: P) -> Result<AnnotationTable> {
    let table = read_table(path.as_ref())?;
    AnnotationTable::new(table.header, table.rows)
}

/// Read a numeric matrix
///
/// Row names are taken from the first column when the header has an empty corner cell or one
/// field fewer than the data rows (as written by R's `write.table`). Otherwise every column is
/// numeric and the matrix has no row names.
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<LabeledMatrix> {
    let path = path.as_ref();
    let table = read_table(path)?;
    let width = table.rows.first().map_or(table.header.len(), |r| r.len());

    let (has_row_names, col_names) = if table.header.len() + 1 == width {
        (true, table.header.clone())
    } else if table.header.first().map_or(false, |h| h.is_empty()) {
        (true, table.header[1..].to_vec())
    } else {
        (false, table.header.clone())
    };
    let offset = usize::from(has_row_names);
    let n_cols = col_names.len();

    let mut values = Array2::zeros((table.rows.len(), n_cols));
    let mut row_names = Vec::new();
    for (i, row) in table.rows.iter().enumerate() {
        if row.len() != n_cols + offset {
            return Err(DgeError::InvalidMatrix {
                reason: format!(
                    "{} row {} has {} columns, expected {}",
                    path.display(),
                    i + 2,
                    row.len(),
                    n_cols + offset
                ),
            });
        }
        if has_row_names {
            row_names.push(row[0].clone());
        }
        for (j, value) in row[offset..].iter().enumerate() {
            values[[i, j]] = parse_number(value, path)?;
        }
    }

    LabeledMatrix::new(values, has_row_names.then_some(row_names), col_names)
}

/// Load counts, annotations and grouping into an ExpressionDataset
///
/// The sample groups come from `group_column` of the sample annotation. With `group_levels` the
/// level order is explicit, otherwise levels are sorted.
pub fn read_dataset(
    counts: &Path,
    features: &Path,
    samples: &Path,
    group_column: &str,
    group_levels: Option<Vec<String>>,
) -> Result<ExpressionDataset> {
    let (matrix, feature_ids, sample_ids) = read_counts(counts)?;
    let genes = read_annotation(features)?;
    let samples = read_annotation(samples)?;

    let labels: Vec<String> = samples
        .column(group_column)
        .ok_or_else(|| DgeError::InvalidDataset {
            reason: format!("sample annotation has no column '{}'", group_column),
        })?
        .into_iter()
        .map(String::from)
        .collect();
    let groups = match group_levels {
        Some(levels) => SampleGroups::with_levels(labels, levels)?,
        None => SampleGroups::new(labels),
    };

    ExpressionDataset::new(matrix, feature_ids, sample_ids, genes, samples, groups)
}
