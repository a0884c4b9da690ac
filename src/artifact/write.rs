use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::artifact::ArtifactPaths;
use crate::dataset::{AnnotationTable, ExpressionDataset, LabeledMatrix};
use crate::error::Result;

/// Feature annotation column copied into the GCT description field
const DESCRIPTION_COLUMN: &str = "Description";

/// Write counts, feature annotation, sample annotation, group labels and group levels
///
/// Parent directories must already exist. Existing files are truncated.
pub fn write_dataset(dataset: &ExpressionDataset, paths: &ArtifactPaths) -> Result<()> {
    write_gct(dataset, &paths.counts)?;
    write_annotation(dataset.genes(), &paths.feature_anno)?;
    write_annotation(dataset.samples(), &paths.sample_anno)?;
    write_lines(dataset.groups().labels(), &paths.sample_group)?;
    write_lines(dataset.groups().levels(), &paths.sample_group_levels)?;
    Ok(())
}

/// Tab-delimited dump of a numeric matrix with row and column labels
///
/// The header starts with an empty corner cell so that column labels line up with values.
pub fn write_matrix(matrix: &LabeledMatrix, out_path: &Path) -> Result<()> {
    info!("Writing matrix to {}", out_path.display());
    let mut file = BufWriter::new(File::create(out_path)?);

    writeln!(file, "\t{}", matrix.col_names().join("\t"))?;
    for (name, row) in matrix.row_labels().iter().zip(matrix.values().rows()) {
        let values: Vec<String> = row.iter().map(|&v| format_value(v)).collect();
        writeln!(file, "{}\t{}", name, values.join("\t"))?;
    }

    file.flush()?;
    Ok(())
}

/// Counts in GCT 1.2 format
///
/// ```text
/// #1.2
/// <features>\t<samples>
/// Name\tDescription\t<sample ids>
/// <feature id>\t<description>\t<counts>
/// ```
fn write_gct(dataset: &ExpressionDataset, out_path: &Path) -> Result<()> {
    info!("Writing counts to {}", out_path.display());
    let mut file = BufWriter::new(File::create(out_path)?);
    let descriptions = dataset.genes().column(DESCRIPTION_COLUMN);

    writeln!(file, "#1.2")?;
    writeln!(file, "{}\t{}", dataset.n_features(), dataset.n_samples())?;
    writeln!(file, "Name\tDescription\t{}", dataset.sample_ids().join("\t"))?;
    for (i, (id, row)) in dataset.feature_ids().iter().zip(dataset.counts().rows()).enumerate() {
        let description = descriptions.as_ref().map_or("", |d| d[i]);
        let counts: Vec<String> = row.iter().map(|&v| format_value(v)).collect();
        writeln!(file, "{}\t{}\t{}", id, description, counts.join("\t"))?;
    }

    file.flush()?;
    Ok(())
}

fn write_annotation(table: &AnnotationTable, out_path: &Path) -> Result<()> {
    info!("Writing annotation to {}", out_path.display());
    let mut file = BufWriter::new(File::create(out_path)?);

    writeln!(file, "{}", table.columns().join("\t"))?;
    for row in table.rows() {
        writeln!(file, "{}", row.join("\t"))?;
    }

    file.flush()?;
    Ok(())
}

fn write_lines(values: &[String], out_path: &Path) -> Result<()> {
    info!("Writing {} lines to {}", values.len(), out_path.display());
    let mut file = BufWriter::new(File::create(out_path)?);
    for value in values {
        writeln!(file, "{}", value)?;
    }
    file.flush()?;
    Ok(())
}

/// Integral values print without a decimal part
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
