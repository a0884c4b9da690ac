//! Validate job inputs, write them to disk and render the DGE script invocation

/// Conformability checks between counts, design and contrast
pub mod validate;
/// Structured command lines and their rendering
pub mod render;

use log::info;

use crate::artifact::{write_dataset, write_matrix, ArtifactPaths};
use crate::dataset::{ExpressionDataset, LabeledMatrix};
use crate::error::{DgeError, Result};

pub use render::{DgeCommand, Token};

/// edgeR/limma DGE script, looked up on PATH unless overridden
pub const DEFAULT_DGE_SCRIPT: &str = "ngsDge_edgeR.Rscript";

/// Default output directory of the DGE script
pub const DEFAULT_OUT_DIR: &str = "edgeR_output";

/// Job options that are not part of the data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobOptions {
    /// File prefix for the staged inputs, a temporary prefix is used if unset
    pub prefix: Option<String>,
    pub out_dir: String,
    /// Run the extended molecular phenotyping analysis (`-mps`)
    pub run_mps: bool,
    pub script: String,
}

impl Default for JobOptions {
    fn default() -> Self {
        JobOptions {
            prefix: None,
            out_dir: DEFAULT_OUT_DIR.to_string(),
            run_mps: false,
            script: DEFAULT_DGE_SCRIPT.to_string(),
        }
    }
}

/// Validate inputs, write the seven artifact files and return the DGE script command
///
/// Nothing is written unless every check passes. The command is returned, not run.
pub fn build_command(
    dataset: &ExpressionDataset,
    design: &LabeledMatrix,
    contrast: &LabeledMatrix,
    options: &JobOptions,
) -> Result<DgeCommand> {
    info!("Validating design ({} x {}) and contrast ({} x {})",
        design.n_rows(), design.n_cols(), contrast.n_rows(), contrast.n_cols());
    let design = validate::validate(dataset, design, contrast)?;
    if render::strip_trailing_slash(&options.out_dir).is_empty() {
        return Err(DgeError::InvalidOutputDir(options.out_dir.clone()));
    }

    let paths = ArtifactPaths::resolve(options.prefix.as_deref());
    write_dataset(dataset, &paths)?;
    write_matrix(&design, &paths.design)?;
    write_matrix(contrast, &paths.contrast)?;

    let command = DgeCommand::new(&options.script, &paths, &options.out_dir, options.run_mps);
    info!("DGE command: {}", command);
    Ok(command)
}
