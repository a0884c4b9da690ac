//! Error types for staging and submitting DGE jobs

use std::process::ExitStatus;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DgeError {
    #[error("Invalid expression dataset: {reason}")]
    InvalidDataset { reason: String },

    #[error("Invalid matrix: {reason}")]
    InvalidMatrix { reason: String },

    #[error("design rows ({design_rows}) must equal count-matrix columns ({count_cols})")]
    DesignRowCount { design_rows: usize, count_cols: usize },

    #[error("design row names must match expression column names")]
    DesignRowNames,

    #[error("contrast rows ({contrast_rows}) must equal design columns ({design_cols})")]
    ContrastRowCount { contrast_rows: usize, design_cols: usize },

    #[error("Invalid output directory: '{0}'")]
    InvalidOutputDir(String),

    #[error("Invalid job request: {reason}")]
    InvalidRequest { reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Can't start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    SchedulerFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

impl DgeError {
    /// True for the three conformability checks run before any file is written
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DgeError::DesignRowCount { .. }
                | DgeError::DesignRowNames
                | DgeError::ContrastRowCount { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DgeError>;
