//! Stage inputs for an edgeR/limma differential gene expression run and submit it to SLURM
//!
//! The statistics happen in an external DGE script. This crate:
//! 1. checks that the count matrix, design matrix and contrast matrix fit together
//! 2. writes them (with feature/sample annotation and sample groups) as flat files
//! 3. renders the DGE script command line and wraps it in an `sbatch` call
//! 4. asks before overwriting an existing output directory, then submits

pub mod artifact;
pub mod command;
pub mod dataset;
pub mod error;
pub mod request;
pub mod slurm;

pub use command::{build_command, JobOptions};
pub use error::{DgeError, Result};
pub use slurm::{build_submission_command, stage, submit, OverwritePolicy, SubmissionOutcome};
