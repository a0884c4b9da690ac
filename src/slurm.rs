//! Wrap the DGE command in an sbatch submission and dispatch it
//!
//! Submission is gated by an overwrite policy on the output directory. When the policy declines
//! and the directory exists, nothing is written and nothing is run.

/// Job name, SLURM log paths and the rendered sbatch command
pub mod job;
/// Overwrite policy and the console prompt behind `ask`
pub mod overwrite;
/// Scheduler trait and sbatch as a child process
pub mod sbatch;

use std::io::{BufRead, Write};

use log::info;

use crate::command::{build_command, JobOptions};
use crate::dataset::{ExpressionDataset, LabeledMatrix};
use crate::error::Result;

pub use job::{JobName, SubmissionRequest};
pub use overwrite::{Console, OverwritePolicy};
pub use sbatch::{Sbatch, Scheduler};

/// Result of `submit`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The job was handed to the scheduler
    Submitted { command: String, output: String },
    /// The output directory exists and the overwrite policy declined, nothing happened
    SkippedExisting,
}

/// Validate, write the artifact files and render the sbatch command around the DGE command
pub fn build_submission_command(
    dataset: &ExpressionDataset,
    design: &LabeledMatrix,
    contrast: &LabeledMatrix,
    options: &JobOptions,
    sbatch: &str,
) -> Result<SubmissionRequest> {
    let job = JobName::from_out_dir(&options.out_dir)?;
    let command = build_command(dataset, design, contrast, options)?;
    Ok(SubmissionRequest::new(sbatch, job, command))
}

/// Apply the overwrite policy, then validate, write the artifact files and render the sbatch
/// command
///
/// Returns `None`, with nothing written, when the output directory exists and the policy declines.
/// Nothing is run; use this on its own to inspect a job before submitting it.
pub fn stage<R, W>(
    dataset: &ExpressionDataset,
    design: &LabeledMatrix,
    contrast: &LabeledMatrix,
    options: &JobOptions,
    policy: OverwritePolicy,
    sbatch: &str,
    console: &mut Console<R, W>,
) -> Result<Option<SubmissionRequest>>
where
    R: BufRead,
    W: Write,
{
    if !policy.allows_submission(&options.out_dir, console)? {
        info!("Skipping submission for {}", options.out_dir);
        return Ok(None);
    }
    build_submission_command(dataset, design, contrast, options, sbatch).map(Some)
}

/// Stage the job, then hand it to the scheduler
///
/// Blocks on the console when the policy is `Ask` and the output directory exists, and on the
/// scheduler process until it has queued the job.
pub fn submit<S, R, W>(
    dataset: &ExpressionDataset,
    design: &LabeledMatrix,
    contrast: &LabeledMatrix,
    options: &JobOptions,
    policy: OverwritePolicy,
    scheduler: &S,
    console: &mut Console<R, W>,
) -> Result<SubmissionOutcome>
where
    S: Scheduler + ?Sized,
    R: BufRead,
    W: Write,
{
    let staged = stage(dataset, design, contrast, options, policy, scheduler.program(), console)?;
    let Some(request) = staged else {
        return Ok(SubmissionOutcome::SkippedExisting);
    };

    let output = scheduler.run(&request)?;
    Ok(SubmissionOutcome::Submitted { command: request.render(), output })
}
