use std::process::Command;

use log::info;

use crate::error::{DgeError, Result};
use crate::slurm::job::SubmissionRequest;

/// Something that can enqueue a SubmissionRequest and report what the scheduler said
pub trait Scheduler {
    /// Scheduler command written at the start of the rendered submission
    fn program(&self) -> &str;

    /// Enqueue the job and return the scheduler's standard output
    fn run(&self, request: &SubmissionRequest) -> Result<String>;
}

/// Runs sbatch as a blocking child process
///
/// sbatch returns as soon as the job is queued; job progress is not tracked.
pub struct Sbatch {
    program: String,
}

impl Sbatch {
    pub fn new(program: &str) -> Self {
        Sbatch { program: program.to_string() }
    }
}

impl Scheduler for Sbatch {
    fn program(&self) -> &str {
        &self.program
    }

    fn run(&self, request: &SubmissionRequest) -> Result<String> {
        let mut sbatch = Command::new(&self.program);
        let cmd = sbatch.args(request.args());
        info!("Running sbatch process");
        info!("{:?}", &cmd);

        let output = cmd.output().map_err(|source| DgeError::Spawn {
            program: self.program.clone(),
            source,
        })?;
        if !output.status.success() {
            return Err(DgeError::SchedulerFailed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        info!("sbatch: {}", stdout.trim());
        Ok(stdout)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::artifact::ArtifactPaths;
    use crate::command::DgeCommand;
    use crate::slurm::job::JobName;

    fn request(program: &str) -> SubmissionRequest {
        let paths = ArtifactPaths::from_prefix("/tmp/p");
        let command = DgeCommand::new("dge.Rscript", &paths, "/tmp/run", false);
        SubmissionRequest::new(program, JobName::from_out_dir("/tmp/run").unwrap(), command)
    }

    #[test]
    fn test_captures_stdout() {
        // echo prints its arguments, standing in for sbatch
        let scheduler = Sbatch::new("echo");
        let output = scheduler.run(&request("echo")).unwrap();
        assert!(output.starts_with("-c 1 -e /tmp/slurm-run.err -J run"));
        assert!(output.trim_end().ends_with("-writedb"));
    }

    #[test]
    fn test_missing_program() {
        let scheduler = Sbatch::new("/nonexistent/sbatch");
        let err = scheduler.run(&request("/nonexistent/sbatch")).unwrap_err();
        assert!(matches!(err, DgeError::Spawn { .. }));
    }

    #[test]
    fn test_non_zero_exit() {
        let scheduler = Sbatch::new("false");
        let err = scheduler.run(&request("false")).unwrap_err();
        assert!(matches!(err, DgeError::SchedulerFailed { .. }));
    }
}
