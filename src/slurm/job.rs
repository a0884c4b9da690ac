use std::path::{Path, PathBuf};

use crate::command::render::{join, strip_trailing_slash};
use crate::command::DgeCommand;
use crate::error::{DgeError, Result};

/// Everything sbatch needs to enqueue one DGE run
///
/// The job is named after the output directory and writes its SLURM logs next to it:
/// - `<parent>/slurm-<name>.out`
/// - `<parent>/slurm-<name>.err`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub program: String,
    pub job_name: String,
    pub stdout: PathBuf,
    pub stderr: PathBuf,
    /// Always one core, the DGE script is single threaded
    pub cpus: u32,
    pub command: DgeCommand,
}

/// Job name and parent directory derived from an output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobName {
    pub name: String,
    pub parent: PathBuf,
}

impl JobName {
    pub fn from_out_dir(out_dir: &str) -> Result<JobName> {
        let path = Path::new(strip_trailing_slash(out_dir));
        let name = path
            .file_name()
            .ok_or_else(|| DgeError::InvalidOutputDir(out_dir.to_string()))?
            .to_string_lossy()
            .into_owned();
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Ok(JobName { name, parent })
    }
}

impl SubmissionRequest {
    pub fn new(program: &str, job: JobName, command: DgeCommand) -> Self {
        SubmissionRequest {
            program: program.to_string(),
            stdout: job.parent.join(format!("slurm-{}.out", job.name)),
            stderr: job.parent.join(format!("slurm-{}.err", job.name)),
            job_name: job.name,
            cpus: 1,
            command,
        }
    }

    /// sbatch arguments followed by the DGE command
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "-c".to_string(),
            self.cpus.to_string(),
            "-e".to_string(),
            self.stderr.to_string_lossy().into_owned(),
            "-J".to_string(),
            self.job_name.clone(),
            "-o".to_string(),
            self.stdout.to_string_lossy().into_owned(),
            self.command.program().to_string(),
        ];
        args.extend(self.command.args());
        args
    }

    pub fn render(&self) -> String {
        join(std::iter::once(self.program.clone()).chain(self.args()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::ArtifactPaths;

    #[test]
    fn test_job_name() {
        let job = JobName::from_out_dir("/scratch/dge/run1/").unwrap();
        assert_eq!(job.name, "run1");
        assert_eq!(job.parent, PathBuf::from("/scratch/dge"));

        let job = JobName::from_out_dir("edgeR_output").unwrap();
        assert_eq!(job.name, "edgeR_output");
        assert_eq!(job.parent, PathBuf::from("."));

        assert!(JobName::from_out_dir("/").is_err());
        assert!(JobName::from_out_dir("out/..").is_err());
    }

    #[test]
    fn test_render() {
        let paths = ArtifactPaths::from_prefix("/tmp/p");
        let command = DgeCommand::new("dge.Rscript", &paths, "/data/run1/", true);
        let job = JobName::from_out_dir("/data/run1/").unwrap();
        let request = SubmissionRequest::new("sbatch", job, command.clone());

        assert_eq!(
            request.render(),
            format!(
                "sbatch -c 1 -e /data/slurm-run1.err -J run1 -o /data/slurm-run1.out {}",
                command.render()
            )
        );
    }
}
