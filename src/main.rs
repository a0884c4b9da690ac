use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use dgesubmit::command::DEFAULT_DGE_SCRIPT;
use dgesubmit::request::schema::load_schema;
use dgesubmit::request::Message;
use dgesubmit::slurm::{Console, Sbatch, Scheduler};
use dgesubmit::{stage, submit, OverwritePolicy, SubmissionOutcome};

/// Stage edgeR/limma DGE inputs and submit the analysis to SLURM
#[derive(Parser, Debug)]
#[command(name = "dgesubmit")]
#[command(version)]
struct Args {
    /// Path to a JSON job request
    #[arg(short, long)]
    request: PathBuf,

    /// Overwrite an existing output directory
    #[arg(long, value_enum, default_value_t = OverwritePolicy::Ask)]
    overwrite: OverwritePolicy,

    /// DGE script to run on the cluster
    #[arg(long, env = "DGE_SCRIPT", default_value = DEFAULT_DGE_SCRIPT)]
    script: String,

    /// sbatch executable
    #[arg(long, env = "DGE_SBATCH", default_value = "sbatch")]
    sbatch: String,

    /// Write the input files and print the command, but don't submit
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    info!("dgesubmit {} starting up", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let message = Message { path: args.request.clone(), compiled_schema: load_schema()? };
    let request = message
        .read()
        .with_context(|| format!("Can't read job request {}", args.request.display()))?;
    let inputs = request.load().context("Can't load job inputs")?;
    let options = request.options(&args.script);

    let scheduler = Sbatch::new(&args.sbatch);
    let mut console = Console::stdio();

    if args.dry_run {
        let staged = stage(
            &inputs.dataset,
            &inputs.design,
            &inputs.contrast,
            &options,
            args.overwrite,
            scheduler.program(),
            &mut console,
        )?;
        match staged {
            Some(request) => {
                info!("--dry-run set, not submitting");
                println!("{}", request.render());
            }
            None => info!("{} exists, nothing staged", options.out_dir),
        }
        return Ok(());
    }

    let outcome = submit(
        &inputs.dataset,
        &inputs.design,
        &inputs.contrast,
        &options,
        args.overwrite,
        &scheduler,
        &mut console,
    )?;

    match outcome {
        SubmissionOutcome::Submitted { command, output } => {
            println!("{}", command);
            print!("{}", output);
        }
        SubmissionOutcome::SkippedExisting => {
            info!("{} exists, nothing submitted", options.out_dir);
        }
    }

    Ok(())
}
