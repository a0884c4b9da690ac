use std::fs;
use std::path::{Path, PathBuf};

use jsonschema::JSONSchema;
use log::{info, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::command::{JobOptions, DEFAULT_OUT_DIR};
use crate::dataset::read::{read_dataset, read_matrix};
use crate::dataset::{ExpressionDataset, LabeledMatrix};
use crate::error::{DgeError, Result};

/// A JSON job request on disk
pub struct Message {
    pub path: PathBuf,
    pub compiled_schema: JSONSchema,
}

impl Message {
    pub fn read(&self) -> Result<JobRequest> {
        let json: Value = self.parse_untyped_json()?;

        match self.validate(&json) {
            Ok(_) => {
                info!("Message is valid");
                self.parse_json(json)
            }
            Err(err) => {
                warn!("Message fails validation");
                Err(err)
            }
        }
    }

    fn validate(&self, json: &Value) -> Result<()> {
        info!("Validating raw message against JSON schema");
        self.compiled_schema.validate(json).map_err(|errors| {
            let reasons: Vec<String> = errors
                .map(|e| format!("{} at '{}'", e, e.instance_path))
                .collect();
            DgeError::InvalidRequest { reason: reasons.join("; ") }
        })
    }

    fn read_file(&self) -> Result<String> {
        let path: &Path = self.path.as_path();
        info!("Reading message at {}", path.display());
        fs::read_to_string(path).map_err(|err| {
            warn!("Can't read job request at path {}: {}", path.display(), err);
            DgeError::Io(err)
        })
    }

    fn parse_json(&self, value: Value) -> Result<JobRequest> {
        info!("Deserialising valid JSON into typed Rust object");
        Ok(serde_json::from_value::<JobRequest>(value)?)
    }

    fn parse_untyped_json(&self) -> Result<Value> {
        info!("Parsing JSON into untyped structure");
        let json_string = self.read_file()?;
        Ok(serde_json::from_str::<Value>(&json_string)?)
    }
}

/// Input files and options of one DGE job
///
/// Relative paths are resolved against the working directory, not the request file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobRequest {
    pub counts: PathBuf,
    pub features: PathBuf,
    pub samples: PathBuf,
    pub group_column: String,
    #[serde(default)]
    pub group_levels: Option<Vec<String>>,
    pub design: PathBuf,
    pub contrast: PathBuf,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default = "default_out_dir")]
    pub outdir: String,
    #[serde(default)]
    pub mps: bool,
}

fn default_out_dir() -> String {
    DEFAULT_OUT_DIR.to_string()
}

/// Everything read from the files a JobRequest points at
pub struct JobInputs {
    pub dataset: ExpressionDataset,
    pub design: LabeledMatrix,
    pub contrast: LabeledMatrix,
}

impl JobRequest {
    pub fn load(&self) -> Result<JobInputs> {
        let dataset = read_dataset(
            &self.counts,
            &self.features,
            &self.samples,
            &self.group_column,
            self.group_levels.clone(),
        )?;
        let design = read_matrix(&self.design)?;
        let contrast = read_matrix(&self.contrast)?;
        info!(
            "Loaded {} features x {} samples, design {} x {}, contrast {} x {}",
            dataset.n_features(),
            dataset.n_samples(),
            design.n_rows(),
            design.n_cols(),
            contrast.n_rows(),
            contrast.n_cols()
        );
        Ok(JobInputs { dataset, design, contrast })
    }

    pub fn options(&self, script: &str) -> JobOptions {
        JobOptions {
            prefix: self.prefix.clone(),
            out_dir: self.outdir.clone(),
            run_mps: self.mps,
            script: script.to_string(),
        }
    }
}
