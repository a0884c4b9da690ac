use jsonschema::JSONSchema;
use serde_json::Value;

use crate::error::{DgeError, Result};

/// included request schema
static REQUEST_SCHEMA: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/schema/request.json"));

pub fn load_schema() -> Result<JSONSchema> {
    let schema: Value = serde_json::from_str(REQUEST_SCHEMA)?;
    compile_schema(&schema)
}

fn compile_schema(schema: &Value) -> Result<JSONSchema> {
    JSONSchema::options()
        .compile(schema)
        .map_err(|err| DgeError::InvalidRequest { reason: format!("invalid schema: {}", err) })
}
