//! Record sequence load/save helpers with schema validation.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result, anyhow};
use jsonschema::{Validator, validator_for};
use serde_json::Value;
use tracing::debug;

const RECORDS_SCHEMA: &str = include_str!("../../schemas/records/v1.schema.json");

static RECORDS_VALIDATOR: LazyLock<Validator> = LazyLock::new(|| {
    let schema: Value = serde_json::from_str(RECORDS_SCHEMA).expect("records schema json");
    validator_for(&schema).expect("records schema")
});

/// Load and validate a record sequence from disk.
pub fn load_records(path: &Path) -> Result<Vec<Value>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read records file {}", path.display()))?;
    let records =
        parse_records(&contents).with_context(|| format!("load records file {}", path.display()))?;
    debug!(path = %path.display(), count = records.len(), "loaded records");
    Ok(records)
}

/// Parse a JSON document and check it is an array of objects.
pub fn parse_records(contents: &str) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(contents).context("parse records json")?;
    validate_schema(&value)?;
    match value {
        Value::Array(records) => Ok(records),
        _ => Err(anyhow!("records document must be an array")),
    }
}

/// Write records as pretty-printed JSON with trailing newline.
pub fn write_records(path: &Path, records: &[Value]) -> Result<()> {
    let mut buf = serde_json::to_string_pretty(records).context("serialize records")?;
    buf.push('\n');
    fs::write(path, buf).with_context(|| format!("write records {}", path.display()))
}

fn validate_schema(records: &Value) -> Result<()> {
    let errors = RECORDS_VALIDATOR
        .iter_errors(records)
        .map(|err| err.to_string())
        .collect::<Vec<_>>();
    if !errors.is_empty() {
        return Err(anyhow!("not an array of record objects: {}", errors.join("; ")));
    }
    Ok(())
}
