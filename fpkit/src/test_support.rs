//! Test-only helpers for constructing JSON record sequences.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};

/// Create a record with the given `_id` and a single `v` field.
pub fn record(id: i64, v: &str) -> Value {
    json!({"_id": id, "v": v})
}

/// The three-record sequence `[{_id:1,v:'a'}, {_id:2,v:'b'}, {_id:3,v:'c'}]`.
pub fn sample_records() -> Vec<Value> {
    vec![record(1, "a"), record(2, "b"), record(3, "c")]
}

/// Write `records` as pretty JSON to `dir/name` and return the path.
pub fn write_records_file(dir: &Path, name: &str, records: &[Value]) -> PathBuf {
    let path = dir.join(name);
    let payload = serde_json::to_string_pretty(records).expect("serialize records");
    fs::write(&path, payload).expect("write records file");
    path
}
