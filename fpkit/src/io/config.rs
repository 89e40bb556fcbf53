//! fpkit configuration stored in `fpkit.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::record::DEFAULT_ID_FIELD;

/// fpkit configuration (TOML).
///
/// Missing fields fall back to their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FpkitConfig {
    /// Field holding each record's identifier.
    pub id_field: String,

    /// Separator between search words passed to `highlight`.
    pub highlight_delimiter: String,

    /// Default length for `fpkit random`.
    pub random_string_length: usize,
}

impl Default for FpkitConfig {
    fn default() -> Self {
        Self {
            id_field: DEFAULT_ID_FIELD.to_string(),
            highlight_delimiter: " ".to_string(),
            random_string_length: 5,
        }
    }
}

impl FpkitConfig {
    pub fn validate(&self) -> Result<()> {
        if self.id_field.trim().is_empty() {
            return Err(anyhow!("id_field must be non-empty"));
        }
        if self.highlight_delimiter.is_empty() {
            return Err(anyhow!("highlight_delimiter must be non-empty"));
        }
        if self.random_string_length == 0 {
            return Err(anyhow!("random_string_length must be > 0"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `FpkitConfig::default()`.
pub fn load_config(path: &Path) -> Result<FpkitConfig> {
    if !path.exists() {
        let cfg = FpkitConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read fpkit config file {}", path.display()))?;
    let cfg: FpkitConfig = toml::from_str(&contents)
        .with_context(|| format!("parse fpkit config file {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &FpkitConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize fpkit config")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp_path = path.with_extension("toml.tmp");
    let parent = path.parent().filter(|dir| !dir.as_os_str().is_empty());
    if let Some(parent) = parent {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, FpkitConfig::default());
        assert_eq!(cfg.id_field, "_id");
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("nested").join("fpkit.toml");
        let cfg = FpkitConfig {
            id_field: "key".to_string(),
            ..FpkitConfig::default()
        };
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("fpkit.toml");
        fs::write(&path, "random_string_length = 12\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.random_string_length, 12);
        assert_eq!(cfg.highlight_delimiter, " ");
    }

    #[test]
    fn validate_rejects_empty_id_field() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("fpkit.toml");
        fs::write(&path, "id_field = \"  \"\n").expect("write");
        let err = load_config(&path).expect_err("invalid");
        assert!(err.to_string().contains("id_field"));
    }

    #[test]
    fn validate_rejects_zero_length() {
        let cfg = FpkitConfig {
            random_string_length: 0,
            ..FpkitConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn malformed_file_error_names_config() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("fpkit.toml");
        fs::write(&path, "id_field = [\n").expect("write");
        let err = load_config(&path).expect_err("malformed");
        assert!(err.to_string().starts_with("parse fpkit config file"));
    }
}
