//! JSON <-> YAML conversion of locale files
//!
//! Key order and non-ASCII text are preserved in both directions.

use std::path::Path;
use serde_json::Value;
use tracing::info;
use crate::utils::errors::Result;

/// Convert a JSON locale file to YAML
pub fn json_to_yaml(json_path: &Path, yaml_path: &Path) -> Result<()> {
    let content = std::fs::read_to_string(json_path)?;
    let data: Value = serde_json::from_str(&content)?;
    std::fs::write(yaml_path, serde_yaml::to_string(&data)?)?;

    info!(from = %json_path.display(), to = %yaml_path.display(), "Converted JSON to YAML");
    Ok(())
}

/// Convert a YAML locale file to pretty-printed JSON
pub fn yaml_to_json(yaml_path: &Path, json_path: &Path) -> Result<()> {
    let content = std::fs::read_to_string(yaml_path)?;
    let data: Value = serde_yaml::from_str(&content)?;
    std::fs::write(json_path, serde_json::to_string_pretty(&data)?)?;

    info!(from = %yaml_path.display(), to = %json_path.display(), "Converted YAML to JSON");
    Ok(())
}
