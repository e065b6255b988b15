//! JSON/YAML pair synchronisation
//!
//! Some locale folders keep the same table as both `ru.json` and `ru.yaml`.
//! Syncing merges the two with one side winning on key collisions and
//! writes the merged table back to both files.

use std::path::Path;
use serde_json::{Map, Value};
use tracing::info;
use crate::utils::errors::{PolyglotError, Result};
use super::read_mapping;

/// Which file wins when both define a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SyncPreference {
    Yaml,
    Json,
}

fn load_side(path: &Path) -> Result<Map<String, Value>> {
    if !path.exists() {
        return Ok(Map::new());
    }
    read_mapping(path)?.ok_or_else(|| PolyglotError::LocaleFile {
        path: path.to_path_buf(),
        reason: "top level is not a mapping".to_string(),
    })
}

/// Merge a JSON/YAML pair and write the result to both files
///
/// A missing file counts as an empty table. Keys keep the order of the
/// losing side, with keys only the winning side has appended.
pub fn sync_pair(json_path: &Path, yaml_path: &Path, prefer: SyncPreference) -> Result<Map<String, Value>> {
    let json_data = load_side(json_path)?;
    let yaml_data = load_side(yaml_path)?;

    let (mut merged, winner) = match prefer {
        SyncPreference::Yaml => (json_data, yaml_data),
        SyncPreference::Json => (yaml_data, json_data),
    };
    merged.extend(winner);

    std::fs::write(json_path, serde_json::to_string_pretty(&merged)?)?;
    std::fs::write(yaml_path, serde_yaml::to_string(&merged)?)?;

    info!(
        json = %json_path.display(),
        yaml = %yaml_path.display(),
        prefer = ?prefer,
        "Synchronised locale pair"
    );

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> (tempfile::TempDir, std::path::PathBuf, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("ru.json");
        let yaml = dir.path().join("ru.yaml");
        std::fs::write(&json, r#"{"shared": "из json", "json_only": "j"}"#).unwrap();
        std::fs::write(&yaml, "shared: из yaml\nyaml_only: y\n").unwrap();
        (dir, json, yaml)
    }

    #[test]
    fn test_yaml_preferred() {
        let (_dir, json, yaml) = pair();
        let merged = sync_pair(&json, &yaml, SyncPreference::Yaml).unwrap();

        assert_eq!(merged["shared"], "из yaml");
        assert_eq!(merged.len(), 3);
        let keys: Vec<&String> = merged.keys().collect();
        assert_eq!(keys, vec!["shared", "json_only", "yaml_only"]);

        let reread: Value = serde_yaml::from_str(&std::fs::read_to_string(&yaml).unwrap()).unwrap();
        assert_eq!(reread["json_only"], "j");
    }

    #[test]
    fn test_json_preferred_and_written_back() {
        let (_dir, json, yaml) = pair();
        sync_pair(&json, &yaml, SyncPreference::Json).unwrap();

        let reread: Value = serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
        assert_eq!(reread["shared"], "из json");
        assert_eq!(reread["yaml_only"], "y");
    }

    #[test]
    fn test_missing_side_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("en.json");
        let yaml = dir.path().join("en.yaml");
        std::fs::write(&json, r#"{"a": "b"}"#).unwrap();

        sync_pair(&json, &yaml, SyncPreference::Yaml).unwrap();
        assert_eq!(std::fs::read_to_string(&yaml).unwrap(), "a: b\n");
    }
}
