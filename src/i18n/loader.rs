//! Locale file loader and lookup table
//!
//! This module walks a locale tree, merges every file whose name ends with
//! `<code>.<ext>` into one key/text table per language code and serves
//! lookups from the merged tables.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};
use walkdir::WalkDir;
use crate::utils::errors::{PolyglotError, Result};

/// File extensions recognised as locale files
pub const LOCALE_EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

/// Merged translations, keyed by language code
#[derive(Debug, Clone, Default)]
pub struct LocaleStore {
    locales: HashMap<String, HashMap<String, String>>,
}

/// Outcome of loading one language code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    pub code: String,
    /// Files merged into the table, in walk order
    pub merged: Vec<MergedFile>,
    /// Files that could not be read or parsed
    pub skipped: Vec<SkippedFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergedFile {
    pub path: PathBuf,
    pub keys: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkipKind {
    Read,
    Parse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub kind: SkipKind,
    pub reason: String,
}

impl MergeReport {
    fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
            merged: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// True when no file was skipped
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Translation statistics
#[derive(Debug, Clone)]
pub struct TranslationStats {
    pub languages: Vec<LanguageStats>,
}

/// Language-specific statistics
#[derive(Debug, Clone)]
pub struct LanguageStats {
    pub code: String,
    pub key_count: usize,
}

impl LocaleStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and merge every `<code>.<ext>` file under `root`
    ///
    /// The table for `code` is rebuilt from scratch and replaces any previous
    /// one only once the walk is complete. Unreadable or malformed files are
    /// skipped and listed in the report; an unreadable root is an error.
    pub fn load(&mut self, code: &str, root: impl AsRef<Path>) -> Result<MergeReport> {
        let root = root.as_ref();
        ensure_readable_root(root)?;

        let mut table = HashMap::new();
        let mut report = MergeReport::new(code);

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf());
                    warn!(code = code, path = %path.display(), error = %e, "Failed to walk locale entry");
                    report.skipped.push(SkippedFile {
                        path,
                        kind: SkipKind::Read,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            if entry.file_type().is_dir() || !is_locale_file_for(entry.file_name(), code) {
                continue;
            }

            match read_locale_file(entry.path()) {
                Ok(entries) => {
                    debug!(code = code, path = %entry.path().display(), keys = entries.len(), "Merged locale file");
                    report.merged.push(MergedFile {
                        path: entry.path().to_path_buf(),
                        keys: entries.len(),
                    });
                    table.extend(entries);
                }
                Err(e) => {
                    warn!(code = code, path = %entry.path().display(), error = %e, "Failed to load locale file");
                    let kind = match e {
                        PolyglotError::Io(_) => SkipKind::Read,
                        _ => SkipKind::Parse,
                    };
                    report.skipped.push(SkippedFile {
                        path: entry.path().to_path_buf(),
                        kind,
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            code = code,
            keys = table.len(),
            files = report.merged.len(),
            skipped = report.skipped.len(),
            "Loaded translations"
        );
        self.locales.insert(code.to_string(), table);

        Ok(report)
    }

    /// Load several language codes from the same root
    pub fn load_all<S: AsRef<str>>(&mut self, codes: &[S], root: impl AsRef<Path>) -> Result<Vec<MergeReport>> {
        let root = root.as_ref();
        codes
            .iter()
            .map(|code| self.load(code.as_ref(), root))
            .collect()
    }

    /// Replace the table for `code` with an in-memory one
    pub fn insert_table(&mut self, code: &str, table: HashMap<String, String>) {
        self.locales.insert(code.to_string(), table);
    }

    /// Get the text for `key` in `code`, `None` when either is absent
    pub fn get(&self, key: &str, code: &str) -> Option<&str> {
        self.locales.get(code)?.get(key).map(String::as_str)
    }

    /// Check if a language code has been loaded
    pub fn has_language(&self, code: &str) -> bool {
        self.locales.contains_key(code)
    }

    /// Loaded language codes, sorted
    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Number of keys loaded for `code`
    pub fn key_count(&self, code: &str) -> usize {
        self.locales.get(code).map_or(0, HashMap::len)
    }

    /// Get translation statistics
    pub fn stats(&self) -> TranslationStats {
        TranslationStats {
            languages: self
                .languages()
                .into_iter()
                .map(|code| LanguageStats {
                    code: code.to_string(),
                    key_count: self.key_count(code),
                })
                .collect(),
        }
    }
}

fn ensure_readable_root(root: &Path) -> Result<()> {
    std::fs::read_dir(root)
        .map(|_| ())
        .map_err(|e| PolyglotError::LocaleRootUnreadable {
            path: root.to_path_buf(),
            reason: e.to_string(),
        })
}

/// Whether `file_name` ends with `<code>.<ext>` for a locale extension
pub fn is_locale_file_for(file_name: &OsStr, code: &str) -> bool {
    let Some(name) = file_name.to_str() else {
        return false;
    };
    LOCALE_EXTENSIONS
        .iter()
        .any(|ext| name.ends_with(&format!("{}.{}", code, ext)))
}

/// Parse a JSON or YAML document by file extension
pub fn parse_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    let document: Value = match path.extension().and_then(OsStr::to_str) {
        Some("json") => serde_json::from_str(&content)?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
        _ => {
            return Err(PolyglotError::LocaleFile {
                path: path.to_path_buf(),
                reason: "unsupported localization file format".to_string(),
            })
        }
    };
    Ok(document)
}

/// Read one locale file into (key, text) pairs in document order
fn read_locale_file(path: &Path) -> Result<Vec<(String, String)>> {
    let Value::Object(map) = parse_document(path)? else {
        return Err(PolyglotError::LocaleFile {
            path: path.to_path_buf(),
            reason: "top level is not a mapping".to_string(),
        });
    };

    let mut entries = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value_to_text(value) {
            Some(text) => entries.push((key, text)),
            None => debug!(path = %path.display(), key = %key, "Skipping non-scalar translation value"),
        }
    }
    Ok(entries)
}

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
