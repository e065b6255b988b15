//! Locale file maintenance tools
//!
//! Offline helpers behind the `locale-tool` binary: JSON/YAML conversion,
//! pair synchronisation and the key and similarity audits. The audits share
//! one discovery step that groups locale files by folder and language.

pub mod convert;
pub mod key_audit;
pub mod similarity;
pub mod sync;

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};
use walkdir::WalkDir;
use crate::i18n::loader::{parse_document, LOCALE_EXTENSIONS};
use crate::utils::errors::{PolyglotError, Result};

pub use convert::{json_to_yaml, yaml_to_json};
pub use key_audit::{audit_keys, render_key_report, KeyDiff};
pub use similarity::{audit_similarity, render_similarity_report, IdenticalTranslation, SimilarityFindings, SuspectTranslation};
pub use sync::{sync_pair, SyncPreference};

/// Locale files of one folder, keyed by language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleGroup {
    /// Folder path relative to the audited root
    pub folder: PathBuf,
    pub files: BTreeMap<String, PathBuf>,
}

/// Result of auditing one folder
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FolderReport<T> {
    pub folder: PathBuf,
    pub audit: FolderAudit<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FolderAudit<T> {
    /// No file for the reference language in this folder
    MissingReference,
    /// The reference file could not be used
    InvalidReference { path: PathBuf, reason: String },
    Checked(Vec<LanguageAudit<T>>),
}

/// Result of auditing one non-reference language file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageAudit<T> {
    pub lang: String,
    pub path: PathBuf,
    pub outcome: FileOutcome<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FileOutcome<T> {
    Unreadable(String),
    NotAMapping,
    Checked(T),
}

/// Group locale files under `root` by folder
///
/// A file's language is the part of its name before the first `.`; when a
/// folder holds several files for one language the last one in name order
/// is used.
pub fn find_locale_files(root: &Path) -> Result<Vec<LocaleGroup>> {
    std::fs::read_dir(root).map_err(|e| PolyglotError::LocaleRootUnreadable {
        path: root.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut groups: BTreeMap<PathBuf, BTreeMap<String, PathBuf>> = BTreeMap::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "Skipping unreadable entry during discovery");
                continue;
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        let supported = path
            .extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| LOCALE_EXTENSIONS.contains(&ext));
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if !supported {
            continue;
        }

        let lang = name.split('.').next().unwrap_or_default().to_string();
        let folder = path
            .parent()
            .and_then(|parent| parent.strip_prefix(root).ok())
            .map(Path::to_path_buf)
            .unwrap_or_default();
        groups.entry(folder).or_default().insert(lang, path.to_path_buf());
    }

    debug!(folders = groups.len(), "Discovered locale folders");
    Ok(groups
        .into_iter()
        .map(|(folder, files)| LocaleGroup { folder, files })
        .collect())
}

/// Read a locale document, `None` when its top level is not a mapping
pub fn read_mapping(path: &Path) -> Result<Option<Map<String, Value>>> {
    match parse_document(path)? {
        Value::Object(map) => Ok(Some(map)),
        _ => Ok(None),
    }
}

/// Trimmed display text of a locale value
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}

/// Truncate to `max_chars` characters, marking the cut with `…`
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}

/// Display form of a folder relative to the audited root
pub fn folder_label(folder: &Path) -> String {
    if folder.as_os_str().is_empty() {
        "/".to_string()
    } else {
        folder.display().to_string()
    }
}

/// Run `check` for every non-reference file against its folder's reference file
pub fn audit_tree<T>(
    root: &Path,
    reference: &str,
    mut check: impl FnMut(&str, &Map<String, Value>, &Map<String, Value>) -> T,
) -> Result<Vec<FolderReport<T>>> {
    let mut reports = Vec::new();

    for group in find_locale_files(root)? {
        let Some(reference_path) = group.files.get(reference) else {
            warn!(folder = %group.folder.display(), reference = reference, "Folder has no reference locale file");
            reports.push(FolderReport {
                folder: group.folder,
                audit: FolderAudit::MissingReference,
            });
            continue;
        };

        let reference_data = match read_mapping(reference_path) {
            Ok(Some(map)) => map,
            Ok(None) => {
                reports.push(FolderReport {
                    folder: group.folder.clone(),
                    audit: FolderAudit::InvalidReference {
                        path: reference_path.clone(),
                        reason: "does not contain a mapping".to_string(),
                    },
                });
                continue;
            }
            Err(e) => {
                reports.push(FolderReport {
                    folder: group.folder.clone(),
                    audit: FolderAudit::InvalidReference {
                        path: reference_path.clone(),
                        reason: e.to_string(),
                    },
                });
                continue;
            }
        };

        let mut languages = Vec::new();
        for (lang, path) in &group.files {
            if lang == reference {
                continue;
            }
            let outcome = match read_mapping(path) {
                Ok(Some(data)) => FileOutcome::Checked(check(lang, &reference_data, &data)),
                Ok(None) => FileOutcome::NotAMapping,
                Err(e) => FileOutcome::Unreadable(e.to_string()),
            };
            languages.push(LanguageAudit {
                lang: lang.clone(),
                path: path.clone(),
                outcome,
            });
        }

        reports.push(FolderReport {
            folder: group.folder,
            audit: FolderAudit::Checked(languages),
        });
    }

    Ok(reports)
}

/// File name of a locale path for report headings
pub(crate) fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
