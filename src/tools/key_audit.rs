//! Key-diff audit
//!
//! Compares the key set of every locale file with the reference language file
//! in the same folder.

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::path::Path;
use serde::Serialize;
use serde_json::{Map, Value};
use crate::utils::errors::Result;
use super::{audit_tree, file_label, folder_label, FileOutcome, FolderAudit, FolderReport};

/// Keys missing from, or extra in, a translation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeyDiff {
    pub missing: Vec<String>,
    pub extra: Vec<String>,
}

impl KeyDiff {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

/// Sorted key differences between a reference mapping and a translation
pub fn compare_keys(reference: &Map<String, Value>, target: &Map<String, Value>) -> KeyDiff {
    let reference: BTreeSet<&String> = reference.keys().collect();
    let target: BTreeSet<&String> = target.keys().collect();

    KeyDiff {
        missing: reference.difference(&target).map(|k| k.to_string()).collect(),
        extra: target.difference(&reference).map(|k| k.to_string()).collect(),
    }
}

/// Audit every folder under `root` against `reference`
pub fn audit_keys(root: &Path, reference: &str) -> Result<Vec<FolderReport<KeyDiff>>> {
    audit_tree(root, reference, |_, reference_data, data| compare_keys(reference_data, data))
}

/// Human-readable key audit report
pub fn render_key_report(reports: &[FolderReport<KeyDiff>], reference: &str) -> String {
    let mut out = String::new();

    for report in reports {
        let folder = folder_label(&report.folder);
        match &report.audit {
            FolderAudit::MissingReference => {
                let _ = writeln!(out, "\n⚠️ Skipped folder {} (no {} file)", folder, reference);
            }
            FolderAudit::InvalidReference { path, reason } => {
                let _ = writeln!(out, "\n❌ Reference file {} is unusable: {}", path.display(), reason);
            }
            FolderAudit::Checked(languages) => {
                let _ = writeln!(out, "\n📁 Checking keys: {}", folder);
                for language in languages {
                    let _ = writeln!(out, " 🔸 {}:", file_label(&language.path));
                    match &language.outcome {
                        FileOutcome::Unreadable(reason) => {
                            let _ = writeln!(out, "   ❌ Failed to read: {}", reason);
                        }
                        FileOutcome::NotAMapping => {
                            let _ = writeln!(out, "   ❌ File does not contain a mapping");
                        }
                        FileOutcome::Checked(diff) if diff.is_clean() => {
                            let _ = writeln!(out, "   ✅ Keys match");
                        }
                        FileOutcome::Checked(diff) => {
                            if !diff.missing.is_empty() {
                                let _ = writeln!(out, "   ❗ Missing keys: {:?}", diff.missing);
                            }
                            if !diff.extra.is_empty() {
                                let _ = writeln!(out, "   ⚠️ Extra keys: {:?}", diff.extra);
                            }
                        }
                    }
                }
            }
        }
    }

    out
}
