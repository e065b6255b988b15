//! Translation similarity audit
//!
//! Flags translations that are identical to the reference text, or similar
//! enough to look like an outdated copy of it. Pairs that are very different
//! are genuine translations and are ignored.
//!
//! The ratio is `2·M / (len_a + len_b)` with `M` taken from a Myers diff over
//! characters. It has no junk heuristic, so on strings of 200 characters or
//! more it can score well above a `SequenceMatcher`-style ratio for the same
//! pair; long texts near `ignore_below` may be flagged where such a tool
//! would ignore them.

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::path::Path;
use std::sync::OnceLock;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};
use similar::TextDiff;
use crate::config::AuditConfig;
use crate::utils::errors::Result;
use super::{audit_tree, file_label, folder_label, truncate_chars, value_text, FileOutcome, FolderAudit, FolderReport};

const PREVIEW_CHARS: usize = 80;

/// Findings for one translation file
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SimilarityFindings {
    /// Translations whose text equals the reference text, sorted by key
    pub identical: Vec<IdenticalTranslation>,
    /// Suspiciously similar translations, sorted by key
    pub suspicious: Vec<SuspectTranslation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdenticalTranslation {
    pub key: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuspectTranslation {
    pub key: String,
    pub similarity: f64,
    pub reference: String,
    pub value: String,
    pub numbers_differ: bool,
}

impl SimilarityFindings {
    pub fn is_clean(&self) -> bool {
        self.identical.is_empty() && self.suspicious.is_empty()
    }
}

/// Character-level matching ratio, `2·M / (len_a + len_b)`
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    f64::from(TextDiff::from_chars(a, b).ratio())
}

fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+(?:\.\d+)?%?").expect("number pattern is valid"))
}

/// Numbers (with optional fraction and percent sign) in order of appearance
pub fn extract_numbers(text: &str) -> Vec<&str> {
    number_pattern().find_iter(text).map(|m| m.as_str()).collect()
}

/// Compare the common keys of a translation with the reference mapping
pub fn compare_translations(
    lang: &str,
    reference: &Map<String, Value>,
    target: &Map<String, Value>,
    config: &AuditConfig,
) -> SimilarityFindings {
    let mut findings = SimilarityFindings::default();

    let keys: BTreeSet<&String> = reference.keys().filter(|k| target.contains_key(*k)).collect();
    for key in keys {
        let reference_text = value_text(&reference[key.as_str()]);
        let target_text = value_text(&target[key.as_str()]);

        if reference_text == target_text {
            if !config.allows_identical(lang) {
                findings.identical.push(IdenticalTranslation {
                    key: key.clone(),
                    text: reference_text,
                });
            }
            continue;
        }

        let similarity = similarity_ratio(&reference_text, &target_text);
        if similarity < config.ignore_below {
            continue;
        }

        let reference_numbers = extract_numbers(&reference_text);
        let target_numbers = extract_numbers(&target_text);
        let numbers_differ = !reference_numbers.is_empty()
            && !target_numbers.is_empty()
            && reference_numbers != target_numbers;

        if !numbers_differ && config.accepts(lang, similarity) {
            continue;
        }

        findings.suspicious.push(SuspectTranslation {
            key: key.clone(),
            similarity,
            reference: reference_text,
            value: target_text,
            numbers_differ,
        });
    }

    findings
}

/// Audit every folder under `root` against `config.reference_locale`
pub fn audit_similarity(root: &Path, config: &AuditConfig) -> Result<Vec<FolderReport<SimilarityFindings>>> {
    audit_tree(root, &config.reference_locale, |lang, reference, data| {
        compare_translations(lang, reference, data, config)
    })
}

/// Human-readable similarity audit report
pub fn render_similarity_report(reports: &[FolderReport<SimilarityFindings>], reference: &str) -> String {
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
                let _ = writeln!(out, "\n📁 Checking text: {}", folder);
                for language in languages {
                    let _ = writeln!(out, " 🔸 {}:", file_label(&language.path));
                    match &language.outcome {
                        FileOutcome::Unreadable(reason) => {
                            let _ = writeln!(out, "   ❌ Failed to read: {}", reason);
                        }
                        FileOutcome::NotAMapping => {
                            let _ = writeln!(out, "   ❌ File does not contain a mapping");
                        }
                        FileOutcome::Checked(findings) if findings.is_clean() => {
                            let _ = writeln!(out, "   ✅ All good: translations differ as they should");
                        }
                        FileOutcome::Checked(findings) => {
                            render_findings(&mut out, &language.lang, reference, findings);
                        }
                    }
                }
            }
        }
    }

    out
}

fn render_findings(out: &mut String, lang: &str, reference: &str, findings: &SimilarityFindings) {
    if !findings.identical.is_empty() {
        let _ = writeln!(out, "   ⚠️ Suspiciously identical translations ({}):", findings.identical.len());
        for identical in &findings.identical {
            let _ = writeln!(
                out,
                "     🔸 {} = '{}'",
                identical.key,
                truncate_chars(&identical.text, PREVIEW_CHARS)
            );
        }
    }

    for suspect in &findings.suspicious {
        let _ = writeln!(out, "\n     🔸 {}", suspect.key);
        let _ = writeln!(out, "        {}: {}", reference, truncate_chars(&suspect.reference, PREVIEW_CHARS));
        let marker = if suspect.numbers_differ { ", numbers differ" } else { "" };
        let _ = writeln!(out, "   🟣 {} (similarity {:.1}%{})", lang, suspect.similarity * 100.0, marker);
        let _ = writeln!(out, "        ▪️ {}: {}", lang, truncate_chars(&suspect.value, PREVIEW_CHARS));
    }
}
