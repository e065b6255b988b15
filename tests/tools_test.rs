//! Integration tests for the locale maintenance tools

mod fixtures;
mod helpers;

use std::path::Path;
use assert_matches::assert_matches;
use serde_json::{json, Value};
use polyglot::config::AuditConfig;
use polyglot::tools::{
    self, FileOutcome, FolderAudit, FolderReport, KeyDiff, SimilarityFindings, SyncPreference,
};
use helpers::{sample_tree, LocaleTree};

fn report_for<'a, T>(reports: &'a [FolderReport<T>], folder: &str) -> &'a FolderAudit<T> {
    &reports
        .iter()
        .find(|r| r.folder == Path::new(folder))
        .unwrap_or_else(|| panic!("no report for {}", folder))
        .audit
}

fn checked<'a, T>(audit: &'a FolderAudit<T>, lang: &str) -> &'a T {
    let FolderAudit::Checked(languages) = audit else {
        panic!("folder was not checked");
    };
    let language = languages.iter().find(|l| l.lang == lang).expect("language not audited");
    match &language.outcome {
        FileOutcome::Checked(result) => result,
        _ => panic!("file was not checked"),
    }
}

#[test]
fn test_discovery_groups_by_folder() {
    let tree = sample_tree().file("notes.txt", "ignored");
    let groups = tools::find_locale_files(tree.root()).unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].folder, Path::new("common"));
    assert_eq!(groups[0].files.keys().collect::<Vec<_>>(), vec!["en", "ru", "uk"]);
    assert_eq!(groups[1].folder, Path::new("groups"));
}

#[test]
fn test_key_audit_reports_missing_and_extra() {
    let tree = sample_tree().file("groups/en.yml", "only_in_groups: x\nstray: y\n");
    let reports = tools::audit_keys(tree.root(), "ru").unwrap();

    assert_eq!(checked(report_for(&reports, "common"), "en"), &KeyDiff::default());

    let groups = report_for(&reports, "groups");
    assert_eq!(
        checked(groups, "en"),
        &KeyDiff {
            missing: vec!["current_group_language".to_string()],
            extra: vec!["stray".to_string()],
        }
    );
    assert_eq!(checked(groups, "uk").missing, vec!["current_group_language"]);

    let rendered = tools::render_key_report(&reports, "ru");
    assert!(rendered.contains("📁 Checking keys: common"));
    assert!(rendered.contains("Missing keys: [\"current_group_language\"]"));
    assert!(rendered.contains("Extra keys: [\"stray\"]"));
}

#[test]
fn test_audit_folder_without_reference_is_skipped() {
    let tree = LocaleTree::new().file("orphan/en.json", r#"{"a": "b"}"#);
    let reports = tools::audit_keys(tree.root(), "ru").unwrap();

    assert_eq!(reports.len(), 1);
    assert_matches!(report_for(&reports, "orphan"), FolderAudit::MissingReference);
    assert!(tools::render_key_report(&reports, "ru").contains("Skipped folder orphan (no ru file)"));
}

#[test]
fn test_audit_invalid_files() {
    let tree = LocaleTree::new()
        .file("bad_ref/ru.yaml", "- not\n- a mapping\n")
        .file("bad_ref/en.json", "{}")
        .file("bad_target/ru.json", r#"{"a": "б"}"#)
        .file("bad_target/en.json", "[1, 2]")
        .file("bad_target/uk.json", "{ broken");
    let reports = tools::audit_keys(tree.root(), "ru").unwrap();

    assert_matches!(report_for(&reports, "bad_ref"), FolderAudit::InvalidReference { .. });

    let FolderAudit::Checked(languages) = report_for(&reports, "bad_target") else {
        panic!("folder was not checked");
    };
    assert_matches!(languages[0].outcome, FileOutcome::NotAMapping);
    assert_matches!(languages[1].outcome, FileOutcome::Unreadable(_));
}

#[test]
fn test_similarity_audit_flags_untranslated_text() {
    let tree = LocaleTree::new()
        .file(
            "items/ru.json",
            r#"{"title": "Меч героя", "damage": "Урон 10%", "ok": "OK", "desc": "Древний клинок"}"#,
        )
        .file(
            "items/en.json",
            r#"{"title": "Hero sword", "damage": "Урон 15%", "ok": "OK", "desc": "Ancient blade"}"#,
        )
        .file(
            "items/uk.json",
            r#"{"title": "Меч героя", "damage": "Шкода 10%", "ok": "OK", "desc": "Стародавній клинок"}"#,
        );
    let reports = tools::audit_similarity(tree.root(), &AuditConfig::default()).unwrap();
    let items = report_for(&reports, "items");

    let en: &SimilarityFindings = checked(items, "en");
    assert_eq!(en.identical.iter().map(|i| i.key.as_str()).collect::<Vec<_>>(), vec!["ok"]);
    assert_eq!(en.suspicious.len(), 1);
    assert_eq!(en.suspicious[0].key, "damage");
    assert!(en.suspicious[0].numbers_differ);

    // Identical text is accepted for Ukrainian by default
    let uk: &SimilarityFindings = checked(items, "uk");
    assert!(uk.identical.is_empty());

    let rendered = tools::render_similarity_report(&reports, "ru");
    assert!(rendered.contains("Suspiciously identical translations (1)"));
    assert!(rendered.contains("🔸 ok = 'OK'"));
    assert!(rendered.contains("numbers differ"));
}

#[test]
fn test_conversion_keeps_order_and_unicode() {
    let tree = LocaleTree::new().file("ru.json", r#"{"zeta": "Последний", "alpha": "Первый"}"#);
    let json_path = tree.root().join("ru.json");
    let yaml_path = tree.root().join("ru.yaml");

    tools::json_to_yaml(&json_path, &yaml_path).unwrap();
    let yaml = tree.read("ru.yaml");
    assert!(yaml.find("zeta").unwrap() < yaml.find("alpha").unwrap());
    assert!(yaml.contains("Последний"));

    let back_path = tree.root().join("back.json");
    tools::yaml_to_json(&yaml_path, &back_path).unwrap();
    let json = tree.read("back.json");
    assert!(json.contains("\"zeta\": \"Последний\""));
    assert!(json.find("zeta").unwrap() < json.find("alpha").unwrap());
}

#[test]
fn test_sync_prefers_chosen_side() {
    let tree = LocaleTree::new()
        .file("ru.json", r#"{"shared": "из json", "json_only": "j"}"#)
        .file("ru.yaml", "shared: из yaml\nyaml_only: y\n");
    let json_path = tree.root().join("ru.json");
    let yaml_path = tree.root().join("ru.yaml");

    let merged = tools::sync_pair(&json_path, &yaml_path, SyncPreference::Yaml).unwrap();
    assert_eq!(merged.get("shared"), Some(&json!("из yaml")));
    assert_eq!(merged.len(), 3);

    let written: Value = serde_json::from_str(&tree.read("ru.json")).unwrap();
    assert_eq!(written["shared"], "из yaml");
    assert_eq!(written["json_only"], "j");

    let merged = tools::sync_pair(&json_path, &yaml_path, SyncPreference::Json).unwrap();
    assert_eq!(merged.get("shared"), Some(&json!("из yaml")));
}

#[test]
fn test_audit_reports_serialize() {
    let reports = tools::audit_keys(sample_tree().root(), "ru").unwrap();
    let value = serde_json::to_value(&reports).unwrap();
    assert!(value.is_array());
    assert_eq!(value.as_array().unwrap().len(), 2);
}
