//! Test helpers module
//!
//! Builds throwaway locale trees on disk and resolvers on top of them.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use polyglot::i18n::{InMemoryPreferenceStore, LocaleStore, Resolver, SupportedLanguage};

/// A temporary locale tree, removed when dropped
pub struct LocaleTree {
    dir: TempDir,
}

impl LocaleTree {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` to `relative`, creating parent folders
    pub fn file(self, relative: &str, content: &str) -> Self {
        self.write(relative, content);
        self
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create locale folder");
        }
        std::fs::write(&path, content).expect("Failed to write locale file");
        path
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(relative)).expect("Failed to read locale file")
    }

    /// Load ru, en and uk from this tree
    pub fn load(&self) -> LocaleStore {
        let mut store = LocaleStore::new();
        store
            .load_all(&["ru", "en", "uk"], self.root())
            .expect("Failed to load locale tree");
        store
    }

    /// Resolver over this tree with an empty preference store
    pub fn resolver(&self) -> Resolver {
        Resolver::new(
            self.load(),
            Arc::new(InMemoryPreferenceStore::new()),
            SupportedLanguage::Russian,
        )
    }
}

/// The fixture tree: `common/` in JSON and YAML plus `groups/`
pub fn sample_tree() -> LocaleTree {
    use crate::fixtures::*;

    LocaleTree::new()
        .file("common/ru.json", COMMON_RU)
        .file("common/en.json", COMMON_EN)
        .file("common/uk.yaml", COMMON_UK)
        .file("groups/ru.yaml", GROUPS_RU)
        .file("groups/en.yml", GROUPS_EN)
        .file("groups/uk.json", GROUPS_UK)
}
