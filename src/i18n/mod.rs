//! Internationalization module
//!
//! This module handles multi-language support for the bot: locale file
//! loading, deferred formatting, per-chat and per-user language preferences
//! and target-aware string resolution.

pub mod language;
pub mod loader;
pub mod localized;
pub mod preferences;
pub mod resolver;

// Re-export commonly used i18n components
pub use language::{display_name, SupportedLanguage};
pub use loader::{LanguageStats, LocaleStore, MergeReport, MergedFile, SkipKind, SkippedFile, TranslationStats};
pub use localized::{FormatArgs, LocalizedString};
pub use preferences::{effective_language, InMemoryPreferenceStore, PreferenceStore};
pub use resolver::Resolver;
