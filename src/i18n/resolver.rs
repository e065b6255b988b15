//! Target-aware string resolution
//!
//! The resolver ties the locale tables to the preference store: it picks the
//! lookup code for a chat or user (unless one is forced) and localizes the
//! requested key into it. Nothing is cached; every call re-resolves.

use std::sync::Arc;
use parking_lot::RwLock;
use tracing::debug;
use crate::config::I18nConfig;
use crate::utils::errors::{PolyglotError, Result};
use super::language::{self, SupportedLanguage};
use super::loader::{LocaleStore, MergeReport};
use super::localized::LocalizedString;
use super::preferences::{self, PreferenceStore};

pub struct Resolver {
    locales: RwLock<LocaleStore>,
    preferences: Arc<dyn PreferenceStore>,
    default_language: SupportedLanguage,
}

impl Resolver {
    pub fn new(
        locales: LocaleStore,
        preferences: Arc<dyn PreferenceStore>,
        default_language: SupportedLanguage,
    ) -> Self {
        Self {
            locales: RwLock::new(locales),
            preferences,
            default_language,
        }
    }

    /// Load every configured language from the locale root
    ///
    /// The merge reports are returned so callers can surface skipped files.
    pub fn from_config(
        config: &I18nConfig,
        preferences: Arc<dyn PreferenceStore>,
    ) -> Result<(Self, Vec<MergeReport>)> {
        let default_language = SupportedLanguage::from_code(&config.default_language).ok_or_else(|| {
            PolyglotError::Config(format!("Unsupported default language: {}", config.default_language))
        })?;

        let mut locales = LocaleStore::new();
        let reports = locales.load_all(&config.supported_languages, &config.locale_dir)?;

        Ok((Self::new(locales, preferences, default_language), reports))
    }

    pub fn default_language(&self) -> SupportedLanguage {
        self.default_language
    }

    pub fn preferences(&self) -> &Arc<dyn PreferenceStore> {
        &self.preferences
    }

    /// Stored language key for a target, or the default language's key
    pub fn current_language_key(&self, target_id: i64) -> String {
        preferences::effective_language(
            self.preferences.as_ref(),
            target_id,
            self.default_language.key(),
        )
    }

    /// Effective language for a target; unknown stored keys map to the default
    pub fn language_for(&self, target_id: i64) -> SupportedLanguage {
        let key = self.current_language_key(target_id);
        SupportedLanguage::from_key(&key).unwrap_or_else(|| {
            debug!(target_id = target_id, language_key = %key, "Unrecognized language key, using default");
            self.default_language
        })
    }

    /// Lookup code for a target
    pub fn language_code_for(&self, target_id: i64) -> &'static str {
        self.language_for(target_id).code()
    }

    /// Resolve `key` for `target_id`
    ///
    /// `force_language_code` bypasses the preference store entirely; an empty
    /// code counts as not given.
    pub fn resolve(&self, target_id: i64, key: &str, force_language_code: Option<&str>) -> String {
        self.resolve_string(target_id, &LocalizedString::new(key), force_language_code)
    }

    /// Resolve a string with queued formatting for `target_id`
    pub fn resolve_string(
        &self,
        target_id: i64,
        string: &LocalizedString,
        force_language_code: Option<&str>,
    ) -> String {
        let code = match force_language_code.filter(|code| !code.is_empty()) {
            Some(code) => code,
            None => self.language_code_for(target_id),
        };
        string.localize(&self.locales.read(), code)
    }

    /// Decorated label for a language key
    pub fn display_name(&self, language_key: &str) -> &'static str {
        language::display_name(language_key, self.default_language)
    }

    pub fn set_chat_language(&self, chat_id: i64, language_key: &str) {
        self.preferences.set_chat_language(chat_id, language_key);
    }

    pub fn set_user_language(&self, user_id: i64, language_key: &str) {
        self.preferences.set_user_language(user_id, language_key);
    }

    /// Swap in a freshly loaded locale store
    pub fn reload(&self, locales: LocaleStore) {
        *self.locales.write() = locales;
    }

    /// Run `f` against the current locale store
    pub fn with_locales<R>(&self, f: impl FnOnce(&LocaleStore) -> R) -> R {
        f(&self.locales.read())
    }
}
