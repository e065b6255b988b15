//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub bot: BotConfig,
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
    pub audit: AuditConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct BotConfig {
    pub token: String,
    /// Users treated as chat admins everywhere
    pub admin_ids: Vec<i64>,
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Root of the locale tree, walked recursively
    pub locale_dir: String,
    /// Lookup code of the fallback language
    pub default_language: String,
    /// Lookup codes loaded at start-up
    pub supported_languages: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the daily rolling log file; stdout only when unset
    pub directory: Option<String>,
}

/// Locale audit configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuditConfig {
    pub reference_locale: String,
    /// Languages for which identical text is an accepted translation
    pub allow_identical: HashMap<String, bool>,
    /// Per-language similarity above which a translation is considered fine
    pub similarity_thresholds: HashMap<String, f64>,
    pub default_threshold: f64,
    /// Per-language similarity above which a translation is accepted even
    /// when it does not clear its threshold
    pub accept_above: HashMap<String, f64>,
    /// Pairs less similar than this are treated as genuine translations
    pub ignore_below: f64,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::from_file("config")
    }

    /// Load settings from the named configuration file (extension optional)
    pub fn from_file(name: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(name).required(false))
            .add_source(config::Environment::with_prefix("POLYGLOT").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::PolyglotError> {
        super::validation::validate_settings(self)
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locale_dir: "Localization".to_string(),
            default_language: "ru".to_string(),
            supported_languages: vec!["ru".to_string(), "en".to_string(), "uk".to_string()],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            reference_locale: "ru".to_string(),
            allow_identical: HashMap::from([("uk".to_string(), true)]),
            similarity_thresholds: HashMap::from([("uk".to_string(), 0.98)]),
            default_threshold: 0.9,
            accept_above: HashMap::from([("uk".to_string(), 0.9)]),
            ignore_below: 0.85,
        }
    }
}

impl AuditConfig {
    /// Whether identical reference and target text is acceptable for `lang`
    pub fn allows_identical(&self, lang: &str) -> bool {
        self.allow_identical.get(lang).copied().unwrap_or(false)
    }

    /// Similarity threshold for `lang`
    pub fn threshold_for(&self, lang: &str) -> f64 {
        self.similarity_thresholds
            .get(lang)
            .copied()
            .unwrap_or(self.default_threshold)
    }

    /// Whether a pair with `similarity` counts as a fine translation for `lang`
    pub fn accepts(&self, lang: &str, similarity: f64) -> bool {
        similarity > self.threshold_for(lang)
            || self.accept_above.get(lang).is_some_and(|floor| similarity > *floor)
    }
}
