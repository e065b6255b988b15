//! Supported languages
//!
//! The closed set of languages the bot offers. Each language has an internal
//! key (stored in preferences and carried in callback data), a two-letter
//! lookup code (locale file suffix) and a decorated display label.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SupportedLanguage {
    #[default]
    Russian,
    English,
    Ukrainian,
}

impl SupportedLanguage {
    /// All languages in keyboard order
    pub const ALL: [SupportedLanguage; 3] = [
        SupportedLanguage::Russian,
        SupportedLanguage::English,
        SupportedLanguage::Ukrainian,
    ];

    /// Internal preference key
    pub fn key(self) -> &'static str {
        match self {
            SupportedLanguage::Russian => "русский",
            SupportedLanguage::English => "английский",
            SupportedLanguage::Ukrainian => "украинский",
        }
    }

    /// Two-letter lookup code
    pub fn code(self) -> &'static str {
        match self {
            SupportedLanguage::Russian => "ru",
            SupportedLanguage::English => "en",
            SupportedLanguage::Ukrainian => "uk",
        }
    }

    /// Display label with flag
    pub fn label(self) -> &'static str {
        match self {
            SupportedLanguage::Russian => "🇷🇺Русский",
            SupportedLanguage::English => "🇬🇧English",
            SupportedLanguage::Ukrainian => "🇺🇦Українська",
        }
    }

    /// Look up a language by its internal key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.key() == key)
    }

    /// Look up a language by its lookup code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

/// Decorated label for a language key, falling back to `default`'s label
pub fn display_name(language_key: &str, default: SupportedLanguage) -> &'static str {
    SupportedLanguage::from_key(language_key)
        .unwrap_or(default)
        .label()
}
