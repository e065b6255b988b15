//! Polyglot
//!
//! Localization layer for a Telegram bot: locale files are merged into
//! per-language tables, every chat and user can pick a language, and strings
//! resolve in the language of whoever they are addressed to. The `tools`
//! module holds the locale-file maintenance utilities behind `locale-tool`.

pub mod config;
pub mod handlers;
pub mod i18n;
pub mod middleware;
pub mod tools;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{PolyglotError, Result};

// Re-export main components for easy access
pub use i18n::{InMemoryPreferenceStore, LocaleStore, LocalizedString, PreferenceStore, Resolver, SupportedLanguage};
pub use middleware::AuthMiddleware;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
