//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::i18n::SupportedLanguage;
use crate::utils::errors::{PolyglotError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_i18n_config(&settings.i18n)?;
    validate_logging_config(&settings.logging)?;
    validate_audit_config(&settings.audit)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(PolyglotError::Config(
            "Bot token is required".to_string()
        ));
    }

    Ok(())
}

/// Validate internationalization configuration
pub fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.locale_dir.is_empty() {
        return Err(PolyglotError::Config(
            "Locale directory is required".to_string()
        ));
    }

    if config.default_language.is_empty() {
        return Err(PolyglotError::Config(
            "Default language is required".to_string()
        ));
    }

    if SupportedLanguage::from_code(&config.default_language).is_none() {
        return Err(PolyglotError::Config(
            format!("Default language {} is not a supported language code", config.default_language)
        ));
    }

    if config.supported_languages.is_empty() {
        return Err(PolyglotError::Config(
            "At least one supported language is required".to_string()
        ));
    }

    if !config.supported_languages.contains(&config.default_language) {
        return Err(PolyglotError::Config(
            "Default language must be in supported languages list".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(PolyglotError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(PolyglotError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

/// Validate locale audit configuration
pub fn validate_audit_config(config: &super::AuditConfig) -> Result<()> {
    if config.reference_locale.is_empty() {
        return Err(PolyglotError::Config(
            "Reference locale is required".to_string()
        ));
    }

    let ratios = std::iter::once(("default_threshold", config.default_threshold))
        .chain(std::iter::once(("ignore_below", config.ignore_below)))
        .chain(config.similarity_thresholds.values().map(|v| ("similarity_thresholds", *v)))
        .chain(config.accept_above.values().map(|v| ("accept_above", *v)));
    for (name, value) in ratios {
        if !(0.0..=1.0).contains(&value) {
            return Err(PolyglotError::Config(
                format!("{} must be within 0.0..=1.0, got {}", name, value)
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.bot.token = "12345:test_token".to_string();
        settings
    }

    #[test]
    fn test_valid_settings_pass() {
        assert!(validate_settings(&valid_settings()).is_ok());
    }

    #[test]
    fn test_missing_token_rejected() {
        let settings = Settings::default();
        assert_matches!(validate_settings(&settings), Err(PolyglotError::Config(_)));
    }

    #[test]
    fn test_unknown_default_language_rejected() {
        let mut settings = valid_settings();
        settings.i18n.default_language = "xx".to_string();
        settings.i18n.supported_languages.push("xx".to_string());
        assert_matches!(validate_settings(&settings), Err(PolyglotError::Config(_)));
    }

    #[test]
    fn test_default_language_must_be_loaded() {
        let mut settings = valid_settings();
        settings.i18n.supported_languages = vec!["en".to_string()];
        assert_matches!(validate_settings(&settings), Err(PolyglotError::Config(_)));
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut settings = valid_settings();
        settings.logging.level = "loud".to_string();
        assert_matches!(validate_settings(&settings), Err(PolyglotError::Config(_)));
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let mut settings = valid_settings();
        settings.audit.similarity_thresholds.insert("en".to_string(), 1.5);
        assert_matches!(validate_settings(&settings), Err(PolyglotError::Config(_)));
    }

    #[test]
    fn test_out_of_range_accept_above_rejected() {
        let mut settings = valid_settings();
        settings.audit.accept_above.insert("uk".to_string(), -0.1);
        assert_matches!(validate_settings(&settings), Err(PolyglotError::Config(_)));
    }
}
