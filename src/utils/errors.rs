//! Error handling for Polyglot
//!
//! This module defines the main error type used throughout the library
//! and provides a unified error handling strategy.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Polyglot
#[derive(Error, Debug)]
pub enum PolyglotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Locale root {path} is unreadable: {reason}")]
    LocaleRootUnreadable { path: PathBuf, reason: String },

    #[error("Locale file {path}: {reason}")]
    LocaleFile { path: PathBuf, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for Polyglot operations
pub type Result<T> = std::result::Result<T, PolyglotError>;

impl PolyglotError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            PolyglotError::Config(_) => false,
            PolyglotError::ConfigLoad(_) => false,
            PolyglotError::Telegram(_) => true,
            PolyglotError::LocaleRootUnreadable { .. } => false,
            PolyglotError::LocaleFile { .. } => true,
            PolyglotError::Json(_) => true,
            PolyglotError::Yaml(_) => true,
            PolyglotError::Io(_) => true,
            PolyglotError::PermissionDenied(_) => false,
            PolyglotError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PolyglotError::Config(_) => ErrorSeverity::Critical,
            PolyglotError::ConfigLoad(_) => ErrorSeverity::Critical,
            PolyglotError::LocaleRootUnreadable { .. } => ErrorSeverity::Critical,
            PolyglotError::LocaleFile { .. } => ErrorSeverity::Warning,
            PolyglotError::PermissionDenied(_) => ErrorSeverity::Warning,
            PolyglotError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_root_error_is_fatal() {
        let err = PolyglotError::LocaleRootUnreadable {
            path: PathBuf::from("/missing"),
            reason: "not found".to_string(),
        };
        assert!(!err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.to_string(), "Locale root /missing is unreadable: not found");
    }

    #[test]
    fn test_locale_file_error_is_recoverable() {
        let err = PolyglotError::LocaleFile {
            path: PathBuf::from("menu/ru.json"),
            reason: "top level is not a mapping".to_string(),
        };
        assert!(err.is_recoverable());
        assert_eq!(err.severity().to_string(), "WARN");
    }
}
