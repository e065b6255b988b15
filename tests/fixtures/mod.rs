//! Locale fixtures for integration tests
//!
//! Small locale documents in the shapes the bot ships: a shared `ru` table
//! with its `en` and `uk` translations, split across a couple of folders.

/// Common strings, Russian reference
pub const COMMON_RU: &str = r#"{
  "greeting": "Привет, {name}!",
  "only_admin": "Только администраторы могут это сделать",
  "current_user_language": "Ваш язык: {lang}",
  "language_set": "Язык установлен: {lang}"
}"#;

/// Common strings, English
pub const COMMON_EN: &str = r#"{
  "greeting": "Hello, {name}!",
  "only_admin": "Only admins can do this",
  "current_user_language": "Your language: {lang}",
  "language_set": "Language set: {lang}"
}"#;

/// Common strings, Ukrainian (YAML)
pub const COMMON_UK: &str = "greeting: \"Привіт, {name}!\"\nonly_admin: Лише адміністратори можуть це зробити\ncurrent_user_language: \"Ваша мова: {lang}\"\nlanguage_set: \"Мову встановлено: {lang}\"\n";

/// Group strings, Russian reference
pub const GROUPS_RU: &str = "only_in_groups: Команда работает только в группах\ncurrent_group_language: \"Язык группы: {lang}\"\n";

/// Group strings, English
pub const GROUPS_EN: &str = "only_in_groups: This command only works in groups\ncurrent_group_language: \"Group language: {lang}\"\n";

/// Group strings, Ukrainian
pub const GROUPS_UK: &str = r#"{"only_in_groups": "Команда працює лише в групах"}"#;
