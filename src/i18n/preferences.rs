//! Language preference storage
//!
//! Chat-scoped and user-scoped language choices, keyed by the platform's
//! signed identifiers: negative ids address group chats, non-negative ids
//! address users. Preferences live for the process lifetime only.

use std::collections::HashMap;
use parking_lot::RwLock;
use tracing::debug;

/// Storage for per-chat and per-user language keys
///
/// Writes accept any key; unrecognised keys are resolved to the default
/// language by readers.
pub trait PreferenceStore: Send + Sync {
    fn chat_language(&self, chat_id: i64) -> Option<String>;
    fn user_language(&self, user_id: i64) -> Option<String>;
    fn set_chat_language(&self, chat_id: i64, language_key: &str);
    fn set_user_language(&self, user_id: i64, language_key: &str);
}

/// Language key for `target_id`, or `default_key` when none is stored
///
/// Negative ids consult the chat map, everything else the user map.
pub fn effective_language(store: &dyn PreferenceStore, target_id: i64, default_key: &str) -> String {
    let stored = if target_id < 0 {
        store.chat_language(target_id)
    } else {
        store.user_language(target_id)
    };
    stored.unwrap_or_else(|| default_key.to_string())
}

#[derive(Debug, Default)]
struct Preferences {
    chats: HashMap<i64, String>,
    users: HashMap<i64, String>,
}

/// In-memory preference store, one lock for both maps
#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    inner: RwLock<Preferences>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of (chat, user) preferences stored
    pub fn counts(&self) -> (usize, usize) {
        let prefs = self.inner.read();
        (prefs.chats.len(), prefs.users.len())
    }

    pub fn is_empty(&self) -> bool {
        let prefs = self.inner.read();
        prefs.chats.is_empty() && prefs.users.is_empty()
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn chat_language(&self, chat_id: i64) -> Option<String> {
        self.inner.read().chats.get(&chat_id).cloned()
    }

    fn user_language(&self, user_id: i64) -> Option<String> {
        self.inner.read().users.get(&user_id).cloned()
    }

    fn set_chat_language(&self, chat_id: i64, language_key: &str) {
        debug!(chat_id = chat_id, language_key = language_key, "Storing chat language");
        self.inner.write().chats.insert(chat_id, language_key.to_string());
    }

    fn set_user_language(&self, user_id: i64, language_key: &str) {
        debug!(user_id = user_id, language_key = language_key, "Storing user language");
        self.inner.write().users.insert(user_id, language_key.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_entry_yields_default() {
        let store = InMemoryPreferenceStore::new();
        assert_eq!(effective_language(&store, 42, "русский"), "русский");
        assert_eq!(effective_language(&store, -42, "русский"), "русский");
        assert!(store.is_empty());
    }

    #[test]
    fn test_sign_selects_scope() {
        let store = InMemoryPreferenceStore::new();
        store.set_chat_language(-100, "украинский");
        store.set_user_language(100, "английский");

        assert_eq!(effective_language(&store, -100, "русский"), "украинский");
        assert_eq!(effective_language(&store, 100, "русский"), "английский");
        assert_eq!(store.counts(), (1, 1));
    }

    #[test]
    fn test_scopes_are_independent() {
        let store = InMemoryPreferenceStore::new();
        // A chat entry under a non-negative id is never read for that id
        store.set_chat_language(7, "английский");
        assert_eq!(effective_language(&store, 7, "русский"), "русский");
        assert_eq!(store.chat_language(7).as_deref(), Some("английский"));
        assert_eq!(store.user_language(7), None);
    }

    #[test]
    fn test_overwrite_and_lenient_write() {
        let store = InMemoryPreferenceStore::new();
        store.set_user_language(5, "английский");
        store.set_user_language(5, "xx");
        assert_eq!(store.user_language(5).as_deref(), Some("xx"));
        assert_eq!(store.counts(), (0, 1));
    }
}
