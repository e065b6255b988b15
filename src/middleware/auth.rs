//! Authentication middleware
//!
//! This module decides who may change a group chat's language: configured
//! bot admins everywhere, and the chat's own owner and administrators.

use std::collections::HashSet;
use teloxide::{prelude::*, types::{ChatId, UserId}};
use tracing::{debug, warn};
use crate::config::settings::Settings;

/// Authentication middleware
#[derive(Debug, Clone)]
pub struct AuthMiddleware {
    admin_ids: HashSet<i64>,
}

impl AuthMiddleware {
    /// Create a new AuthMiddleware instance
    pub fn new(settings: &Settings) -> Self {
        Self::with_admins(settings.bot.admin_ids.iter().copied())
    }

    /// Create from an explicit set of bot admin ids
    pub fn with_admins(admin_ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            admin_ids: admin_ids.into_iter().collect(),
        }
    }

    /// Check if user is a configured bot admin
    pub fn is_admin(&self, user_id: i64) -> bool {
        self.admin_ids.contains(&user_id)
    }

    /// Check if user may administer `chat_id`
    ///
    /// Failures to query the chat member are treated as "not an admin".
    pub async fn is_chat_admin(&self, bot: &Bot, chat_id: ChatId, user_id: i64) -> bool {
        if self.is_admin(user_id) {
            debug!(user_id = user_id, "Bot admin authentication successful");
            return true;
        }

        match bot.get_chat_member(chat_id, UserId(user_id as u64)).await {
            Ok(member) => {
                let privileged = member.is_privileged();
                debug!(user_id = user_id, chat_id = ?chat_id, privileged = privileged, "Checked chat member status");
                privileged
            }
            Err(e) => {
                warn!(user_id = user_id, chat_id = ?chat_id, error = %e, "Failed to fetch chat member");
                false
            }
        }
    }
}
