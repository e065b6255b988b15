//! Callback query handlers module
//!
//! This module contains handlers for inline keyboard button callbacks.
//! Callback data has the form `<action>:<value>`.

pub mod language;

use std::sync::Arc;
use teloxide::{Bot, types::CallbackQuery, prelude::*};
use tracing::{debug, warn};
use crate::utils::errors::Result;
use crate::i18n::Resolver;
use crate::middleware::AuthMiddleware;

/// Action prefix for personal language buttons
pub const USER_LANGUAGE_ACTION: &str = "lang";
/// Action prefix for group language buttons
pub const CHAT_LANGUAGE_ACTION: &str = "chatlang";

/// A recognised callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackAction {
    ChatLanguage(String),
    UserLanguage(String),
}

/// Parse callback data into an action
pub fn parse_callback_data(data: &str) -> Option<CallbackAction> {
    let (action, value) = data.split_once(':')?;
    if value.is_empty() {
        return None;
    }

    match action {
        CHAT_LANGUAGE_ACTION => Some(CallbackAction::ChatLanguage(value.to_lowercase())),
        USER_LANGUAGE_ACTION => Some(CallbackAction::UserLanguage(value.to_lowercase())),
        _ => None,
    }
}

/// Main callback query dispatcher
pub async fn handle_callback_query(
    bot: Bot,
    query: CallbackQuery,
    resolver: Arc<Resolver>,
    auth: AuthMiddleware,
) -> Result<()> {
    let user_id = query.from.id.0 as i64;
    let action = query.data.as_deref().and_then(parse_callback_data);

    debug!(user_id = user_id, callback_data = ?query.data, action = ?action, "Processing callback query");

    match action {
        Some(CallbackAction::ChatLanguage(language_key)) => {
            language::handle_chat_language_callback(bot, query, language_key, resolver, auth).await
        }
        Some(CallbackAction::UserLanguage(language_key)) => {
            language::handle_user_language_callback(bot, query, language_key, resolver).await
        }
        None => {
            warn!(user_id = user_id, callback_data = ?query.data, "Unknown callback action");
            // Answer anyway so the client stops showing the loading state
            bot.answer_callback_query(query.id.clone()).await?;
            Ok(())
        }
    }
}
