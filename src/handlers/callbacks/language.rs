//! Language selection callbacks
//!
//! Store the chosen language, confirm it in the new language and replace the
//! keyboard message with the current setting.

use std::sync::Arc;
use teloxide::{Bot, types::{CallbackQuery, ChatId}, prelude::*};
use tracing::{info, warn};
use crate::utils::errors::Result;
use crate::utils::logging;
use crate::i18n::{Resolver, SupportedLanguage};
use crate::middleware::AuthMiddleware;
use crate::handlers::commands::language::with_language_name;

fn warn_if_unrecognized(target_id: i64, language_key: &str) {
    if SupportedLanguage::from_key(language_key).is_none() {
        warn!(target_id = target_id, language_key = language_key, "Storing unrecognized language key, default language will be used");
    }
}

/// Send the thank-you note when Ukrainian is chosen
async fn send_selection_extras(bot: &Bot, chat_id: ChatId, target_id: i64, language_key: &str, resolver: &Resolver) -> Result<()> {
    if SupportedLanguage::from_key(language_key) == Some(SupportedLanguage::Ukrainian) {
        bot.send_message(chat_id, resolver.resolve(target_id, "ua_gratitude", None)).await?;
    }
    Ok(())
}

/// Handle a group language button
pub async fn handle_chat_language_callback(
    bot: Bot,
    query: CallbackQuery,
    language_key: String,
    resolver: Arc<Resolver>,
    auth: AuthMiddleware,
) -> Result<()> {
    let user_id = query.from.id.0 as i64;
    let Some(message) = query.message.as_ref() else {
        warn!(user_id = user_id, "Group language callback without a message");
        bot.answer_callback_query(query.id.clone()).await?;
        return Ok(());
    };
    let chat_id = message.chat().id;

    if !auth.is_chat_admin(&bot, chat_id, user_id).await {
        bot.answer_callback_query(query.id.clone())
            .text(resolver.resolve(user_id, "only_admin", None))
            .await?;
        return Ok(());
    }

    warn_if_unrecognized(chat_id.0, &language_key);
    resolver.set_chat_language(chat_id.0, &language_key);
    logging::log_admin_action(user_id, "set_chat_language", Some(&chat_id.0.to_string()), Some(&language_key));

    bot.answer_callback_query(query.id.clone())
        .text(with_language_name(&resolver, chat_id.0, "group_language_set", &language_key))
        .await?;
    bot.edit_message_text(
        chat_id,
        message.id(),
        with_language_name(&resolver, chat_id.0, "current_group_language_set", &language_key),
    )
    .await?;

    send_selection_extras(&bot, chat_id, chat_id.0, &language_key, &resolver).await?;

    info!(user_id = user_id, chat_id = ?chat_id, language_key = %language_key, "Group language updated");
    Ok(())
}

/// Handle a personal language button
pub async fn handle_user_language_callback(
    bot: Bot,
    query: CallbackQuery,
    language_key: String,
    resolver: Arc<Resolver>,
) -> Result<()> {
    let user_id = query.from.id.0 as i64;

    warn_if_unrecognized(user_id, &language_key);
    resolver.set_user_language(user_id, &language_key);
    logging::log_language_change(user_id, "user", &language_key);

    bot.answer_callback_query(query.id.clone())
        .text(with_language_name(&resolver, user_id, "language_set", &language_key))
        .await?;

    let chat_id = query
        .message
        .as_ref()
        .map(|m| m.chat().id)
        .unwrap_or(ChatId(user_id));
    if let Some(message) = query.message.as_ref() {
        bot.edit_message_text(
            chat_id,
            message.id(),
            with_language_name(&resolver, user_id, "current_language_set", &language_key),
        )
        .await?;
    }

    send_selection_extras(&bot, chat_id, user_id, &language_key, &resolver).await?;

    info!(user_id = user_id, language_key = %language_key, "User language updated");
    Ok(())
}
