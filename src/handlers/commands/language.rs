//! Language command handlers
//!
//! `/admin_locale` shows the group language keyboard to chat admins and
//! `/set_l` shows the personal language keyboard in private chats.

use std::sync::Arc;
use teloxide::{Bot, types::{Message, InlineKeyboardMarkup, InlineKeyboardButton, ReplyParameters}, prelude::*};
use tracing::{debug, info};
use crate::utils::errors::{PolyglotError, Result};
use crate::i18n::{FormatArgs, LocalizedString, Resolver, SupportedLanguage};
use crate::middleware::AuthMiddleware;
use crate::handlers::callbacks::{CHAT_LANGUAGE_ACTION, USER_LANGUAGE_ACTION};

/// Which preference a language keyboard writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageScope {
    Chat,
    User,
}

impl LanguageScope {
    fn action(self) -> &'static str {
        match self {
            LanguageScope::Chat => CHAT_LANGUAGE_ACTION,
            LanguageScope::User => USER_LANGUAGE_ACTION,
        }
    }

    /// Callback data for choosing `language` in this scope
    pub fn callback_data(self, language: SupportedLanguage) -> String {
        format!("{}:{}", self.action(), language.key())
    }
}

/// One button per supported language, labelled with its flag and name
pub fn language_keyboard(scope: LanguageScope) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(SupportedLanguage::ALL.into_iter().map(|language| {
        vec![InlineKeyboardButton::callback(
            language.label(),
            scope.callback_data(language),
        )]
    }))
}

/// `key` formatted with the `lang` display name, resolved for `target_id`
pub(crate) fn with_language_name(resolver: &Resolver, target_id: i64, key: &str, language_key: &str) -> String {
    let text = LocalizedString::new(key).format(FormatArgs::named("lang", resolver.display_name(language_key)));
    resolver.resolve_string(target_id, &text, None)
}

/// Handle /admin_locale - show the group language keyboard
pub async fn handle_admin_locale(
    bot: Bot,
    msg: Message,
    resolver: Arc<Resolver>,
    auth: AuthMiddleware,
) -> Result<()> {
    let user = msg.from.as_ref().ok_or_else(|| {
        PolyglotError::InvalidInput("No user in message".to_string())
    })?;

    let user_id = user.id.0 as i64;
    let chat_id = msg.chat.id;

    debug!(user_id = user_id, chat_id = ?chat_id, "Processing /admin_locale command");

    if msg.chat.is_private() {
        bot.send_message(chat_id, resolver.resolve(user_id, "only_in_groups", None))
            .reply_parameters(ReplyParameters::new(msg.id))
            .await?;
        return Ok(());
    }

    if !auth.is_chat_admin(&bot, chat_id, user_id).await {
        bot.send_message(chat_id, resolver.resolve(user_id, "only_admin", None))
            .reply_parameters(ReplyParameters::new(msg.id))
            .await?;
        return Ok(());
    }

    let current = resolver.current_language_key(chat_id.0);
    let text = with_language_name(&resolver, chat_id.0, "current_group_language", &current);

    bot.send_message(chat_id, text)
        .reply_parameters(ReplyParameters::new(msg.id))
        .reply_markup(language_keyboard(LanguageScope::Chat))
        .await?;

    info!(user_id = user_id, chat_id = ?chat_id, current = %current, "Shown group language keyboard");
    Ok(())
}

/// Handle /set_l - show the personal language keyboard
pub async fn handle_set_language(bot: Bot, msg: Message, resolver: Arc<Resolver>) -> Result<()> {
    let chat_id = msg.chat.id;

    if !msg.chat.is_private() {
        bot.send_message(chat_id, resolver.resolve(chat_id.0, "private_only_language_change", None))
            .reply_parameters(ReplyParameters::new(msg.id))
            .await?;
        return Ok(());
    }

    let user = msg.from.as_ref().ok_or_else(|| {
        PolyglotError::InvalidInput("No user in message".to_string())
    })?;
    let user_id = user.id.0 as i64;

    let current = resolver.current_language_key(user_id);
    let text = with_language_name(&resolver, user_id, "current_user_language", &current);

    bot.send_message(chat_id, text)
        .reply_markup(language_keyboard(LanguageScope::User))
        .await?;

    debug!(user_id = user_id, current = %current, "Shown personal language keyboard");
    Ok(())
}
