//! Command handlers module
//!
//! This module contains handlers for the bot's language commands.

pub mod language;

use std::sync::Arc;
use teloxide::{Bot, types::Message, utils::command::BotCommands};
use crate::utils::errors::Result;
use crate::i18n::Resolver;
use crate::middleware::AuthMiddleware;

/// All available bot commands
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "snake_case", description = "Language commands:")]
pub enum Command {
    #[command(description = "Set the group language (admins only)")]
    AdminLocale,
    #[command(rename = "set_l", description = "Set your personal language")]
    SetLanguage,
}

/// Main command dispatcher
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    resolver: Arc<Resolver>,
    auth: AuthMiddleware,
) -> Result<()> {
    match cmd {
        Command::AdminLocale => language::handle_admin_locale(bot, msg, resolver, auth).await,
        Command::SetLanguage => language::handle_set_language(bot, msg, resolver).await,
    }
}
