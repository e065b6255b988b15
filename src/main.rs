//! Polyglot Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;
use teloxide::{prelude::*, types::Update};
use teloxide::dispatching::UpdateHandler;
use tracing::{info, warn, error};

use polyglot::{
    config::Settings,
    utils::logging,
    i18n::{InMemoryPreferenceStore, Resolver},
    middleware::AuthMiddleware,
    handlers::{handle_command, handle_callback_query, Command},
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard flushes the log file on shutdown
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", polyglot::info());

    // Initialize i18n system
    info!(locale_dir = %settings.i18n.locale_dir, "Loading translations...");
    let preferences = Arc::new(InMemoryPreferenceStore::new());
    let (resolver, reports) = Resolver::from_config(&settings.i18n, preferences)?;
    for report in &reports {
        for skipped in &report.skipped {
            warn!(
                code = %report.code,
                path = %skipped.path.display(),
                kind = ?skipped.kind,
                reason = %skipped.reason,
                "Skipped locale file"
            );
        }
    }
    let stats = resolver.with_locales(|locales| locales.stats());
    for language in &stats.languages {
        info!(code = %language.code, keys = language.key_count, "Translations loaded");
    }

    let auth = AuthMiddleware::new(&settings);

    // Initialize bot
    let bot = Bot::new(&settings.bot.token);

    info!("Setting up bot handlers...");
    let handler = create_handler();

    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![Arc::new(resolver), auth])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    info!("Starting bot with polling mode...");
    dispatcher.dispatch().await;

    info!("Polyglot bot has been shut down.");

    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(handle_commands),
        )
        .branch(Update::filter_callback_query().endpoint(handle_callbacks))
}

/// Handle bot commands
async fn handle_commands(
    bot: Bot,
    msg: Message,
    cmd: Command,
    resolver: Arc<Resolver>,
    auth: AuthMiddleware,
) -> HandlerResult {
    if let Err(e) = handle_command(bot, msg, cmd, resolver, auth).await {
        error!(error = %e, severity = ?e.severity(), "Error handling command");
        return Err(e.into());
    }

    Ok(())
}

/// Handle callback queries
async fn handle_callbacks(
    bot: Bot,
    query: CallbackQuery,
    resolver: Arc<Resolver>,
    auth: AuthMiddleware,
) -> HandlerResult {
    let user_id = query.from.id.0 as i64;

    if let Err(e) = handle_callback_query(bot, query, resolver, auth).await {
        error!(user_id = user_id, error = %e, severity = ?e.severity(), "Error handling callback query");
        return Err(e.into());
    }

    Ok(())
}
