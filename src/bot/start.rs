use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};

use crate::{
    bot::handler::Handler, command::registry::CommandRegistry, config::Config, error::AppError,
};

/// Gateway intents the handlers depend on.
///
/// `GUILD_MEMBERS` and `MESSAGE_CONTENT` are privileged and must be enabled in the
/// Discord Developer Portal.
pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_VOICE_STATES
}

/// Builds the Discord client without connecting it.
///
/// The client's HTTP and cache handles can be cloned before `start_bot` is called,
/// which is how the date channel scheduler talks to Discord.
///
/// # Arguments
/// - `config` - Application configuration with the bot token and command prefix
/// - `db` - Database connection for the handlers
/// - `registry` - Commands the handlers dispatch to
///
/// # Returns
/// - `Ok(Client)` - Configured client, not yet connected
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    registry: Arc<CommandRegistry>,
) -> Result<Client, AppError> {
    let handler = Handler::new(db, registry, config.command_prefix.clone());

    let client = Client::builder(&config.discord_bot_token, intents())
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Connects to the gateway and processes events until shutdown.
///
/// # Returns
/// - `Ok(())` - The bot shut down cleanly
/// - `Err(AppError)` - The gateway connection failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
