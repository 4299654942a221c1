//! Ready event handler for bot initialization.
//!
//! Fired once per gateway connection after the handshake. Besides logging the
//! connection, it advertises the help command through the bot's presence.

use serenity::all::{ActivityData, Context, Ready};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for setting the presence
/// - `ready` - Ready event data containing bot user information
/// - `prefix` - Command prefix shown in the presence, e.g. "Watching f!help"
pub async fn handle_ready(ctx: Context, ready: Ready, prefix: &str) {
    tracing::info!(
        "{} is connected to Discord and serving {} guilds",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::watching(format!("{}help", prefix))));
}
