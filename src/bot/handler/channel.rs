//! Channel event handlers for Discord guild channels.
//!
//! Voice channels carry a role of the same name, so channel lifecycle events are
//! mirrored onto roles. Creating or deleting a text or voice channel also changes
//! the guild's channel count, which refreshes the channel count display.

use serenity::all::{GuildChannel, Message};

use crate::{
    bot::gateway::GuildGateway,
    command::{update_count::UPDATE_CHANNEL_COUNT, CommandEnv},
    model::discord::DiscordChannel,
    service::{channel_role::ChannelRoleService, count_trigger::trigger_count_update},
};

/// Handles the channel_create event when a channel is created in a guild.
///
/// # Arguments
/// - `env` - Shared command handles, used for the channel count refresh
/// - `channel` - The newly created guild channel from Discord
pub async fn handle_channel_create(env: CommandEnv<'_>, channel: GuildChannel) {
    let channel = DiscordChannel::from(&channel);

    if let Err(e) = ChannelRoleService::new(env.gateway)
        .on_created(&channel)
        .await
    {
        tracing::error!(
            "Failed to create role for channel {} in guild {}: {}",
            channel.name,
            channel.guild_id,
            e
        );
    }

    if channel.is_countable() {
        trigger_count_update(env, channel.guild_id, UPDATE_CHANNEL_COUNT).await;
    }
}

/// Handles the channel_update event when a channel is updated in a guild.
///
/// Only renames matter. Without a cached previous state the old name is unknown
/// and the event is skipped.
///
/// # Arguments
/// - `gateway` - Discord API access for the role rename
/// - `old` - Previous channel state if cached
/// - `new` - Updated channel state from Discord
pub async fn handle_channel_update(
    gateway: &dyn GuildGateway,
    old: Option<GuildChannel>,
    new: GuildChannel,
) {
    let Some(old) = old else {
        tracing::debug!(
            "Ignoring update of uncached channel {} in guild {}",
            new.name,
            new.guild_id
        );
        return;
    };

    let old = DiscordChannel::from(&old);
    let new = DiscordChannel::from(&new);

    if let Err(e) = ChannelRoleService::new(gateway).on_renamed(&old, &new).await {
        tracing::error!(
            "Failed to rename role {} to {} in guild {}: {}",
            old.name,
            new.name,
            new.guild_id,
            e
        );
    }
}

/// Handles the channel_delete event when a channel is deleted from a guild.
///
/// # Arguments
/// - `env` - Shared command handles, used for the channel count refresh
/// - `channel` - The deleted guild channel from Discord
/// - `_messages` - Messages that were in the channel if available (unused)
pub async fn handle_channel_delete(
    env: CommandEnv<'_>,
    channel: GuildChannel,
    _messages: Option<Vec<Message>>,
) {
    let channel = DiscordChannel::from(&channel);

    if let Err(e) = ChannelRoleService::new(env.gateway)
        .on_deleted(&channel)
        .await
    {
        tracing::error!(
            "Failed to delete role for channel {} in guild {}: {}",
            channel.name,
            channel.guild_id,
            e
        );
    }

    if channel.is_countable() {
        trigger_count_update(env, channel.guild_id, UPDATE_CHANNEL_COUNT).await;
    }
}
