//! Seam between the bot's logic and the Discord API.
//!
//! Every platform call the reconcilers and commands make goes through
//! `GuildGateway`. Production code uses `SerenityGateway`; tests use the recording
//! gateway in `mock`.

#[cfg(test)]
pub mod mock;
pub mod discord;

use serenity::all::Permissions;
use serenity::async_trait;

use crate::{
    error::AppError,
    model::{
        discord::{DiscordChannel, DiscordRole},
        message::Report,
    },
};

pub use discord::SerenityGateway;

/// Live guild state queries and administrative actions against Discord.
///
/// Ids are raw snowflakes. Implementations perform exactly one API request per
/// mutating call and never retry.
#[async_trait]
pub trait GuildGateway: Send + Sync {
    /// Roles of the guild ordered by role id, oldest first.
    async fn roles(&self, guild_id: u64) -> Result<Vec<DiscordRole>, AppError>;

    async fn create_role(&self, guild_id: u64, name: &str) -> Result<DiscordRole, AppError>;

    async fn delete_role(&self, guild_id: u64, role_id: u64) -> Result<(), AppError>;

    async fn rename_role(&self, guild_id: u64, role_id: u64, name: &str) -> Result<(), AppError>;

    async fn add_member_role(&self, guild_id: u64, user_id: u64, role_id: u64)
        -> Result<(), AppError>;

    async fn remove_member_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), AppError>;

    /// Channels of the guild ordered by channel id.
    async fn channels(&self, guild_id: u64) -> Result<Vec<DiscordChannel>, AppError>;

    async fn rename_channel(&self, channel_id: u64, name: &str) -> Result<(), AppError>;

    /// Users currently connected to a voice channel.
    async fn voice_channel_members(
        &self,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<Vec<u64>, AppError>;

    /// Applies or lifts the server-side voice mute of a member.
    async fn set_member_mute(&self, guild_id: u64, user_id: u64, mute: bool)
        -> Result<(), AppError>;

    /// Guild-level permissions of a member, including role and owner grants.
    async fn member_permissions(&self, guild_id: u64, user_id: u64)
        -> Result<Permissions, AppError>;

    async fn member_count(&self, guild_id: u64) -> Result<u64, AppError>;

    async fn send_message(&self, channel_id: u64, content: &str) -> Result<(), AppError>;

    /// Sends `content` as a reply referencing `message_id`.
    async fn reply(&self, channel_id: u64, message_id: u64, content: &str)
        -> Result<(), AppError>;

    async fn send_report(&self, channel_id: u64, report: &Report) -> Result<(), AppError>;
}

/// Finds the role whose name equals `name` exactly.
///
/// When several roles share the name, the oldest one wins.
pub fn find_role_by_name<'a>(roles: &'a [DiscordRole], name: &str) -> Option<&'a DiscordRole> {
    roles.iter().find(|role| role.name == name)
}

/// Finds a voice channel whose name equals `name` exactly.
pub fn find_voice_channel_by_name<'a>(
    channels: &'a [DiscordChannel],
    name: &str,
) -> Option<&'a DiscordChannel> {
    channels
        .iter()
        .find(|channel| channel.is_voice() && channel.name == name)
}
