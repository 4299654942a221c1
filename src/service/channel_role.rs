//! Keeps one role per voice channel, named after it.
//!
//! Creating a voice channel creates its role, deleting it deletes the role, and
//! renaming it renames the role. Every step first checks the live role list so
//! replayed or duplicated events do not produce duplicate roles.

use crate::{
    bot::gateway::{find_role_by_name, GuildGateway},
    error::AppError,
    model::discord::DiscordChannel,
};

/// Result of one lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelRoleOutcome {
    Created(u64),
    Deleted(u64),
    Renamed(u64),
    /// A role with the channel's name already exists.
    AlreadyExists,
    /// No role carries the channel's (old) name.
    NoMatchingRole,
    /// Not a voice channel, or the name did not change.
    Ignored,
}

pub struct ChannelRoleService<'a> {
    gateway: &'a dyn GuildGateway,
}

impl<'a> ChannelRoleService<'a> {
    pub fn new(gateway: &'a dyn GuildGateway) -> Self {
        Self { gateway }
    }

    /// Creates the role of a new voice channel unless one with its name exists.
    pub async fn on_created(&self, channel: &DiscordChannel) -> Result<ChannelRoleOutcome, AppError> {
        if !channel.is_voice() {
            return Ok(ChannelRoleOutcome::Ignored);
        }

        let roles = self.gateway.roles(channel.guild_id).await?;
        if find_role_by_name(&roles, &channel.name).is_some() {
            tracing::debug!(
                "Role {} already exists in guild {}",
                channel.name,
                channel.guild_id
            );
            return Ok(ChannelRoleOutcome::AlreadyExists);
        }

        let role = self
            .gateway
            .create_role(channel.guild_id, &channel.name)
            .await?;
        tracing::info!(
            "Created role {} for voice channel {} in guild {}",
            role.name,
            channel.channel_id,
            channel.guild_id
        );

        Ok(ChannelRoleOutcome::Created(role.role_id))
    }

    /// Deletes the role named after a deleted voice channel, if any.
    pub async fn on_deleted(&self, channel: &DiscordChannel) -> Result<ChannelRoleOutcome, AppError> {
        if !channel.is_voice() {
            return Ok(ChannelRoleOutcome::Ignored);
        }

        let roles = self.gateway.roles(channel.guild_id).await?;
        let Some(role) = find_role_by_name(&roles, &channel.name) else {
            tracing::debug!(
                "No role named {} to delete in guild {}",
                channel.name,
                channel.guild_id
            );
            return Ok(ChannelRoleOutcome::NoMatchingRole);
        };

        self.gateway
            .delete_role(channel.guild_id, role.role_id)
            .await?;
        tracing::info!("Deleted role {} in guild {}", role.name, channel.guild_id);

        Ok(ChannelRoleOutcome::Deleted(role.role_id))
    }

    /// Renames the role of a renamed voice channel.
    ///
    /// Only the role carrying the old name is touched; a missing role is not created.
    pub async fn on_renamed(
        &self,
        old: &DiscordChannel,
        new: &DiscordChannel,
    ) -> Result<ChannelRoleOutcome, AppError> {
        if !old.is_voice() || !new.is_voice() || old.name == new.name {
            return Ok(ChannelRoleOutcome::Ignored);
        }

        let roles = self.gateway.roles(new.guild_id).await?;
        let Some(role) = find_role_by_name(&roles, &old.name) else {
            tracing::debug!(
                "No role named {} to rename in guild {}",
                old.name,
                new.guild_id
            );
            return Ok(ChannelRoleOutcome::NoMatchingRole);
        };

        self.gateway
            .rename_role(new.guild_id, role.role_id, &new.name)
            .await?;
        tracing::info!(
            "Renamed role {} to {} in guild {}",
            old.name,
            new.name,
            new.guild_id
        );

        Ok(ChannelRoleOutcome::Renamed(role.role_id))
    }
}
