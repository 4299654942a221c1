//! Grants and revokes the role that mirrors a voice channel.
//!
//! Members connected to a voice channel carry the role of the same name, which lets
//! the text channels of that role be shown only to people in the call. Nothing is
//! persisted: every transition resolves names against the live guild state.

use crate::{
    bot::gateway::{find_role_by_name, GuildGateway},
    error::AppError,
    model::discord::{DiscordChannel, DiscordRole, VoiceTransition},
};

/// What a voice transition changed, by role name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VoiceRoleOutcome {
    pub revoked: Option<String>,
    pub granted: Option<String>,
}

pub struct VoiceRoleService<'a> {
    gateway: &'a dyn GuildGateway,
}

impl<'a> VoiceRoleService<'a> {
    pub fn new(gateway: &'a dyn GuildGateway) -> Self {
        Self { gateway }
    }

    /// Moves a member's channel role along with the member.
    ///
    /// The role of the channel left is revoked and the role of the channel joined is
    /// granted. The two halves are independent: a failure in one is logged and does
    /// not stop the other. Nothing happens when the channel did not change.
    ///
    /// # Returns
    /// - `Ok(VoiceRoleOutcome)` - Roles that were actually revoked or granted
    /// - `Err(AppError)` - Guild roles or channels could not be listed
    pub async fn reconcile(&self, transition: VoiceTransition) -> Result<VoiceRoleOutcome, AppError> {
        if transition.is_unchanged() {
            return Ok(VoiceRoleOutcome::default());
        }

        let guild_id = transition.guild_id;
        let user_id = transition.user_id;
        let roles = self.gateway.roles(guild_id).await?;
        let channels = self.gateway.channels(guild_id).await?;
        let mut outcome = VoiceRoleOutcome::default();

        if let Some(role) = channel_role(&roles, &channels, transition.old_channel_id) {
            match self
                .gateway
                .remove_member_role(guild_id, user_id, role.role_id)
                .await
            {
                Ok(()) => {
                    tracing::info!(
                        "Revoked role {} from user {} in guild {}",
                        role.name,
                        user_id,
                        guild_id
                    );
                    outcome.revoked = Some(role.name.clone());
                }
                Err(e) => tracing::error!(
                    "Failed to revoke role {} from user {} in guild {}: {}",
                    role.name,
                    user_id,
                    guild_id,
                    e
                ),
            }
        }

        if let Some(role) = channel_role(&roles, &channels, transition.new_channel_id) {
            match self
                .gateway
                .add_member_role(guild_id, user_id, role.role_id)
                .await
            {
                Ok(()) => {
                    tracing::info!(
                        "Granted role {} to user {} in guild {}",
                        role.name,
                        user_id,
                        guild_id
                    );
                    outcome.granted = Some(role.name.clone());
                }
                Err(e) => tracing::error!(
                    "Failed to grant role {} to user {} in guild {}: {}",
                    role.name,
                    user_id,
                    guild_id,
                    e
                ),
            }
        }

        Ok(outcome)
    }
}

/// Role named after the channel with `channel_id`, if both exist.
fn channel_role<'r>(
    roles: &'r [DiscordRole],
    channels: &[DiscordChannel],
    channel_id: Option<u64>,
) -> Option<&'r DiscordRole> {
    let channel = channels
        .iter()
        .find(|channel| Some(channel.channel_id) == channel_id)?;

    find_role_by_name(roles, &channel.name)
}
