use serenity::all::VoiceState;

use crate::{
    bot::gateway::GuildGateway, model::discord::VoiceTransition,
    service::voice_role::VoiceRoleService,
};

/// Handles the voice_state_update event.
///
/// Classifies the event as a join, leave or move and keeps the member's channel
/// role in step. Events that do not change the channel (mute, deafen, streaming)
/// are dropped before any API call.
///
/// # Arguments
/// - `gateway` - Discord API access for role lookups and grants
/// - `old` - Cached previous voice state, absent if the member was not connected
///   or the cache missed it
/// - `new` - Voice state after the change
pub async fn handle_voice_state_update(
    gateway: &dyn GuildGateway,
    old: Option<VoiceState>,
    new: VoiceState,
) {
    let Some(transition) = VoiceTransition::from_states(old.as_ref(), &new) else {
        tracing::debug!("Ignoring voice state update outside of a guild");
        return;
    };

    if transition.is_unchanged() {
        return;
    }

    match (transition.old_channel_id, transition.new_channel_id) {
        (None, Some(channel_id)) => tracing::info!(
            "User {} joined voice channel {} in guild {}",
            transition.user_id,
            channel_id,
            transition.guild_id
        ),
        (Some(channel_id), None) => tracing::info!(
            "User {} left voice channel {} in guild {}",
            transition.user_id,
            channel_id,
            transition.guild_id
        ),
        (Some(old_id), Some(new_id)) => tracing::info!(
            "User {} moved from voice channel {} to {} in guild {}",
            transition.user_id,
            old_id,
            new_id,
            transition.guild_id
        ),
        (None, None) => {}
    }

    if let Err(e) = VoiceRoleService::new(gateway).reconcile(transition).await {
        tracing::error!(
            "Failed to sync voice roles for user {} in guild {}: {}",
            transition.user_id,
            transition.guild_id,
            e
        );
    }
}
