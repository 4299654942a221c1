use serenity::all::{GuildId, Member, User};

use crate::{
    command::{update_count::UPDATE_MEMBER_COUNT, CommandEnv},
    service::count_trigger::trigger_count_update,
};

/// Handles the guild_member_addition event when a member joins a guild
pub async fn handle_guild_member_addition(env: CommandEnv<'_>, new_member: Member) {
    let guild_id = new_member.guild_id.get();

    tracing::info!("User {} joined guild {}", new_member.user.tag(), guild_id);

    trigger_count_update(env, guild_id, UPDATE_MEMBER_COUNT).await;
}

/// Handles the guild_member_removal event when a member leaves a guild
pub async fn handle_guild_member_removal(
    env: CommandEnv<'_>,
    guild_id: GuildId,
    user: User,
    _member_data_if_available: Option<Member>,
) {
    let guild_id = guild_id.get();

    tracing::info!("User {} left guild {}", user.tag(), guild_id);

    trigger_count_update(env, guild_id, UPDATE_MEMBER_COUNT).await;
}
