//! `mute` and `removemute`: server-mute everyone in a voice channel.
//!
//! The voice channel is addressed through the role that shares its name, so a
//! moderator can mention `@Lounge` instead of looking up the channel id.

use std::time::Duration;

use serenity::async_trait;

use crate::{
    bot::gateway::find_voice_channel_by_name,
    command::{Capability, Command, CommandContext},
    error::AppError,
    model::{discord::DiscordChannel, message::Report},
    util::parse::parse_role_mention,
};

/// Pause before each mute-state call, keeping bursts under the rate limit.
pub const MUTE_THROTTLE: Duration = Duration::from_millis(300);

/// Lifts the server mute of every member in a voice channel.
pub struct RemoveMuteCommand {
    throttle: Duration,
}

impl RemoveMuteCommand {
    pub fn with_throttle(throttle: Duration) -> Self {
        Self { throttle }
    }
}

impl Default for RemoveMuteCommand {
    fn default() -> Self {
        Self::with_throttle(MUTE_THROTTLE)
    }
}

#[async_trait]
impl Command for RemoveMuteCommand {
    fn name(&self) -> &'static str {
        "removemute"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["rm"]
    }

    fn description(&self) -> &'static str {
        "Unmutes every member of the voice channel named after the mentioned role."
    }

    fn syntax(&self) -> &'static str {
        "removemute [voice channel role mention]"
    }

    fn required_capability(&self) -> Option<Capability> {
        Some(Capability::MuteMembers)
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), AppError> {
        set_channel_mute(
            self,
            ctx,
            MuteAction {
                mute: false,
                throttle: self.throttle,
                title: "Remove Mute - Report",
                channel_label: "Voice channel unmuted",
                failed_status: "Failed - some members may still be muted",
            },
        )
        .await
    }
}

/// Server-mutes every member in a voice channel.
pub struct MuteCommand {
    throttle: Duration,
}

impl MuteCommand {
    pub fn with_throttle(throttle: Duration) -> Self {
        Self { throttle }
    }
}

impl Default for MuteCommand {
    fn default() -> Self {
        Self::with_throttle(MUTE_THROTTLE)
    }
}

#[async_trait]
impl Command for MuteCommand {
    fn name(&self) -> &'static str {
        "mute"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["m"]
    }

    fn description(&self) -> &'static str {
        "Mutes every member of the voice channel named after the mentioned role."
    }

    fn syntax(&self) -> &'static str {
        "mute [voice channel role mention]"
    }

    fn required_capability(&self) -> Option<Capability> {
        Some(Capability::MuteMembers)
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), AppError> {
        set_channel_mute(
            self,
            ctx,
            MuteAction {
                mute: true,
                throttle: self.throttle,
                title: "Mute - Report",
                channel_label: "Voice channel muted",
                failed_status: "Failed - some members may not be muted",
            },
        )
        .await
    }
}

struct MuteAction {
    mute: bool,
    throttle: Duration,
    title: &'static str,
    channel_label: &'static str,
    failed_status: &'static str,
}

async fn set_channel_mute(
    command: &dyn Command,
    ctx: &CommandContext<'_>,
    action: MuteAction,
) -> Result<(), AppError> {
    if ctx.is_automatic() {
        tracing::warn!("`{}` needs a role mention and cannot run automatically", command.name());
        return Ok(());
    }
    if !ctx.authorize(command).await {
        return Ok(());
    }

    let Some(mention) = ctx.args().first() else {
        ctx.say_syntax(command).await;
        return Ok(());
    };

    let channel = match resolve_channel(ctx, mention).await {
        Ok(Some(channel)) => channel,
        Ok(None) => return Ok(()),
        Err(e) => {
            tracing::error!(
                "Failed to resolve voice channel for `{}` in guild {}: {}",
                mention,
                ctx.guild_id,
                e
            );
            ctx.send_report(&Report::new(action.title).status(action.failed_status))
                .await;
            return Ok(());
        }
    };

    let mut all_succeeded = true;
    match ctx
        .gateway()
        .voice_channel_members(ctx.guild_id, channel.channel_id)
        .await
    {
        Ok(members) => {
            for user_id in members {
                tokio::time::sleep(action.throttle).await;

                if let Err(e) = ctx
                    .gateway()
                    .set_member_mute(ctx.guild_id, user_id, action.mute)
                    .await
                {
                    tracing::error!(
                        "Failed to set mute={} for user {} in guild {}: {}",
                        action.mute,
                        user_id,
                        ctx.guild_id,
                        e
                    );
                    all_succeeded = false;
                }
            }
        }
        Err(e) => {
            tracing::error!(
                "Failed to list members of voice channel {} in guild {}: {}",
                channel.channel_id,
                ctx.guild_id,
                e
            );
            all_succeeded = false;
        }
    }

    tracing::info!(
        "{} set mute={} on voice channel {} in guild {}",
        ctx.invoker(),
        action.mute,
        channel.name,
        ctx.guild_id
    );

    let status = if all_succeeded {
        "Success"
    } else {
        action.failed_status
    };
    let report = Report::new(action.title)
        .description(format!(
            "**Command executed by:** {}\n**{}:** {}",
            ctx.invoker(),
            action.channel_label,
            channel.name
        ))
        .status(status);
    ctx.send_report(&report).await;

    Ok(())
}

/// Resolves the mentioned role to the voice channel sharing its name.
///
/// Replies and returns `Ok(None)` when either lookup misses.
async fn resolve_channel(
    ctx: &CommandContext<'_>,
    mention: &str,
) -> Result<Option<DiscordChannel>, AppError> {
    let roles = ctx.gateway().roles(ctx.guild_id).await?;
    let Some(role) = parse_role_mention(mention)
        .and_then(|role_id| roles.into_iter().find(|role| role.role_id == role_id))
    else {
        ctx.say("Invalid role.").await;
        return Ok(None);
    };

    let channels = ctx.gateway().channels(ctx.guild_id).await?;
    let Some(channel) = find_voice_channel_by_name(&channels, &role.name) else {
        ctx.say("No voice channel found for that role!").await;
        return Ok(None);
    };

    Ok(Some(channel.clone()))
}
