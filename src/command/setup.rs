use serenity::async_trait;

use crate::{
    command::{
        update_count::{UPDATE_CHANNEL_COUNT, UPDATE_MEMBER_COUNT},
        update_date::UPDATE_DATE,
        Capability, Command, CommandContext,
    },
    data::stat_channel::StatChannelRepository,
    error::AppError,
    model::{
        message::Report,
        stat_channel::{StatKind, UpsertStatChannelParam},
    },
    util::parse::parse_channel_mention,
};

/// Designates the voice channel that displays a statistic.
pub struct SetupCommand;

/// Command that refreshes the display channel of `kind`.
pub fn refresh_command_for(kind: StatKind) -> &'static str {
    match kind {
        StatKind::Date => UPDATE_DATE,
        StatKind::Members => UPDATE_MEMBER_COUNT,
        StatKind::Channels => UPDATE_CHANNEL_COUNT,
    }
}

#[async_trait]
impl Command for SetupCommand {
    fn name(&self) -> &'static str {
        "setup"
    }

    fn description(&self) -> &'static str {
        "Sets the voice channel that displays the date, member count or channel count."
    }

    fn syntax(&self) -> &'static str {
        "setup [date|members|channels] [voice channel id]"
    }

    fn required_capability(&self) -> Option<Capability> {
        Some(Capability::ManageGuild)
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), AppError> {
        if ctx.is_automatic() {
            tracing::warn!("`setup` needs arguments and cannot run automatically");
            return Ok(());
        }
        if !ctx.authorize(self).await {
            return Ok(());
        }

        let [kind, channel, ..] = ctx.args() else {
            ctx.say_syntax(self).await;
            return Ok(());
        };

        let Some(kind) = StatKind::parse(kind) else {
            ctx.say("Unknown statistic. Choose one of: date, members, channels.")
                .await;
            return Ok(());
        };

        let channels = match ctx.gateway().channels(ctx.guild_id).await {
            Ok(channels) => channels,
            Err(e) => {
                tracing::error!("Failed to list channels of guild {}: {}", ctx.guild_id, e);
                ctx.send_report(&Report::new("Setup - Report").status("Failed"))
                    .await;
                return Ok(());
            }
        };
        let Some(channel) = parse_channel_mention(channel).and_then(|channel_id| {
            channels
                .into_iter()
                .find(|channel| channel.channel_id == channel_id && channel.is_voice())
        }) else {
            ctx.say("Invalid voice channel.").await;
            return Ok(());
        };

        let stored = StatChannelRepository::new(ctx.db())
            .upsert(UpsertStatChannelParam {
                guild_id: ctx.guild_id,
                kind,
                channel_id: channel.channel_id,
            })
            .await;

        let status = match stored {
            Ok(_) => {
                tracing::info!(
                    "{} set {} channel of guild {} to {}",
                    ctx.invoker(),
                    kind.as_str(),
                    ctx.guild_id,
                    channel.channel_id
                );
                "Success"
            }
            Err(e) => {
                tracing::error!(
                    "Failed to store {} channel of guild {}: {}",
                    kind.as_str(),
                    ctx.guild_id,
                    e
                );
                "Failed"
            }
        };

        let report = Report::new("Setup - Report")
            .description(format!(
                "**Command executed by:** {}\n**Statistic:** {}\n**Channel:** {}",
                ctx.invoker(),
                kind.as_str(),
                channel.name
            ))
            .status(status);
        ctx.send_report(&report).await;

        if status != "Success" {
            return Ok(());
        }

        let refresh = refresh_command_for(kind);
        match ctx.env.registry.find(refresh) {
            Some(command) => {
                command
                    .execute(&CommandContext::automatic(ctx.env, ctx.guild_id))
                    .await?
            }
            None => tracing::warn!("`{}` is not registered, skipping refresh", refresh),
        }

        Ok(())
    }
}
