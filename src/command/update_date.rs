use chrono::{Local, NaiveDate};
use serenity::async_trait;

use crate::{
    command::{Capability, Command, CommandContext},
    data::stat_channel::StatChannelRepository,
    error::AppError,
    model::{discord::DiscordChannel, message::Report, stat_channel::StatKind},
};

pub const UPDATE_DATE: &str = "updatedate";

/// Display name of a date channel, e.g. `📅|Monday, March 2, 2026`.
pub fn date_channel_name(date: NaiveDate) -> String {
    format!("📅|{}", date.format("%A, %B %-d, %Y"))
}

/// Renames the guild's date channel to today's date.
pub struct UpdateDateCommand {
    today: fn() -> NaiveDate,
}

impl UpdateDateCommand {
    /// Uses `today` instead of the local clock.
    pub fn with_clock(today: fn() -> NaiveDate) -> Self {
        Self { today }
    }
}

impl Default for UpdateDateCommand {
    fn default() -> Self {
        Self::with_clock(|| Local::now().date_naive())
    }
}

#[async_trait]
impl Command for UpdateDateCommand {
    fn name(&self) -> &'static str {
        UPDATE_DATE
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["ud"]
    }

    fn description(&self) -> &'static str {
        "Renames the date channel to today's date."
    }

    fn syntax(&self) -> &'static str {
        "updatedate"
    }

    fn required_capability(&self) -> Option<Capability> {
        Some(Capability::ManageChannels)
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), AppError> {
        if !ctx.authorize(self).await {
            return Ok(());
        }

        let channel = match find_date_channel(ctx).await {
            Ok(Some(channel)) => channel,
            Ok(None) => {
                tracing::debug!("Guild {} has no date channel set up", ctx.guild_id);
                ctx.say(&format!(
                    "Date channel not set up for this server! Run {}setup date.",
                    ctx.env.prefix
                ))
                .await;
                return Ok(());
            }
            Err(e) => {
                tracing::error!(
                    "Failed to look up date channel of guild {}: {}",
                    ctx.guild_id,
                    e
                );
                ctx.send_report(&Report::new("Update Date - Report").status("Failed"))
                    .await;
                return Ok(());
            }
        };

        let name = date_channel_name((self.today)());
        if channel.name == name {
            tracing::debug!("Date channel of guild {} is already current", ctx.guild_id);
            ctx.say("Date is already updated on this server!").await;
            return Ok(());
        }

        let status = match ctx.gateway().rename_channel(channel.channel_id, &name).await {
            Ok(()) => {
                tracing::info!("Updated date channel of guild {} to {}", ctx.guild_id, name);
                "Success"
            }
            Err(e) => {
                tracing::error!(
                    "Failed to rename date channel {} in guild {}: {}",
                    channel.channel_id,
                    ctx.guild_id,
                    e
                );
                "Failed"
            }
        };

        let report = Report::new("Update Date - Report")
            .description(format!(
                "**Command executed by:** {}\n**Date set to:** {}",
                ctx.invoker(),
                name
            ))
            .status(status);
        ctx.send_report(&report).await;

        Ok(())
    }
}

/// Resolves the stored date channel against the guild's live channels.
async fn find_date_channel(ctx: &CommandContext<'_>) -> Result<Option<DiscordChannel>, AppError> {
    let Some(stat_channel) = StatChannelRepository::new(ctx.db())
        .find_by_guild(ctx.guild_id, StatKind::Date)
        .await?
    else {
        return Ok(None);
    };

    let channels = ctx.gateway().channels(ctx.guild_id).await?;

    Ok(channels
        .into_iter()
        .find(|channel| channel.channel_id == stat_channel.channel_id))
}
