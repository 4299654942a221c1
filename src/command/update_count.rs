//! `updatemembercount` and `updatechannelcount`.
//!
//! Both rename a designated voice channel to show a live count. They run
//! interactively and, far more often, automatically whenever a member joins or
//! leaves or a channel is created or deleted.

use serenity::async_trait;

use crate::{
    command::{Capability, Command, CommandContext},
    data::stat_channel::StatChannelRepository,
    error::AppError,
    model::{message::Report, stat_channel::StatKind},
};

pub const UPDATE_MEMBER_COUNT: &str = "updatemembercount";
pub const UPDATE_CHANNEL_COUNT: &str = "updatechannelcount";

/// Display name of a member count channel.
pub fn member_count_name(count: u64) -> String {
    format!("👥|Members: {}", count)
}

/// Display name of a channel count channel.
pub fn channel_count_name(count: u64) -> String {
    format!("💬|Channels: {}", count)
}

/// The statistic a count channel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountKind {
    Members,
    Channels,
}

impl CountKind {
    /// Stored kind of the channel showing this count.
    pub fn stat_kind(self) -> StatKind {
        match self {
            CountKind::Members => StatKind::Members,
            CountKind::Channels => StatKind::Channels,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.stat_kind().as_str()
    }
}

/// Renames a count channel to the current member or channel count.
pub struct UpdateCountCommand {
    kind: CountKind,
}

impl UpdateCountCommand {
    pub fn members() -> Self {
        Self {
            kind: CountKind::Members,
        }
    }

    pub fn channels() -> Self {
        Self {
            kind: CountKind::Channels,
        }
    }

    fn label(&self) -> &'static str {
        match self.kind {
            CountKind::Members => "Member count",
            CountKind::Channels => "Channel count",
        }
    }

    fn title(&self) -> &'static str {
        match self.kind {
            CountKind::Members => "Update Member Count - Report",
            CountKind::Channels => "Update Channel Count - Report",
        }
    }

    async fn current_name(&self, ctx: &CommandContext<'_>) -> Result<String, AppError> {
        match self.kind {
            CountKind::Members => {
                let count = ctx.gateway().member_count(ctx.guild_id).await?;
                Ok(member_count_name(count))
            }
            CountKind::Channels => {
                let channels = ctx.gateway().channels(ctx.guild_id).await?;
                let count = channels.iter().filter(|channel| channel.is_countable()).count();
                Ok(channel_count_name(count as u64))
            }
        }
    }

    /// Renames the stat channel. Returns `Ok(None)` when there is nothing to do.
    async fn refresh(&self, ctx: &CommandContext<'_>) -> Result<Option<String>, RefreshError> {
        let Some(stat_channel) = StatChannelRepository::new(ctx.db())
            .find_by_guild(ctx.guild_id, self.kind.stat_kind())
            .await?
        else {
            return Err(RefreshError::NotSetUp);
        };

        let channels = ctx.gateway().channels(ctx.guild_id).await?;
        let Some(channel) = channels
            .into_iter()
            .find(|channel| channel.channel_id == stat_channel.channel_id)
        else {
            return Err(RefreshError::NotSetUp);
        };

        let name = self.current_name(ctx).await?;
        if channel.name == name {
            return Ok(None);
        }

        ctx.gateway()
            .rename_channel(channel.channel_id, &name)
            .await?;

        Ok(Some(name))
    }
}

enum RefreshError {
    NotSetUp,
    Failed(AppError),
}

impl From<AppError> for RefreshError {
    fn from(e: AppError) -> Self {
        RefreshError::Failed(e)
    }
}

#[async_trait]
impl Command for UpdateCountCommand {
    fn name(&self) -> &'static str {
        match self.kind {
            CountKind::Members => UPDATE_MEMBER_COUNT,
            CountKind::Channels => UPDATE_CHANNEL_COUNT,
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self.kind {
            CountKind::Members => &["umc"],
            CountKind::Channels => &["ucc"],
        }
    }

    fn description(&self) -> &'static str {
        match self.kind {
            CountKind::Members => "Renames the member count channel to the current number of members.",
            CountKind::Channels => "Renames the channel count channel to the current number of channels.",
        }
    }

    fn syntax(&self) -> &'static str {
        self.name()
    }

    fn required_capability(&self) -> Option<Capability> {
        Some(Capability::ManageChannels)
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), AppError> {
        if !ctx.authorize(self).await {
            return Ok(());
        }

        let status = match self.refresh(ctx).await {
            Ok(Some(name)) => {
                tracing::info!(
                    "Updated {} channel of guild {} to {}",
                    self.kind.as_str(),
                    ctx.guild_id,
                    name
                );
                "Success"
            }
            Ok(None) => {
                tracing::debug!(
                    "{} channel of guild {} is already current",
                    self.label(),
                    ctx.guild_id
                );
                ctx.say(&format!(
                    "{} is already updated on this server!",
                    self.label()
                ))
                .await;
                return Ok(());
            }
            Err(RefreshError::NotSetUp) => {
                tracing::debug!(
                    "Guild {} has no {} channel set up",
                    ctx.guild_id,
                    self.kind.as_str()
                );
                ctx.say(&format!(
                    "{} channel not set up for this server! Run {}setup {}.",
                    self.label(),
                    ctx.env.prefix,
                    self.kind.as_str()
                ))
                .await;
                return Ok(());
            }
            Err(RefreshError::Failed(e)) => {
                tracing::error!(
                    "Failed to update {} channel of guild {}: {}",
                    self.kind.as_str(),
                    ctx.guild_id,
                    e
                );
                "Failed"
            }
        };

        let report = Report::new(self.title())
            .description(format!("**Command executed by:** {}", ctx.invoker()))
            .status(status);
        ctx.send_report(&report).await;

        Ok(())
    }
}
