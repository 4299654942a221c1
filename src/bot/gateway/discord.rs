use std::sync::Arc;

use serenity::all::{
    Cache, ChannelId, Context, CreateEmbed, CreateMessage, EditChannel, EditMember, EditRole,
    GuildChannel, GuildId, Http, MessageId, Permissions, Role, RoleId, UserId,
};
use serenity::async_trait;

use super::GuildGateway;
use crate::{
    error::AppError,
    model::{
        discord::{DiscordChannel, DiscordRole},
        message::Report,
    },
};

/// Embed colour used for every command report.
const REPORT_COLOUR: u32 = 0xFFFCF4;

/// `GuildGateway` backed by Serenity's HTTP client and gateway cache.
///
/// Both handles are reference counted, so the gateway is cheap to build per event.
#[derive(Clone)]
pub struct SerenityGateway {
    http: Arc<Http>,
    cache: Arc<Cache>,
}

impl SerenityGateway {
    pub fn new(http: Arc<Http>, cache: Arc<Cache>) -> Self {
        Self { http, cache }
    }

    pub fn from_context(ctx: &Context) -> Self {
        Self::new(ctx.http.clone(), ctx.cache.clone())
    }

    fn guild_not_cached(guild_id: u64) -> AppError {
        AppError::NotFound(format!("Guild {} is not in the cache", guild_id))
    }
}

/// Converts guild roles to domain roles ordered by id, oldest first.
fn sorted_roles<'a>(roles: impl IntoIterator<Item = &'a Role>) -> Vec<DiscordRole> {
    let mut roles: Vec<DiscordRole> = roles.into_iter().map(DiscordRole::from).collect();
    roles.sort_by_key(|role| role.role_id);
    roles
}

/// Converts guild channels to domain channels ordered by id.
fn sorted_channels<'a>(channels: impl IntoIterator<Item = &'a GuildChannel>) -> Vec<DiscordChannel> {
    let mut channels: Vec<DiscordChannel> =
        channels.into_iter().map(DiscordChannel::from).collect();
    channels.sort_by_key(|channel| channel.channel_id);
    channels
}

#[async_trait]
impl GuildGateway for SerenityGateway {
    async fn roles(&self, guild_id: u64) -> Result<Vec<DiscordRole>, AppError> {
        // Cache first, HTTP only for guilds the cache has not seen
        let cached = self
            .cache
            .guild(GuildId::new(guild_id))
            .map(|guild| sorted_roles(guild.roles.values()));
        if let Some(roles) = cached {
            return Ok(roles);
        }

        let roles = GuildId::new(guild_id).roles(&*self.http).await?;

        Ok(sorted_roles(roles.values()))
    }

    async fn create_role(&self, guild_id: u64, name: &str) -> Result<DiscordRole, AppError> {
        let role = GuildId::new(guild_id)
            .create_role(&*self.http, EditRole::new().name(name))
            .await?;

        Ok(DiscordRole::from(&role))
    }

    async fn delete_role(&self, guild_id: u64, role_id: u64) -> Result<(), AppError> {
        GuildId::new(guild_id)
            .delete_role(&*self.http, RoleId::new(role_id))
            .await?;

        Ok(())
    }

    async fn rename_role(&self, guild_id: u64, role_id: u64, name: &str) -> Result<(), AppError> {
        GuildId::new(guild_id)
            .edit_role(&*self.http, RoleId::new(role_id), EditRole::new().name(name))
            .await?;

        Ok(())
    }

    async fn add_member_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), AppError> {
        self.http
            .add_member_role(
                GuildId::new(guild_id),
                UserId::new(user_id),
                RoleId::new(role_id),
                Some("Joined voice channel"),
            )
            .await?;

        Ok(())
    }

    async fn remove_member_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), AppError> {
        self.http
            .remove_member_role(
                GuildId::new(guild_id),
                UserId::new(user_id),
                RoleId::new(role_id),
                Some("Left voice channel"),
            )
            .await?;

        Ok(())
    }

    async fn channels(&self, guild_id: u64) -> Result<Vec<DiscordChannel>, AppError> {
        let cached = self
            .cache
            .guild(GuildId::new(guild_id))
            .map(|guild| sorted_channels(guild.channels.values()));
        if let Some(channels) = cached {
            return Ok(channels);
        }

        let channels = GuildId::new(guild_id).channels(&*self.http).await?;

        Ok(sorted_channels(channels.values()))
    }

    async fn rename_channel(&self, channel_id: u64, name: &str) -> Result<(), AppError> {
        ChannelId::new(channel_id)
            .edit(&*self.http, EditChannel::new().name(name))
            .await?;

        Ok(())
    }

    async fn voice_channel_members(
        &self,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<Vec<u64>, AppError> {
        let guild = self
            .cache
            .guild(GuildId::new(guild_id))
            .ok_or_else(|| Self::guild_not_cached(guild_id))?;

        let channel_id = ChannelId::new(channel_id);
        let mut members: Vec<u64> = guild
            .voice_states
            .values()
            .filter(|state| state.channel_id == Some(channel_id))
            .map(|state| state.user_id.get())
            .collect();
        members.sort_unstable();

        Ok(members)
    }

    async fn set_member_mute(
        &self,
        guild_id: u64,
        user_id: u64,
        mute: bool,
    ) -> Result<(), AppError> {
        GuildId::new(guild_id)
            .edit_member(&*self.http, UserId::new(user_id), EditMember::new().mute(mute))
            .await?;

        Ok(())
    }

    async fn member_permissions(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Permissions, AppError> {
        let member = self
            .http
            .get_member(GuildId::new(guild_id), UserId::new(user_id))
            .await?;

        // Cache reference must not be held across an await point
        let guild = self
            .cache
            .guild(GuildId::new(guild_id))
            .ok_or_else(|| Self::guild_not_cached(guild_id))?;

        Ok(guild.member_permissions(&member))
    }

    async fn member_count(&self, guild_id: u64) -> Result<u64, AppError> {
        if let Some(guild) = self.cache.guild(GuildId::new(guild_id)) {
            return Ok(guild.member_count);
        }

        let guild = self
            .http
            .get_guild_with_counts(GuildId::new(guild_id))
            .await?;

        guild
            .approximate_member_count
            .ok_or_else(|| AppError::NotFound(format!("No member count for guild {}", guild_id)))
    }

    async fn send_message(&self, channel_id: u64, content: &str) -> Result<(), AppError> {
        ChannelId::new(channel_id).say(&*self.http, content).await?;

        Ok(())
    }

    async fn reply(&self, channel_id: u64, message_id: u64, content: &str) -> Result<(), AppError> {
        let channel_id = ChannelId::new(channel_id);
        let message = CreateMessage::new()
            .content(content)
            .reference_message((channel_id, MessageId::new(message_id)));

        channel_id.send_message(&*self.http, message).await?;

        Ok(())
    }

    async fn send_report(&self, channel_id: u64, report: &Report) -> Result<(), AppError> {
        let mut embed = CreateEmbed::new()
            .colour(REPORT_COLOUR)
            .title(&report.title)
            .description(&report.description);

        for (name, value) in &report.fields {
            embed = embed.field(name, value, false);
        }

        ChannelId::new(channel_id)
            .send_message(&*self.http, CreateMessage::new().embed(embed))
            .await?;

        Ok(())
    }
}
