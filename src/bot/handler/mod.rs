use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, GuildChannel, GuildId, Member, Message, Ready, User, VoiceState};
use serenity::async_trait;

use crate::{
    bot::gateway::SerenityGateway,
    command::{registry::CommandRegistry, CommandEnv},
};

pub mod channel;
pub mod member;
pub mod message;
pub mod ready;
pub mod voice;

#[cfg(test)]
mod test;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub registry: Arc<CommandRegistry>,
    pub prefix: String,
}

impl Handler {
    pub fn new(db: DatabaseConnection, registry: Arc<CommandRegistry>, prefix: String) -> Self {
        Self {
            db,
            registry,
            prefix,
        }
    }

    fn env<'a>(&'a self, gateway: &'a SerenityGateway) -> CommandEnv<'a> {
        CommandEnv {
            db: &self.db,
            gateway,
            registry: &self.registry,
            prefix: &self.prefix,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready, &self.prefix).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        let gateway = SerenityGateway::from_context(&ctx);
        message::handle_message(self.env(&gateway), message).await;
    }

    /// Called when a member joins, leaves or moves between voice channels
    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        let gateway = SerenityGateway::from_context(&ctx);
        voice::handle_voice_state_update(&gateway, old, new).await;
    }

    /// Called when a channel is created in a guild
    async fn channel_create(&self, ctx: Context, channel: GuildChannel) {
        let gateway = SerenityGateway::from_context(&ctx);
        channel::handle_channel_create(self.env(&gateway), channel).await;
    }

    /// Called when a channel is updated in a guild
    async fn channel_update(&self, ctx: Context, old: Option<GuildChannel>, new: GuildChannel) {
        let gateway = SerenityGateway::from_context(&ctx);
        channel::handle_channel_update(&gateway, old, new).await;
    }

    /// Called when a channel is deleted from a guild
    async fn channel_delete(
        &self,
        ctx: Context,
        channel: GuildChannel,
        messages: Option<Vec<Message>>,
    ) {
        let gateway = SerenityGateway::from_context(&ctx);
        channel::handle_channel_delete(self.env(&gateway), channel, messages).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        let gateway = SerenityGateway::from_context(&ctx);
        member::handle_guild_member_addition(self.env(&gateway), new_member).await;
    }

    /// Called when a member leaves a guild
    async fn guild_member_removal(
        &self,
        ctx: Context,
        guild_id: GuildId,
        user: User,
        member_data_if_available: Option<Member>,
    ) {
        let gateway = SerenityGateway::from_context(&ctx);
        member::handle_guild_member_removal(
            self.env(&gateway),
            guild_id,
            user,
            member_data_if_available,
        )
        .await;
    }
}
