use crate::{
    bot::gateway::mock::{GatewayCall, MockGateway},
    error::AppError,
    model::discord::{ChannelKind, DiscordChannel, VoiceTransition},
    service::{
        channel_role::{ChannelRoleOutcome, ChannelRoleService},
        voice_role::{VoiceRoleOutcome, VoiceRoleService},
    },
};


const GUILD_ID: u64 = 1;

fn voice(channel_id: u64, name: &str) -> DiscordChannel {
    DiscordChannel {
        channel_id,
        guild_id: GUILD_ID,
        name: name.to_string(),
        kind: ChannelKind::Voice,
    }
}

fn text(channel_id: u64, name: &str) -> DiscordChannel {
    DiscordChannel {
        kind: ChannelKind::Text,
        ..voice(channel_id, name)
    }
}
