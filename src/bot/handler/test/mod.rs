use sea_orm::DatabaseConnection;
use test_utils::factory::stat_channel::StatChannelFactory;

use crate::{
    bot::gateway::mock::{GatewayCall, MockGateway},
    command::{registry::CommandRegistry, update_count::UpdateCountCommand, CommandEnv},
    error::AppError,
    model::discord::ChannelKind,
};


const GUILD_ID: u64 = 1;
const CHANNEL_COUNT_ID: u64 = 30;
const MEMBER_COUNT_ID: u64 = 31;

fn count_registry() -> CommandRegistry {
    CommandRegistry::with_commands(vec![
        Box::new(UpdateCountCommand::members()),
        Box::new(UpdateCountCommand::channels()),
    ])
}

fn env<'a>(
    db: &'a DatabaseConnection,
    gateway: &'a MockGateway,
    registry: &'a CommandRegistry,
) -> CommandEnv<'a> {
    CommandEnv {
        db,
        gateway,
        registry,
        prefix: "f!",
    }
}

/// Stores the channel count and member count channels of the test guild.
async fn set_up_count_channels(db: &DatabaseConnection) -> Result<(), AppError> {
    StatChannelFactory::new(db)
        .guild_id(GUILD_ID.to_string())
        .kind("channels")
        .channel_id(CHANNEL_COUNT_ID.to_string())
        .build()
        .await?;
    StatChannelFactory::new(db)
        .guild_id(GUILD_ID.to_string())
        .kind("members")
        .channel_id(MEMBER_COUNT_ID.to_string())
        .build()
        .await?;

    Ok(())
}
