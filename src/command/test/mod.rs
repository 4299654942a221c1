use std::time::Duration;

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use serenity::all::Permissions;
use test_utils::{builder::TestBuilder, factory::stat_channel::StatChannelFactory};

use crate::{
    bot::gateway::mock::{GatewayCall, MockGateway},
    command::{
        dispatch::{dispatch, DispatchOutcome},
        help::HelpCommand,
        registry::CommandRegistry,
        setup::SetupCommand,
        update_count::UpdateCountCommand,
        update_date::UpdateDateCommand,
        voice_mute::{MuteCommand, RemoveMuteCommand},
        CommandContext, CommandEnv,
    },
    error::AppError,
    model::{discord::ChannelKind, message::IncomingMessage},
};


const GUILD_ID: u64 = 1;
const TEXT_CHANNEL_ID: u64 = 900;
const MODERATOR_ID: u64 = 50;
const MEMBER_ID: u64 = 51;

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

/// Registry with the shipped commands, minus the mute throttle and the wall clock.
fn test_registry() -> CommandRegistry {
    CommandRegistry::with_commands(vec![
        Box::new(RemoveMuteCommand::with_throttle(Duration::ZERO)),
        Box::new(MuteCommand::with_throttle(Duration::ZERO)),
        Box::new(UpdateDateCommand::with_clock(fixed_today)),
        Box::new(UpdateCountCommand::members()),
        Box::new(UpdateCountCommand::channels()),
        Box::new(SetupCommand),
        Box::new(HelpCommand),
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

fn message(author_id: u64, content: &str) -> IncomingMessage {
    IncomingMessage {
        guild_id: Some(GUILD_ID),
        channel_id: TEXT_CHANNEL_ID,
        message_id: 7000,
        author_id,
        author_tag: format!("user#{}", author_id),
        author_is_bot: false,
        content: content.to_string(),
    }
}

/// Contents of every plain message and reply, in send order.
fn texts(gateway: &MockGateway) -> Vec<String> {
    gateway
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            GatewayCall::SendMessage { content, .. } | GatewayCall::Reply { content, .. } => {
                Some(content)
            }
            _ => None,
        })
        .collect()
}
