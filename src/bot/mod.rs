//! Discord bot runtime.
//!
//! Serenity delivers gateway events to [`handler::Handler`], which turns each event
//! into a call on the command dispatcher or one of the reconciliation services. All
//! Discord access from those layers goes through the [`gateway::GuildGateway`] trait.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Channel create, update and delete events, and the guild cache
//! - `GUILD_MESSAGES` - Messages that may carry commands
//! - `MESSAGE_CONTENT` - Message text for command parsing (privileged intent)
//! - `GUILD_MEMBERS` - Member join and leave events (privileged intent)
//! - `GUILD_VOICE_STATES` - Voice channel joins, leaves and moves
//!
//! Privileged intents must be explicitly enabled in the Discord Developer Portal
//! for the bot application.

pub mod gateway;
pub mod handler;
pub mod start;
