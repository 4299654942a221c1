//! Domain models for statistic display channels.
//!
//! A statistic channel is a voice channel whose name is periodically rewritten to
//! show a value (the date, the member count, the channel count). The guild to channel
//! mapping is the only state the bot persists.

use crate::{
    error::{internal::InternalError, AppError},
    util::parse::parse_u64_from_string,
};

/// Value a statistic channel displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    Date,
    Members,
    Channels,
}

impl StatKind {
    pub const ALL: [StatKind; 3] = [StatKind::Date, StatKind::Members, StatKind::Channels];

    /// Stored and user-facing identifier of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatKind::Date => "date",
            StatKind::Members => "members",
            StatKind::Channels => "channels",
        }
    }

    /// Parses the identifier typed by users or stored in the database.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

/// Display channel configured for one statistic in one guild.
#[derive(Debug, Clone, PartialEq)]
pub struct StatChannel {
    pub id: i32,
    pub guild_id: u64,
    pub kind: StatKind,
    pub channel_id: u64,
}

impl StatChannel {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(StatChannel)` - Successfully converted domain model
    /// - `Err(AppError::InternalErr)` - Stored ids or kind are malformed
    pub fn from_entity(entity: entity::stat_channel::Model) -> Result<Self, AppError> {
        let kind = StatKind::parse(&entity.kind)
            .ok_or_else(|| InternalError::UnknownStatKind(entity.kind.clone()))?;

        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            kind,
            channel_id: parse_u64_from_string(entity.channel_id)?,
        })
    }
}

/// Parameters for designating a guild's display channel of one kind.
#[derive(Debug, Clone)]
pub struct UpsertStatChannelParam {
    pub guild_id: u64,
    pub kind: StatKind,
    pub channel_id: u64,
}
