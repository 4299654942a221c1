//! Statistic channel repository for database operations.
//!
//! This module provides the `StatChannelRepository` for managing which voice channel
//! displays which statistic in each guild. It is the only persisted state of the bot;
//! lookups are by exact guild id.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::{
    error::AppError,
    model::stat_channel::{StatChannel, StatKind, UpsertStatChannelParam},
};

/// Repository providing database operations for statistic channel management.
pub struct StatChannelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatChannelRepository<'a> {
    /// Creates a new StatChannelRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the display channel of one kind for a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `kind` - Statistic the channel displays
    ///
    /// # Returns
    /// - `Ok(Some(StatChannel))` - Channel configured for the guild
    /// - `Ok(None)` - Guild has not set up a channel of this kind
    /// - `Err(AppError)` - Database error or malformed stored record
    pub async fn find_by_guild(
        &self,
        guild_id: u64,
        kind: StatKind,
    ) -> Result<Option<StatChannel>, AppError> {
        let entity = entity::prelude::StatChannel::find()
            .filter(entity::stat_channel::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::stat_channel::Column::Kind.eq(kind.as_str()))
            .one(self.db)
            .await?;

        entity.map(StatChannel::from_entity).transpose()
    }

    /// Gets every configured display channel of one kind across all guilds.
    ///
    /// Used by the date channel scheduler to refresh every guild at once.
    pub async fn get_all_by_kind(&self, kind: StatKind) -> Result<Vec<StatChannel>, AppError> {
        let entities = entity::prelude::StatChannel::find()
            .filter(entity::stat_channel::Column::Kind.eq(kind.as_str()))
            .all(self.db)
            .await?;

        entities.into_iter().map(StatChannel::from_entity).collect()
    }

    /// Designates the display channel of one kind for a guild.
    ///
    /// Updates the channel id of the existing record for `(guild_id, kind)` or creates
    /// a new one, so each guild has at most one channel per statistic.
    ///
    /// # Returns
    /// - `Ok(StatChannel)` - The created or updated record
    /// - `Err(AppError)` - Database error during upsert
    pub async fn upsert(&self, param: UpsertStatChannelParam) -> Result<StatChannel, AppError> {
        let existing = entity::prelude::StatChannel::find()
            .filter(entity::stat_channel::Column::GuildId.eq(param.guild_id.to_string()))
            .filter(entity::stat_channel::Column::Kind.eq(param.kind.as_str()))
            .one(self.db)
            .await?;

        let now = Utc::now();

        let entity = if let Some(existing) = existing {
            let mut active: entity::stat_channel::ActiveModel = existing.into();
            active.channel_id = ActiveValue::Set(param.channel_id.to_string());
            active.updated_at = ActiveValue::Set(now);
            active.update(self.db).await?
        } else {
            entity::stat_channel::ActiveModel {
                id: ActiveValue::NotSet,
                guild_id: ActiveValue::Set(param.guild_id.to_string()),
                kind: ActiveValue::Set(param.kind.as_str().to_string()),
                channel_id: ActiveValue::Set(param.channel_id.to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            }
            .insert(self.db)
            .await?
        };

        StatChannel::from_entity(entity)
    }
}
