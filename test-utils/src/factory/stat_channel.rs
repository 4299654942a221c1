//! Statistic channel factory for creating test display channel records.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test statistic channel records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::stat_channel::StatChannelFactory;
///
/// let record = StatChannelFactory::new(&db)
///     .guild_id("987654321")
///     .kind("members")
///     .build()
///     .await?;
/// ```
pub struct StatChannelFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    kind: String,
    channel_id: String,
}

impl<'a> StatChannelFactory<'a> {
    /// Creates a new StatChannelFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: next unique counter value
    /// - kind: `"date"`
    /// - channel_id: next unique counter value
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            kind: "date".to_string(),
            channel_id: next_id().to_string(),
        }
    }

    /// Sets the guild ID.
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Sets the statistic kind (`date`, `members` or `channels`).
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Sets the display channel ID.
    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    /// Builds and inserts the statistic channel record into the database.
    ///
    /// # Returns
    /// - `Ok(entity::stat_channel::Model)` - Created record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::stat_channel::Model, DbErr> {
        let now = Utc::now();

        entity::stat_channel::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(self.guild_id),
            kind: ActiveValue::Set(self.kind),
            channel_id: ActiveValue::Set(self.channel_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a statistic channel record with default values.
///
/// Shorthand for `StatChannelFactory::new(db).build().await`.
pub async fn create_stat_channel(
    db: &DatabaseConnection,
) -> Result<entity::stat_channel::Model, DbErr> {
    StatChannelFactory::new(db).build().await
}
