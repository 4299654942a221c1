use super::*;

/// Tests creating a new statistic channel record.
///
/// Expected: Ok with new record created
#[tokio::test]
async fn creates_new_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StatChannelRepository::new(db);
    let record = repo
        .upsert(UpsertStatChannelParam {
            guild_id: 100,
            kind: StatKind::Members,
            channel_id: 300,
        })
        .await?;

    assert_eq!(record.guild_id, 100);
    assert_eq!(record.kind, StatKind::Members);
    assert_eq!(record.channel_id, 300);

    let stored = entity::prelude::StatChannel::find()
        .filter(entity::stat_channel::Column::GuildId.eq("100"))
        .one(db)
        .await?
        .unwrap();

    assert_eq!(stored.kind, "members");
    assert_eq!(stored.channel_id, "300");

    Ok(())
}

/// Tests replacing the channel of an existing guild/kind pair.
///
/// Expected: Ok with same record id and a single row
#[tokio::test]
async fn updates_existing_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StatChannelRepository::new(db);
    let original = repo
        .upsert(UpsertStatChannelParam {
            guild_id: 100,
            kind: StatKind::Date,
            channel_id: 300,
        })
        .await?;

    let updated = repo
        .upsert(UpsertStatChannelParam {
            guild_id: 100,
            kind: StatKind::Date,
            channel_id: 301,
        })
        .await?;

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.channel_id, 301);

    let count = entity::prelude::StatChannel::find()
        .filter(entity::stat_channel::Column::GuildId.eq("100"))
        .count(db)
        .await?;

    assert_eq!(count, 1);

    Ok(())
}

/// Tests that different kinds in one guild are stored side by side.
///
/// Expected: Ok with two rows
#[tokio::test]
async fn keeps_kinds_separate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StatChannelRepository::new(db);
    repo.upsert(UpsertStatChannelParam {
        guild_id: 100,
        kind: StatKind::Date,
        channel_id: 300,
    })
    .await?;
    repo.upsert(UpsertStatChannelParam {
        guild_id: 100,
        kind: StatKind::Channels,
        channel_id: 301,
    })
    .await?;

    let count = entity::prelude::StatChannel::find()
        .filter(entity::stat_channel::Column::GuildId.eq("100"))
        .count(db)
        .await?;

    assert_eq!(count, 2);

    Ok(())
}
