use super::*;

/// Tests finding the configured channel of a kind.
///
/// Expected: Ok(Some) with ids parsed back into u64
#[tokio::test]
async fn finds_configured_channel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StatChannelFactory::new(db)
        .guild_id("100")
        .kind("date")
        .channel_id("200")
        .build()
        .await?;

    let repo = StatChannelRepository::new(db);
    let result = repo.find_by_guild(100, StatKind::Date).await?;

    let record = result.unwrap();
    assert_eq!(record.guild_id, 100);
    assert_eq!(record.kind, StatKind::Date);
    assert_eq!(record.channel_id, 200);

    Ok(())
}

/// Tests that a record of another kind in the same guild is not returned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_other_kinds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StatChannelFactory::new(db)
        .guild_id("100")
        .kind("members")
        .build()
        .await?;

    let repo = StatChannelRepository::new(db);
    let result = repo.find_by_guild(100, StatKind::Date).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that records of other guilds are not returned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_other_guilds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StatChannelFactory::new(db)
        .guild_id("101")
        .kind("date")
        .build()
        .await?;

    let repo = StatChannelRepository::new(db);
    let result = repo.find_by_guild(100, StatKind::Date).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that a corrupt stored channel id surfaces as an internal error.
///
/// Expected: Err(InternalErr)
#[tokio::test]
async fn fails_on_malformed_channel_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StatChannelFactory::new(db)
        .guild_id("100")
        .kind("date")
        .channel_id("not-a-snowflake")
        .build()
        .await?;

    let repo = StatChannelRepository::new(db);
    let result = repo.find_by_guild(100, StatKind::Date).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
