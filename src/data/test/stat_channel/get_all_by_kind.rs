use super::*;

/// Tests fetching every date channel across guilds.
///
/// Expected: Ok with only the date records
#[tokio::test]
async fn returns_only_requested_kind() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StatChannelFactory::new(db)
        .guild_id("1")
        .kind("date")
        .build()
        .await?;
    StatChannelFactory::new(db)
        .guild_id("2")
        .kind("date")
        .build()
        .await?;
    StatChannelFactory::new(db)
        .guild_id("1")
        .kind("channels")
        .build()
        .await?;

    let repo = StatChannelRepository::new(db);
    let result = repo.get_all_by_kind(StatKind::Date).await?;

    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|record| record.kind == StatKind::Date));

    Ok(())
}

/// Tests fetching when nothing is configured.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_unconfigured() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StatChannelRepository::new(db);
    let result = repo.get_all_by_kind(StatKind::Members).await?;

    assert!(result.is_empty());

    Ok(())
}
