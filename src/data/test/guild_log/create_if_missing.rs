use super::*;

/// Tests creating a configuration row for a new guild.
///
/// Verifies that every category starts disabled.
///
/// Expected: Ok with an all-None configuration persisted
#[tokio::test]
async fn creates_all_disabled_config() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildLogRepository::new(db);
    let config = repo.create_if_missing(42).await.unwrap();

    assert_eq!(config.guild_id, 42);
    for category in LogCategory::USER_SETTABLE {
        assert_eq!(config.channel(category), None);
    }
    assert_eq!(config.channel(LogCategory::MemberCountStat), None);

    let stored = entity::prelude::GuildLogs::find_by_id("42".to_string())
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that an existing row is left untouched.
///
/// Verifies that a guild becoming available again does not wipe configured
/// channels.
///
/// Expected: Ok with the previously stored channels
#[tokio::test]
async fn preserves_existing_channels() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_log::GuildLogFactory::new(db)
        .guild_id("42")
        .leave_id("7")
        .build()
        .await?;

    let repo = GuildLogRepository::new(db);
    let config = repo.create_if_missing(42).await.unwrap();

    assert_eq!(config.channel(LogCategory::Leave), Some(7));

    let count = entity::prelude::GuildLogs::find().all(db).await?.len();
    assert_eq!(count, 1);

    Ok(())
}
