use super::*;

/// Tests finding an existing configuration row.
///
/// Verifies that stored channel ids are parsed back into the domain model.
///
/// Expected: Ok(Some) with the stored channels
#[tokio::test]
async fn finds_existing_config() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_log::GuildLogFactory::new(db)
        .guild_id("100")
        .join_id("200")
        .stat_channel("300")
        .build()
        .await?;

    let repo = GuildLogRepository::new(db);
    let config = repo.find_by_guild_id(100).await.unwrap().unwrap();

    assert_eq!(config.guild_id, 100);
    assert_eq!(config.channel(LogCategory::Join), Some(200));
    assert_eq!(config.channel(LogCategory::MemberCountStat), Some(300));
    assert_eq!(config.channel(LogCategory::Leave), None);

    Ok(())
}

/// Tests looking up a guild with no configuration row.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_log::create_guild_log(db).await?;

    let repo = GuildLogRepository::new(db);
    let result = repo.find_by_guild_id(999_999_999).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
