use super::*;

/// Tests deleting a guild's configuration row.
///
/// Expected: Ok(1) and the row is gone
#[tokio::test]
async fn deletes_config() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_log::GuildLogFactory::new(db)
        .guild_id("11")
        .build()
        .await?;
    factory::guild_log::GuildLogFactory::new(db)
        .guild_id("12")
        .build()
        .await?;

    let repo = GuildLogRepository::new(db);
    let deleted = repo.delete(11).await.unwrap();

    assert_eq!(deleted, 1);
    assert!(repo.find_by_guild_id(11).await.unwrap().is_none());
    assert!(repo.find_by_guild_id(12).await.unwrap().is_some());

    Ok(())
}

/// Tests deleting a guild that was never configured.
///
/// Expected: Ok(0)
#[tokio::test]
async fn deleting_unknown_guild_affects_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildLogRepository::new(db);
    let deleted = repo.delete(404).await.unwrap();

    assert_eq!(deleted, 0);

    Ok(())
}
