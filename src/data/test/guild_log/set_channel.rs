use super::*;

/// Tests assigning a channel to each category.
///
/// Verifies that every category writes to its own column and leaves the others
/// alone.
///
/// Expected: Ok(Some) with only the targeted category set
#[tokio::test]
async fn sets_each_category_independently() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = GuildLogRepository::new(db);

    let categories = LogCategory::USER_SETTABLE
        .into_iter()
        .chain([LogCategory::MemberCountStat]);

    for (index, category) in categories.enumerate() {
        let guild_id = 1000 + index as u64;
        repo.create_if_missing(guild_id).await.unwrap();

        let config = repo
            .set_channel(guild_id, category, Some(555))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(config.channel(category), Some(555));
        for other in LogCategory::USER_SETTABLE {
            if other != category {
                assert_eq!(config.channel(other), None);
            }
        }
    }

    Ok(())
}

/// Tests clearing a previously assigned channel.
///
/// Expected: Ok(Some) with the category disabled
#[tokio::test]
async fn clears_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_log::GuildLogFactory::new(db)
        .guild_id("5")
        .join_id("6")
        .lj_id("7")
        .build()
        .await?;

    let repo = GuildLogRepository::new(db);
    let config = repo
        .set_channel(5, LogCategory::Join, None)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(config.channel(LogCategory::Join), None);
    assert_eq!(config.channel(LogCategory::LumberjackLog), Some(7));

    Ok(())
}

/// Tests updating a guild that has no configuration row.
///
/// Expected: Ok(None) and no row created
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildLogRepository::new(db);
    let result = repo
        .set_channel(77, LogCategory::Edit, Some(1))
        .await
        .unwrap();

    assert!(result.is_none());
    assert!(entity::prelude::GuildLogs::find().all(db).await?.is_empty());

    Ok(())
}
