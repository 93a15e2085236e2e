use super::*;

/// Tests selecting messages past a cutoff.
///
/// Verifies that only messages strictly older than the cutoff are returned, oldest
/// first.
///
/// Expected: Ok with the two stale messages in age order
#[tokio::test]
async fn returns_only_messages_before_cutoff() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    LumberjackMessageFactory::new(db)
        .message_id("1")
        .age(Duration::days(8))
        .build()
        .await?;
    LumberjackMessageFactory::new(db)
        .message_id("2")
        .age(Duration::days(30))
        .build()
        .await?;
    LumberjackMessageFactory::new(db)
        .message_id("3")
        .age(Duration::days(1))
        .build()
        .await?;

    let repo = LumberjackMessageRepository::new(db);
    let stale = repo
        .get_older_than(Utc::now() - Duration::days(7))
        .await
        .unwrap();

    let ids: Vec<u64> = stale.iter().map(|m| m.message_id).collect();
    assert_eq!(ids, vec![2, 1]);

    Ok(())
}

/// Tests the sweep query on an empty table.
///
/// Expected: Ok with no messages
#[tokio::test]
async fn returns_empty_when_nothing_tracked() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LumberjackMessageRepository::new(db);
    let stale = repo.get_older_than(Utc::now()).await.unwrap();

    assert!(stale.is_empty());

    Ok(())
}
