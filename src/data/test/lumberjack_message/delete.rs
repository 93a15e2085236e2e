use super::*;

/// Tests removing a tracked message.
///
/// Expected: Ok(1) and the other messages remain
#[tokio::test]
async fn deletes_tracked_message() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    LumberjackMessageFactory::new(db)
        .message_id("1")
        .build()
        .await?;
    LumberjackMessageFactory::new(db)
        .message_id("2")
        .build()
        .await?;

    let repo = LumberjackMessageRepository::new(db);
    let deleted = repo.delete(1).await.unwrap();

    assert_eq!(deleted, 1);
    let remaining = entity::prelude::LumberjackMessages::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].message_id, "2");

    Ok(())
}

/// Tests removing a message that is not tracked.
///
/// Expected: Ok(0)
#[tokio::test]
async fn deleting_untracked_message_affects_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LumberjackMessageRepository::new(db);
    let deleted = repo.delete(12345).await.unwrap();

    assert_eq!(deleted, 0);

    Ok(())
}
