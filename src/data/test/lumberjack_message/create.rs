use super::*;

/// Tests recording a posted lumberjack message.
///
/// Expected: Ok with the message tracked in the database
#[tokio::test]
async fn records_message() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created_at = Utc::now();
    let repo = LumberjackMessageRepository::new(db);
    let message = repo
        .create(CreateLumberjackMessageParam {
            message_id: 10,
            channel_id: 20,
            created_at,
        })
        .await
        .unwrap();

    assert_eq!(message.message_id, 10);
    assert_eq!(message.channel_id, 20);

    let stored = entity::prelude::LumberjackMessages::find_by_id("10".to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.channel_id, "20");

    Ok(())
}

/// Tests recording the same message twice.
///
/// Expected: Err on primary key conflict
#[tokio::test]
async fn rejects_duplicate_message_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    LumberjackMessageFactory::new(db)
        .message_id("10")
        .build()
        .await?;

    let repo = LumberjackMessageRepository::new(db);
    let result = repo
        .create(CreateLumberjackMessageParam {
            message_id: 10,
            channel_id: 20,
            created_at: Utc::now(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
