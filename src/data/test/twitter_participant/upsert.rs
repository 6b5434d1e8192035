use super::*;

/// Tests creating a participation record.
///
/// Expected: Ok with the record stored under (space, account)
#[tokio::test]
async fn creates_new_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TwitterParticipant)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TwitterParticipantRepository::new(db);
    let registered_at = Utc::now();
    repo.upsert(UpsertTwitterParticipantParam {
        twitter_space_id: "1YqGoAbCdEfGh".to_string(),
        twitter_user_id: "44196397".to_string(),
        date_of_tweet: registered_at,
    })
    .await?;

    let stored = entity::prelude::TwitterParticipant::find_by_id((
        "1YqGoAbCdEfGh".to_string(),
        "44196397".to_string(),
    ))
    .one(db)
    .await?;

    assert!(stored.is_some());
    assert_eq!(
        stored.unwrap().date_of_tweet,
        crate::util::time::format_iso(registered_at)
    );

    Ok(())
}

/// Tests that registering the same account twice replaces the record.
///
/// Expected: Ok with one record carrying the latest registration time
#[tokio::test]
async fn replaces_existing_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TwitterParticipant)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TwitterParticipantRepository::new(db);
    let first = Utc::now() - Duration::days(30);
    let second = Utc::now();

    for date_of_tweet in [first, second] {
        repo.upsert(UpsertTwitterParticipantParam {
            twitter_space_id: "1YqGoAbCdEfGh".to_string(),
            twitter_user_id: "44196397".to_string(),
            date_of_tweet,
        })
        .await?;
    }

    let records = entity::prelude::TwitterParticipant::find().all(db).await?;

    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].date_of_tweet,
        crate::util::time::format_iso(second)
    );

    Ok(())
}

/// Tests that the upsert surfaces storage failures.
///
/// Expected: Err when the participant table does not exist
#[tokio::test]
async fn fails_without_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TwitterAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TwitterParticipantRepository::new(db);
    let result = repo
        .upsert(UpsertTwitterParticipantParam {
            twitter_space_id: "1YqGoAbCdEfGh".to_string(),
            twitter_user_id: "44196397".to_string(),
            date_of_tweet: Utc::now(),
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
