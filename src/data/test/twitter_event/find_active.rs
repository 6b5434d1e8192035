use super::*;

/// Tests retrieving the active event of an organizer.
///
/// Expected: Ok(Some(event))
#[tokio::test]
async fn returns_active_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TwitterEventSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_active_event(db, "111", "222").await?;

    let repo = TwitterEventSettingsRepository::new(db);
    let event = repo.find_active(111, 222).await?.unwrap();

    assert_eq!(event.event, created.event);
    assert_eq!(event.twitter_space_id, created.twitter_space_id);

    Ok(())
}

/// Tests that an ended event is not reported as active.
///
/// Expected: Ok(None), while `find_by_key` still returns the record
#[tokio::test]
async fn ignores_inactive_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TwitterEventSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    TwitterEventSettingsFactory::new(db)
        .discord_user_id("111")
        .discord_server_id("222")
        .active(false)
        .build()
        .await?;

    let repo = TwitterEventSettingsRepository::new(db);

    assert!(repo.find_active(111, 222).await?.is_none());
    assert!(repo.find_by_key(111, 222).await?.is_some());

    Ok(())
}

/// Tests that the lookup is scoped to the server.
///
/// Expected: Ok(None) for a server without an event
#[tokio::test]
async fn scoped_to_server() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TwitterEventSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_active_event(db, "111", "222").await?;

    let repo = TwitterEventSettingsRepository::new(db);

    assert!(repo.find_active(111, 333).await?.is_none());

    Ok(())
}
