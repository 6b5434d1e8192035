use super::*;

/// Tests ending an organizer's active event.
///
/// Expected: Ok(Some(event)) with `is_active` cleared
#[tokio::test]
async fn deactivates_active_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TwitterEventSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_active_event(db, "111", "222").await?;

    let repo = TwitterEventSettingsRepository::new(db);
    let ended = repo.deactivate(111, 222).await?;

    assert!(!ended.unwrap().is_active);
    assert!(repo.find_active(111, 222).await?.is_none());

    Ok(())
}

/// Tests that nothing is reported when there is no active event.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_active_event() -> Result<(), AppError> {
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

    assert!(repo.deactivate(111, 222).await?.is_none());

    Ok(())
}
