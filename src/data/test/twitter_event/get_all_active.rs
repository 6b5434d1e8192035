use super::*;

/// Tests listing active events across servers.
///
/// Expected: Ok with only the active events
#[tokio::test]
async fn returns_only_active_events() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TwitterEventSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_active_event(db, "111", "222").await?;
    factory::create_active_event(db, "333", "444").await?;
    TwitterEventSettingsFactory::new(db).active(false).build().await?;

    let repo = TwitterEventSettingsRepository::new(db);
    let mut active = repo.get_all_active().await?;
    active.sort_by_key(|event| event.discord_user_id);

    assert_eq!(active.len(), 2);
    assert_eq!(active[0].discord_user_id, 111);
    assert_eq!(active[1].discord_user_id, 333);
    assert!(active.iter().all(|event| event.is_active));

    Ok(())
}

/// Tests listing when nothing is running.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_when_none_active() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TwitterEventSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TwitterEventSettingsRepository::new(db);

    assert!(repo.get_all_active().await?.is_empty());

    Ok(())
}
