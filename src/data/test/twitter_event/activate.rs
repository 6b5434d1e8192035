use super::*;

/// Tests activating an event when the organizer has no record yet.
///
/// Expected: Ok(Activated) with the stored row returned
#[tokio::test]
async fn creates_new_active_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TwitterEventSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TwitterEventSettingsRepository::new(db);
    let outcome = repo.activate(activate_param("Community Call", "space-1")).await?;

    let ActivationOutcome::Activated(event) = outcome else {
        panic!("expected activation");
    };
    assert!(event.is_active);
    assert_eq!(event.discord_user_id, 111);
    assert_eq!(event.discord_server_id, 222);
    assert_eq!(event.event, "Community Call");
    assert_eq!(event.twitter_space_id, "space-1");
    assert_eq!(event.end_time - event.start_time, Duration::minutes(30));

    Ok(())
}

/// Tests activating over an ended event of the same organizer and server.
///
/// Verifies every field is replaced and no second row is created.
///
/// Expected: Ok(Activated) with the new values
#[tokio::test]
async fn replaces_inactive_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TwitterEventSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    TwitterEventSettingsFactory::new(db)
        .discord_user_id("111")
        .discord_server_id("222")
        .event("Last Week")
        .twitter_space_id("old-space")
        .active(false)
        .build()
        .await?;

    let repo = TwitterEventSettingsRepository::new(db);
    let outcome = repo.activate(activate_param("This Week", "new-space")).await?;

    let ActivationOutcome::Activated(event) = outcome else {
        panic!("expected activation");
    };
    assert!(event.is_active);
    assert_eq!(event.event, "This Week");
    assert_eq!(event.twitter_space_id, "new-space");
    assert_eq!(event.discord_user_tag, "organizer");

    let count = entity::prelude::TwitterEventSettings::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that an active event blocks activation without touching the stored row.
///
/// Expected: Ok(AlreadyActive) and the stored row unchanged
#[tokio::test]
async fn rejects_when_event_already_active() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TwitterEventSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_active_event(db, "111", "222").await?;

    let repo = TwitterEventSettingsRepository::new(db);
    let outcome = repo.activate(activate_param("Second Try", "space-2")).await?;

    assert_eq!(outcome, ActivationOutcome::AlreadyActive);

    let stored = entity::prelude::TwitterEventSettings::find_by_id((
        "111".to_string(),
        "222".to_string(),
    ))
    .one(db)
    .await?
    .unwrap();
    assert_eq!(stored, existing);

    Ok(())
}

/// Tests that an active event in another server does not block activation.
///
/// Expected: Ok(Activated) and two rows stored
#[tokio::test]
async fn allows_active_event_in_other_server() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TwitterEventSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_active_event(db, "111", "999").await?;

    let repo = TwitterEventSettingsRepository::new(db);
    let outcome = repo.activate(activate_param("Community Call", "space-1")).await?;

    assert!(matches!(outcome, ActivationOutcome::Activated(_)));
    let count = entity::prelude::TwitterEventSettings::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}

/// Tests two starts racing for the same organizer and server.
///
/// Expected: exactly one activation succeeds
#[tokio::test]
async fn concurrent_activations_admit_one() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TwitterEventSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TwitterEventSettingsRepository::new(db);
    let (first, second) = tokio::join!(
        repo.activate(activate_param("First", "space-1")),
        repo.activate(activate_param("Second", "space-2")),
    );

    let outcomes = [first?, second?];
    let activated = outcomes
        .iter()
        .filter(|outcome| matches!(outcome, ActivationOutcome::Activated(_)))
        .count();

    assert_eq!(activated, 1);
    assert!(outcomes.contains(&ActivationOutcome::AlreadyActive));

    Ok(())
}
