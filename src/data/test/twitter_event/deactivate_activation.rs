use super::*;

/// Activates an event for organizer `111` in server `222` and returns the stored event.
async fn activated(
    repo: &TwitterEventSettingsRepository<'_>,
    param: ActivateTwitterEventParam,
) -> Result<crate::model::twitter_event::TwitterEvent, AppError> {
    match repo.activate(param).await? {
        ActivationOutcome::Activated(event) => Ok(event),
        ActivationOutcome::AlreadyActive => panic!("expected activation"),
    }
}

/// Tests ending the activation a job was scheduled for.
///
/// Expected: Ok(Some(event)) with `is_active` cleared
#[tokio::test]
async fn ends_matching_activation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TwitterEventSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TwitterEventSettingsRepository::new(db);
    let scheduled = activated(&repo, activate_param("Community Call", "1Same")).await?;

    let ended = repo.deactivate_activation(&scheduled).await?;

    let ended = ended.expect("activation ended");
    assert!(!ended.is_active);
    assert_eq!(ended.start_time, scheduled.start_time);
    assert!(repo.find_active(111, 222).await?.is_none());

    Ok(())
}

/// Tests that an event ended and restarted in the same Space is left running.
///
/// Expected: Ok(None) and the restarted event still active
#[tokio::test]
async fn restarted_event_in_same_space_stays_active() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TwitterEventSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TwitterEventSettingsRepository::new(db);
    let first = activated(&repo, activate_param("Community Call", "1Same")).await?;
    repo.deactivate(111, 222).await?;

    let mut restart = activate_param("Community Call", "1Same");
    restart.start_time = first.start_time + Duration::minutes(5);
    restart.end_time = restart.start_time + Duration::minutes(120);
    let second = activated(&repo, restart).await?;

    let ended = repo.deactivate_activation(&first).await?;

    assert!(ended.is_none());
    let current = repo.find_active(111, 222).await?.expect("restart still active");
    assert_eq!(current, second);

    Ok(())
}

/// Tests that a newer event in another Space is left running.
///
/// Expected: Ok(None) and the newer event still active
#[tokio::test]
async fn replaced_event_in_other_space_stays_active() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TwitterEventSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TwitterEventSettingsRepository::new(db);
    let first = activated(&repo, activate_param("Community Call", "1OldSpace")).await?;
    repo.deactivate(111, 222).await?;
    activated(&repo, activate_param("Community Call", "1NewSpace")).await?;

    assert!(repo.deactivate_activation(&first).await?.is_none());
    assert_eq!(
        repo.find_active(111, 222)
            .await?
            .map(|event| event.twitter_space_id),
        Some("1NewSpace".to_string())
    );

    Ok(())
}
