use super::*;

/// Tests counting participants only within the requested Space.
///
/// Expected: Ok(2) for the Space with two accounts
#[tokio::test]
async fn counts_only_requested_space() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TwitterParticipant)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_participant(db, "space-a", "1").await?;
    factory::create_participant(db, "space-a", "2").await?;
    factory::create_participant(db, "space-b", "1").await?;

    let repo = TwitterParticipantRepository::new(db);

    assert_eq!(repo.count_by_space("space-a").await?, 2);
    assert_eq!(repo.count_by_space("space-b").await?, 1);
    assert_eq!(repo.count_by_space("space-c").await?, 0);

    let total = entity::prelude::TwitterParticipant::find().count(db).await?;
    assert_eq!(total, 3);

    Ok(())
}
