use super::*;

/// Tests retrieving a linked account by Discord user ID.
///
/// Expected: Ok(Some(account)) with IDs converted at the boundary
#[tokio::test]
async fn returns_linked_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TwitterAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    TwitterAccountFactory::new(db)
        .discord_user_id("123456789")
        .twitter_user_id("44196397")
        .twitter_screen_name("spaces_host")
        .build()
        .await?;

    let repo = TwitterAccountRepository::new(db);
    let account = repo.find_by_discord_user_id(123456789).await?;

    let account = account.unwrap();
    assert_eq!(account.discord_user_id, 123456789);
    assert_eq!(account.twitter_user_id, "44196397");
    assert_eq!(account.twitter_screen_name, "spaces_host");

    Ok(())
}

/// Tests lookup for a member who never linked an account.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unlinked_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TwitterAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    TwitterAccountFactory::new(db)
        .discord_user_id("111111111")
        .build()
        .await?;

    let repo = TwitterAccountRepository::new(db);
    let result = repo.find_by_discord_user_id(222222222).await?;

    assert!(result.is_none());

    Ok(())
}
