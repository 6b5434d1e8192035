//! Twitter account factory for creating linked account rows.

use crate::factory::helpers::{iso, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating linked Twitter accounts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let account = TwitterAccountFactory::new(&db)
///     .discord_user_id("123456789")
///     .twitter_user_id("44196397")
///     .build()
///     .await?;
/// ```
pub struct TwitterAccountFactory<'a> {
    db: &'a DatabaseConnection,
    discord_user_id: String,
    twitter_user_id: String,
    twitter_screen_name: String,
}

impl<'a> TwitterAccountFactory<'a> {
    /// Creates a new TwitterAccountFactory with default values.
    ///
    /// Defaults:
    /// - discord_user_id: `"{id}"` where id is auto-incremented
    /// - twitter_user_id: `"{id + 1_000_000}"`
    /// - twitter_screen_name: `"organizer_{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            discord_user_id: id.to_string(),
            twitter_user_id: (id + 1_000_000).to_string(),
            twitter_screen_name: format!("organizer_{}", id),
        }
    }

    pub fn discord_user_id(mut self, discord_user_id: impl Into<String>) -> Self {
        self.discord_user_id = discord_user_id.into();
        self
    }

    pub fn twitter_user_id(mut self, twitter_user_id: impl Into<String>) -> Self {
        self.twitter_user_id = twitter_user_id.into();
        self
    }

    pub fn twitter_screen_name(mut self, twitter_screen_name: impl Into<String>) -> Self {
        self.twitter_screen_name = twitter_screen_name.into();
        self
    }

    /// Builds and inserts the account into the database.
    ///
    /// # Returns
    /// - `Ok(entity::twitter_account::Model)` - Created account
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::twitter_account::Model, DbErr> {
        entity::twitter_account::ActiveModel {
            discord_user_id: ActiveValue::Set(self.discord_user_id),
            twitter_user_id: ActiveValue::Set(self.twitter_user_id),
            twitter_screen_name: ActiveValue::Set(self.twitter_screen_name),
            linked_at: ActiveValue::Set(iso(Utc::now())),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a linked Twitter account with default values.
pub async fn create_twitter_account(
    db: &DatabaseConnection,
) -> Result<entity::twitter_account::Model, DbErr> {
    TwitterAccountFactory::new(db).build().await
}
