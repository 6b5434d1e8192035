//! Linked Twitter account lookups.

use sea_orm::{DatabaseConnection, EntityTrait};

use crate::{error::AppError, model::twitter_account::TwitterAccount};

/// Repository providing read access to linked Twitter accounts.
///
/// Rows are written by the account-linking web flow; the bot only reads them to verify
/// organizers.
pub struct TwitterAccountRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TwitterAccountRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the Twitter account linked to a Discord user.
    ///
    /// # Arguments
    /// - `discord_user_id` - Discord user ID
    ///
    /// # Returns
    /// - `Ok(Some(TwitterAccount))` - The user has a linked account
    /// - `Ok(None)` - No account linked
    /// - `Err(AppError)` - Database error or unparsable stored row
    pub async fn find_by_discord_user_id(
        &self,
        discord_user_id: u64,
    ) -> Result<Option<TwitterAccount>, AppError> {
        entity::prelude::TwitterAccount::find_by_id(discord_user_id.to_string())
            .one(self.db)
            .await?
            .map(TwitterAccount::from_entity)
            .transpose()
    }
}
