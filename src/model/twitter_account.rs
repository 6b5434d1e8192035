use chrono::{DateTime, Utc};

use crate::{
    error::AppError,
    util::{parse::parse_u64_from_string, time::parse_iso},
};

/// A Discord member's linked Twitter account.
#[derive(Debug, Clone, PartialEq)]
pub struct TwitterAccount {
    pub discord_user_id: u64,
    pub twitter_user_id: String,
    pub twitter_screen_name: String,
    pub linked_at: DateTime<Utc>,
}

impl TwitterAccount {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(TwitterAccount)` - Converted account
    /// - `Err(AppError::InternalErr)` - Stored ID or timestamp could not be parsed
    pub fn from_entity(entity: entity::twitter_account::Model) -> Result<Self, AppError> {
        Ok(Self {
            discord_user_id: parse_u64_from_string(entity.discord_user_id)?,
            twitter_user_id: entity.twitter_user_id,
            twitter_screen_name: entity.twitter_screen_name,
            linked_at: parse_iso(&entity.linked_at)?,
        })
    }
}

/// Identity returned by a successful verification.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedTwitter {
    pub twitter_user_id: String,
    pub twitter_screen_name: String,
}

impl From<TwitterAccount> for VerifiedTwitter {
    fn from(account: TwitterAccount) -> Self {
        Self {
            twitter_user_id: account.twitter_user_id,
            twitter_screen_name: account.twitter_screen_name,
        }
    }
}
