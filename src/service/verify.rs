//! Linked Twitter identity verification.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::async_trait;

use crate::{
    data::twitter_account::TwitterAccountRepository,
    error::AppError,
    model::{organizer::Organizer, twitter_account::VerifiedTwitter},
    service::notifier::Notifier,
};

/// Resolves the Twitter identity of an organizer.
///
/// Returning `Ok(None)` means verification declined; the verifier has already told the
/// member what to do, so callers stop without sending anything else.
#[async_trait]
pub trait TwitterVerifier: Send + Sync {
    async fn verify(
        &self,
        notifier: &dyn Notifier,
        organizer: &Organizer,
    ) -> Result<Option<VerifiedTwitter>, AppError>;
}

/// Verifies organizers against the accounts linked through the web linking page.
pub struct LinkedAccountVerifier<'a> {
    db: &'a DatabaseConnection,
    link_page: &'a str,
}

impl<'a> LinkedAccountVerifier<'a> {
    /// Creates a new LinkedAccountVerifier.
    ///
    /// # Arguments
    /// - `db` - Database connection holding linked accounts
    /// - `link_page` - URL members visit to link their Twitter account
    pub fn new(db: &'a DatabaseConnection, link_page: &'a str) -> Self {
        Self { db, link_page }
    }
}

#[async_trait]
impl<'a> TwitterVerifier for LinkedAccountVerifier<'a> {
    async fn verify(
        &self,
        notifier: &dyn Notifier,
        organizer: &Organizer,
    ) -> Result<Option<VerifiedTwitter>, AppError> {
        let repo = TwitterAccountRepository::new(self.db);

        match repo.find_by_discord_user_id(organizer.user_id).await? {
            Some(account) => {
                tracing::debug!(
                    "Verified twitter account {} for discord user {}",
                    account.twitter_screen_name,
                    organizer.user_id
                );
                Ok(Some(account.into()))
            }
            None => {
                tracing::debug!("No twitter account linked for {}", organizer.user_id);
                notifier
                    .reply_ephemeral(&format!(
                        "Please link your Twitter account before starting a POAP event: {}",
                        self.link_page
                    ))
                    .await?;
                Ok(None)
            }
        }
    }
}
