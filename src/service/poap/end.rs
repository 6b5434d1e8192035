//! Ending POAP events, by the organizer or by the auto-end job.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        twitter_event::TwitterEventSettingsRepository,
        twitter_participant::TwitterParticipantRepository,
    },
    error::AppError,
    model::twitter_event::{EndedTwitterEvent, TwitterEvent},
};

pub const NO_ACTIVE_EVENT_MESSAGE: &str =
    "Looks like you don't have an active twitter spaces event!";

/// Service ending POAP events and summarizing their participation.
///
/// Used by the `/poap end` command and by auto-end jobs. Ending only flips the active
/// flag; participation records are kept for claiming.
pub struct TwitterEventEndService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TwitterEventEndService<'a> {
    /// Creates a new TwitterEventEndService.
    ///
    /// # Arguments
    /// - `db` - Database connection for event and participant records
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ends the organizer's active event in a server.
    ///
    /// # Arguments
    /// - `discord_user_id` - Organizer's Discord user ID
    /// - `discord_server_id` - Server the event runs in
    ///
    /// # Returns
    /// - `Ok(EndedTwitterEvent)` - Deactivated event with its participant count
    /// - `Err(AppError::Validation)` - No active event
    /// - `Err(AppError)` - Database error
    pub async fn end_by_organizer(
        &self,
        discord_user_id: u64,
        discord_server_id: u64,
    ) -> Result<EndedTwitterEvent, AppError> {
        let event = TwitterEventSettingsRepository::new(self.db)
            .deactivate(discord_user_id, discord_server_id)
            .await?
            .ok_or_else(|| AppError::validation(NO_ACTIVE_EVENT_MESSAGE))?;

        self.summarize(event).await
    }

    /// Ends the event an auto-end job was scheduled for.
    ///
    /// # Arguments
    /// - `event` - The activation the job was created for
    ///
    /// # Returns
    /// - `Ok(Some(EndedTwitterEvent))` - That activation was still running and is now ended
    /// - `Ok(None)` - It was already ended or replaced by a newer activation
    /// - `Err(AppError)` - Database error
    pub async fn end_scheduled(
        &self,
        event: &TwitterEvent,
    ) -> Result<Option<EndedTwitterEvent>, AppError> {
        let Some(ended) = TwitterEventSettingsRepository::new(self.db)
            .deactivate_activation(event)
            .await?
        else {
            tracing::debug!(
                "Twitter event for space {} already ended",
                event.twitter_space_id
            );
            return Ok(None);
        };

        Ok(Some(self.summarize(ended).await?))
    }

    async fn summarize(&self, event: TwitterEvent) -> Result<EndedTwitterEvent, AppError> {
        let participant_count = TwitterParticipantRepository::new(self.db)
            .count_by_space(&event.twitter_space_id)
            .await?;

        tracing::info!(
            "Ended twitter POAP event '{}' with {} participants",
            event.event,
            participant_count
        );

        Ok(EndedTwitterEvent {
            event,
            participant_count,
        })
    }
}
