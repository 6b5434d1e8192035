//! Event start workflow.
//!
//! Runs the `/poap start` command end to end: identity verification, live Space lookup,
//! the duplicate-event guard, activation, auto-end scheduling, organizer notification and
//! registration of the organizer as the first participant. Steps run strictly in that order
//! and each one only after the previous finished.

use std::sync::Arc;

use chrono::{Duration, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::http::Http;

use crate::{
    data::{
        twitter_event::TwitterEventSettingsRepository,
        twitter_participant::TwitterParticipantRepository,
    },
    error::{AppError, GENERIC_ERROR_MESSAGE},
    model::{
        organizer::Organizer,
        platform::PlatformType,
        twitter_event::{ActivateTwitterEventParam, ActivationOutcome, TwitterEvent},
        twitter_participant::UpsertTwitterParticipantParam,
        twitter_space::TwitterSpace,
    },
    scheduler::auto_end::AutoEndScheduler,
    service::{
        notifier::Notifier,
        poap::embed::{claim_message, event_started_embed},
        twitter::TwitterSpacesApi,
        verify::TwitterVerifier,
    },
};

pub const GREETING_MESSAGE: &str = "Oh yea, time for a POAP event!...";
pub const NOT_LIVE_MESSAGE: &str = "Uh-oh, please start twitter spaces before starting POAP event. If you have already started it, please wait a minute or two before trying again.";
pub const PRIVATE_CHANNEL_WARNING: &str =
    "⚠ **Please make sure this is a private channel.** I can help you setup the poap event! ⚠";
pub const ALREADY_ACTIVE_MESSAGE: &str = "Looks like you have an active twitter spaces event!";
pub const CLAIM_FAILED_MESSAGE: &str =
    "POAP event started but there was an issue with your claim...";
pub const DURATION_TOO_LONG_MESSAGE: &str =
    "That duration is too long, please pick a shorter event duration.";

/// Input of the start workflow.
#[derive(Debug, Clone)]
pub struct StartTwitterEventParam {
    pub organizer: Organizer,
    /// Event name as typed by the organizer.
    pub event: String,
    pub duration_minutes: i64,
}

/// How a start request concluded when no error was raised.
#[derive(Debug, Clone, PartialEq)]
pub enum StartOutcome {
    /// Verification declined; the verifier already told the member.
    Unverified,
    /// The organizer has no live Space; the member was told to start one.
    NotLive,
    Started(TwitterEvent),
}

pub struct TwitterEventStartService<'a> {
    db: &'a DatabaseConnection,
    twitter: &'a dyn TwitterSpacesApi,
    verifier: &'a dyn TwitterVerifier,
    scheduler: &'a dyn AutoEndScheduler,
    claim_page: &'a str,
}

impl<'a> TwitterEventStartService<'a> {
    /// Creates a new TwitterEventStartService.
    ///
    /// # Arguments
    /// - `db` - Database connection for event and participant records
    /// - `twitter` - Space lookup
    /// - `verifier` - Linked identity verification
    /// - `scheduler` - Auto-end scheduling
    /// - `claim_page` - Base URL of the claim page, the Space ID is appended
    pub fn new(
        db: &'a DatabaseConnection,
        twitter: &'a dyn TwitterSpacesApi,
        verifier: &'a dyn TwitterVerifier,
        scheduler: &'a dyn AutoEndScheduler,
        claim_page: &'a str,
    ) -> Self {
        Self {
            db,
            twitter,
            verifier,
            scheduler,
            claim_page,
        }
    }

    /// Starts a POAP event tied to the organizer's live Twitter Space.
    ///
    /// # Arguments
    /// - `notifier` - Delivers messages to the invoking member
    /// - `http` - Discord client handle, passed on to the auto-end job
    /// - `param` - Organizer, event name and duration
    ///
    /// # Returns
    /// - `Ok(StartOutcome::Started(event))` - Event active, auto-end scheduled, organizer notified
    /// - `Ok(StartOutcome::Unverified)` / `Ok(StartOutcome::NotLive)` - Stopped early, member told why
    /// - `Err(AppError::Validation)` - Unrepresentable duration, duplicate event, failed
    ///   activation or failed claim registration
    /// - `Err(AppError)` - Verification or notification failure
    pub async fn start(
        &self,
        notifier: &dyn Notifier,
        http: Arc<Http>,
        param: StartTwitterEventParam,
    ) -> Result<StartOutcome, AppError> {
        let organizer = &param.organizer;

        let duration = Duration::try_minutes(param.duration_minutes)
            .ok_or_else(|| AppError::validation(DURATION_TOO_LONG_MESSAGE))?;

        let Some(twitter) = self.verifier.verify(notifier, organizer).await? else {
            return Ok(StartOutcome::Unverified);
        };

        let is_dm_on = notifier.try_direct_message(GREETING_MESSAGE).await;

        let Some(space) = self.find_live_space(&twitter.twitter_user_id).await else {
            tracing::warn!(
                "No live space for twitter user {} (discord user {})",
                twitter.twitter_user_id,
                organizer.user_id
            );
            if is_dm_on {
                notifier.direct_message(NOT_LIVE_MESSAGE).await?;
            } else {
                notifier.reply_ephemeral(NOT_LIVE_MESSAGE).await?;
            }
            return Ok(StartOutcome::NotLive);
        };

        if !is_dm_on {
            notifier.follow_up(PRIVATE_CHANNEL_WARNING).await?;
        }

        notifier
            .reply(&format!(
                "Something really special is starting...:bird: {}",
                space.url()
            ))
            .await?;

        let start_time = Utc::now();
        let end_time = start_time
            .checked_add_signed(duration)
            .ok_or_else(|| AppError::validation(DURATION_TOO_LONG_MESSAGE))?;

        let activation = TwitterEventSettingsRepository::new(self.db)
            .activate(ActivateTwitterEventParam {
                discord_user_id: organizer.user_id,
                discord_server_id: organizer.guild_id,
                event: param.event.clone(),
                start_time,
                end_time,
                discord_user_tag: organizer.user_tag.clone(),
                twitter_user_id: twitter.twitter_user_id.clone(),
                twitter_space_id: space.id.clone(),
            })
            .await;

        let event = match activation {
            Ok(ActivationOutcome::Activated(event)) => event,
            Ok(ActivationOutcome::AlreadyActive) => {
                tracing::debug!(
                    "Organizer {} already has an active event in {}",
                    organizer.user_id,
                    organizer.guild_id
                );
                return Err(AppError::validation(ALREADY_ACTIVE_MESSAGE));
            }
            Err(e) => {
                tracing::warn!("Failed to activate twitter event: {}", e);
                return Err(AppError::validation(GENERIC_ERROR_MESSAGE));
            }
        };

        self.scheduler
            .schedule_auto_end(http, event.clone(), PlatformType::Twitter);

        let claim = claim_message(&format!("{}/{}", self.claim_page, space.id));
        let embed = event_started_embed(
            &event,
            &organizer.guild_name,
            PlatformType::Twitter,
            &claim,
        );

        if is_dm_on {
            notifier.direct_message_embed(&embed).await?;
        } else {
            notifier.reply(&claim).await?;
            notifier.reply_embed(&embed).await?;
        }

        if let Err(e) = TwitterParticipantRepository::new(self.db)
            .upsert(UpsertTwitterParticipantParam {
                twitter_space_id: space.id.clone(),
                twitter_user_id: twitter.twitter_user_id.clone(),
                date_of_tweet: start_time,
            })
            .await
        {
            tracing::warn!("Failed to register organizer as participant: {}", e);
            return Err(AppError::validation(CLAIM_FAILED_MESSAGE));
        }

        tracing::info!(
            "Started twitter POAP event '{}' for {} in {}",
            event.event,
            organizer.user_id,
            organizer.guild_id
        );

        Ok(StartOutcome::Started(event))
    }

    /// First Space in API order whose state is live.
    ///
    /// Lookup failures are logged and treated as "no Space".
    async fn find_live_space(&self, twitter_user_id: &str) -> Option<TwitterSpace> {
        match self.twitter.spaces_by_creator(twitter_user_id).await {
            Ok(spaces) => spaces.into_iter().find(TwitterSpace::is_live),
            Err(e) => {
                tracing::error!("Failed to look up twitter spaces: {}", e);
                None
            }
        }
    }
}
