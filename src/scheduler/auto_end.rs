//! Automatic end of POAP events.
//!
//! Every activated event gets a one-shot job firing at its end time. The job deactivates
//! the event it was created for, never a newer event of the same organizer, then sends
//! the organizer a summary. Jobs live in memory only; `restore_active_events` recreates
//! them on startup from the stored active events.

use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{CreateMessage, Http, UserId};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    data::twitter_event::TwitterEventSettingsRepository,
    error::AppError,
    model::{
        platform::PlatformType,
        twitter_event::{EndedTwitterEvent, TwitterEvent},
    },
    service::poap::{embed::event_ended_embed, end::TwitterEventEndService},
};

/// Shortest delay before an auto-end job fires, used for events already past their end.
const MIN_DELAY: Duration = Duration::from_secs(1);

/// Schedules the automatic end of an event.
pub trait AutoEndScheduler: Send + Sync {
    /// Registers an auto-end for `event` without waiting for the registration.
    ///
    /// Failures are logged by the implementation and never reach the caller.
    fn schedule_auto_end(&self, http: Arc<Http>, event: TwitterEvent, platform: PlatformType);
}

/// Auto-end scheduler backed by tokio-cron-scheduler one-shot jobs.
#[derive(Clone)]
pub struct CronAutoEndScheduler {
    scheduler: JobScheduler,
    db: DatabaseConnection,
}

impl CronAutoEndScheduler {
    /// Creates and starts the underlying job scheduler.
    ///
    /// # Returns
    /// - `Ok(CronAutoEndScheduler)` - Running scheduler
    /// - `Err(AppError::SchedulerErr)` - Scheduler failed to initialize or start
    pub async fn new(db: DatabaseConnection) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new().await?;
        scheduler.start().await?;

        tracing::info!("Auto-end scheduler started");

        Ok(Self { scheduler, db })
    }

    /// Adds a one-shot job ending `event` at its end time.
    ///
    /// # Arguments
    /// - `http` - Discord HTTP client used to message the organizer
    /// - `event` - Activated event to end
    /// - `platform` - Platform the event runs on
    pub async fn add_auto_end_job(
        &self,
        http: Arc<Http>,
        event: TwitterEvent,
        platform: PlatformType,
    ) -> Result<(), AppError> {
        let delay = delay_until(event.end_time, Utc::now());
        let space_id = event.twitter_space_id.clone();

        let db = self.db.clone();
        let job = Job::new_one_shot_async(delay, move |_uuid, _lock| {
            let db = db.clone();
            let http = http.clone();
            let event = event.clone();

            Box::pin(async move {
                match platform {
                    PlatformType::Twitter => end_twitter_event(&db, &http, &event).await,
                }
            })
        })?;

        let job_id = self.scheduler.add(job).await?;

        tracing::debug!(
            "Scheduled auto-end job {} for {} space {} in {}s",
            job_id,
            platform,
            space_id,
            delay.as_secs()
        );

        Ok(())
    }

    /// Schedules auto-end jobs for every event still marked active.
    ///
    /// Called once the bot is connected. Events whose end time already passed are ended
    /// right away.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of jobs scheduled
    /// - `Err(AppError)` - Failed to read active events or add a job
    pub async fn restore_active_events(&self, http: Arc<Http>) -> Result<usize, AppError> {
        let active = TwitterEventSettingsRepository::new(&self.db)
            .get_all_active()
            .await?;
        let count = active.len();

        for event in active {
            self.add_auto_end_job(http.clone(), event, PlatformType::Twitter)
                .await?;
        }

        tracing::info!("Restored {} auto-end jobs", count);

        Ok(count)
    }
}

impl AutoEndScheduler for CronAutoEndScheduler {
    fn schedule_auto_end(&self, http: Arc<Http>, event: TwitterEvent, platform: PlatformType) {
        let scheduler = self.clone();

        tokio::spawn(async move {
            if let Err(e) = scheduler.add_auto_end_job(http, event, platform).await {
                tracing::error!("Failed to schedule auto-end job: {}", e);
            }
        });
    }
}

/// Time left until `end_time`, at least [`MIN_DELAY`].
fn delay_until(end_time: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    (end_time - now)
        .to_std()
        .unwrap_or(MIN_DELAY)
        .max(MIN_DELAY)
}

async fn end_twitter_event(db: &DatabaseConnection, http: &Arc<Http>, event: &TwitterEvent) {
    let ended = match TwitterEventEndService::new(db).end_scheduled(event).await {
        Ok(Some(ended)) => ended,
        Ok(None) => return,
        Err(e) => {
            tracing::error!(
                "Failed to auto-end twitter event for space {}: {}",
                event.twitter_space_id,
                e
            );
            return;
        }
    };

    if let Err(e) = notify_organizer(http, &ended).await {
        tracing::error!(
            "Failed to notify organizer {} of ended event: {}",
            ended.event.discord_user_id,
            e
        );
    }
}

async fn notify_organizer(http: &Arc<Http>, ended: &EndedTwitterEvent) -> Result<(), AppError> {
    let channel = UserId::new(ended.event.discord_user_id)
        .create_dm_channel(http)
        .await?;

    channel
        .send_message(
            http,
            CreateMessage::new().embed(event_ended_embed(ended).to_create_embed()),
        )
        .await?;

    Ok(())
}
