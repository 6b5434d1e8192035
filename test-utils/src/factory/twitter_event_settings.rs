//! Twitter event settings factory for creating organizer event rows.

use crate::factory::helpers::{iso, next_id};
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating event settings rows with customizable fields.
///
/// Defaults to an inactive event that started now and ends in 60 minutes.
pub struct TwitterEventSettingsFactory<'a> {
    db: &'a DatabaseConnection,
    discord_user_id: String,
    discord_server_id: String,
    is_active: bool,
    event: String,
    start_time: String,
    end_time: String,
    twitter_user_id: String,
    twitter_space_id: String,
}

impl<'a> TwitterEventSettingsFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - discord_user_id / discord_server_id: unique auto-incremented values
    /// - is_active: `false`
    /// - event: `"Event {id}"`
    /// - twitter_space_id: `"1Space{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            discord_user_id: id.to_string(),
            discord_server_id: (id + 5_000_000).to_string(),
            is_active: false,
            event: format!("Event {}", id),
            start_time: iso(now),
            end_time: iso(now + Duration::minutes(60)),
            twitter_user_id: (id + 1_000_000).to_string(),
            twitter_space_id: format!("1Space{}", id),
        }
    }

    pub fn discord_user_id(mut self, discord_user_id: impl Into<String>) -> Self {
        self.discord_user_id = discord_user_id.into();
        self
    }

    pub fn discord_server_id(mut self, discord_server_id: impl Into<String>) -> Self {
        self.discord_server_id = discord_server_id.into();
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn event(mut self, event: impl Into<String>) -> Self {
        self.event = event.into();
        self
    }

    /// Sets the end time, keeping the ISO text format used by the bot.
    pub fn end_time(mut self, end_time: chrono::DateTime<Utc>) -> Self {
        self.end_time = iso(end_time);
        self
    }

    pub fn twitter_user_id(mut self, twitter_user_id: impl Into<String>) -> Self {
        self.twitter_user_id = twitter_user_id.into();
        self
    }

    pub fn twitter_space_id(mut self, twitter_space_id: impl Into<String>) -> Self {
        self.twitter_space_id = twitter_space_id.into();
        self
    }

    /// Builds and inserts the event settings row.
    ///
    /// # Returns
    /// - `Ok(entity::twitter_event_settings::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::twitter_event_settings::Model, DbErr> {
        let tag = format!("organizer{}", self.discord_user_id);
        entity::twitter_event_settings::ActiveModel {
            discord_user_id: ActiveValue::Set(self.discord_user_id),
            discord_server_id: ActiveValue::Set(self.discord_server_id),
            is_active: ActiveValue::Set(self.is_active),
            event: ActiveValue::Set(self.event),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            discord_user_tag: ActiveValue::Set(tag),
            twitter_user_id: ActiveValue::Set(self.twitter_user_id),
            twitter_space_id: ActiveValue::Set(self.twitter_space_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active event for the given organizer and server.
///
/// Shorthand for `TwitterEventSettingsFactory::new(db).discord_user_id(..).discord_server_id(..).active(true)`.
pub async fn create_active_event(
    db: &DatabaseConnection,
    discord_user_id: impl Into<String>,
    discord_server_id: impl Into<String>,
) -> Result<entity::twitter_event_settings::Model, DbErr> {
    TwitterEventSettingsFactory::new(db)
        .discord_user_id(discord_user_id)
        .discord_server_id(discord_server_id)
        .active(true)
        .build()
        .await
}
