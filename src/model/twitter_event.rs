//! Domain models for Twitter POAP event settings.

use chrono::{DateTime, Utc};

use crate::{
    error::AppError,
    util::{parse::parse_u64_from_string, time::parse_iso},
};

/// Event settings of an organizer in a Discord server.
///
/// There is one record per (organizer, server). It is marked active while an event is
/// running and replaced wholesale when the organizer starts the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct TwitterEvent {
    /// Discord user ID of the organizer.
    pub discord_user_id: u64,
    /// Discord guild ID the event was started in.
    pub discord_server_id: u64,
    /// Whether the event is still running.
    pub is_active: bool,
    /// Display name of the event.
    pub event: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Organizer's Discord tag at the time the event started.
    pub discord_user_tag: String,
    /// Organizer's linked Twitter account ID.
    pub twitter_user_id: String,
    /// Space the event is tied to.
    pub twitter_space_id: String,
}

impl TwitterEvent {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(TwitterEvent)` - Converted event
    /// - `Err(AppError::InternalErr)` - Stored ID or timestamp could not be parsed
    pub fn from_entity(entity: entity::twitter_event_settings::Model) -> Result<Self, AppError> {
        Ok(Self {
            discord_user_id: parse_u64_from_string(entity.discord_user_id)?,
            discord_server_id: parse_u64_from_string(entity.discord_server_id)?,
            is_active: entity.is_active,
            event: entity.event,
            start_time: parse_iso(&entity.start_time)?,
            end_time: parse_iso(&entity.end_time)?,
            discord_user_tag: entity.discord_user_tag,
            twitter_user_id: entity.twitter_user_id,
            twitter_space_id: entity.twitter_space_id,
        })
    }

    /// Event length in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }
}

/// Parameters for activating an organizer's event.
///
/// Every field replaces the stored value; nothing from a previous event survives.
#[derive(Debug, Clone)]
pub struct ActivateTwitterEventParam {
    pub discord_user_id: u64,
    pub discord_server_id: u64,
    pub event: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub discord_user_tag: String,
    pub twitter_user_id: String,
    pub twitter_space_id: String,
}

/// Result of a conditional activation.
#[derive(Debug, Clone, PartialEq)]
pub enum ActivationOutcome {
    /// The record was written and is now active.
    Activated(TwitterEvent),
    /// An active record already existed; nothing was written.
    AlreadyActive,
}

/// An event that was just deactivated, with the number of registered participants.
#[derive(Debug, Clone, PartialEq)]
pub struct EndedTwitterEvent {
    pub event: TwitterEvent,
    pub participant_count: u64,
}
