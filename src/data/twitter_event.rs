//! Twitter event settings data repository for database operations.
//!
//! This module provides the `TwitterEventSettingsRepository` for managing the per-organizer
//! event settings records. Each record is keyed by (organizer, server) and holds the active
//! flag, event name, ISO start/end timestamps and the Space the event is tied to.

use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::{
    error::AppError,
    model::twitter_event::{ActivateTwitterEventParam, ActivationOutcome, TwitterEvent},
    util::time::format_iso,
};

use entity::twitter_event_settings::{ActiveModel, Column};

/// Repository providing database operations for Twitter event settings.
pub struct TwitterEventSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TwitterEventSettingsRepository<'a> {
    /// Creates a new TwitterEventSettingsRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `TwitterEventSettingsRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the settings record for an organizer in a server, active or not.
    pub async fn find_by_key(
        &self,
        discord_user_id: u64,
        discord_server_id: u64,
    ) -> Result<Option<TwitterEvent>, AppError> {
        entity::prelude::TwitterEventSettings::find_by_id((
            discord_user_id.to_string(),
            discord_server_id.to_string(),
        ))
        .one(self.db)
        .await?
        .map(TwitterEvent::from_entity)
        .transpose()
    }

    /// Gets the active event of an organizer in a server.
    ///
    /// # Returns
    /// - `Ok(Some(TwitterEvent))` - The organizer has an event running in this server
    /// - `Ok(None)` - No active event
    /// - `Err(AppError)` - Database error during query
    pub async fn find_active(
        &self,
        discord_user_id: u64,
        discord_server_id: u64,
    ) -> Result<Option<TwitterEvent>, AppError> {
        entity::prelude::TwitterEventSettings::find()
            .filter(Column::DiscordUserId.eq(discord_user_id.to_string()))
            .filter(Column::DiscordServerId.eq(discord_server_id.to_string()))
            .filter(Column::IsActive.eq(true))
            .one(self.db)
            .await?
            .map(TwitterEvent::from_entity)
            .transpose()
    }

    /// Gets every active event across all servers.
    ///
    /// Used at startup to re-schedule auto-end jobs lost on restart.
    pub async fn get_all_active(&self) -> Result<Vec<TwitterEvent>, AppError> {
        entity::prelude::TwitterEventSettings::find()
            .filter(Column::IsActive.eq(true))
            .all(self.db)
            .await?
            .into_iter()
            .map(TwitterEvent::from_entity)
            .collect()
    }

    /// Marks an organizer's event active, unless one is already running.
    ///
    /// The guard and the write are the same statement, so two concurrent starts for the
    /// same organizer and server cannot both succeed:
    /// 1. `UPDATE … WHERE key AND is_active = false` replaces every field of an inactive
    ///    record.
    /// 2. If nothing was updated, `INSERT … ON CONFLICT (key) DO NOTHING` creates the
    ///    record when none exists.
    ///
    /// If neither statement touched a row the existing record is active and nothing was
    /// written.
    ///
    /// # Arguments
    /// - `param` - Values replacing the stored record
    ///
    /// # Returns
    /// - `Ok(ActivationOutcome::Activated(event))` - Record written; `event` is the stored row
    /// - `Ok(ActivationOutcome::AlreadyActive)` - An active record exists, zero rows written
    /// - `Err(AppError)` - Database error
    pub async fn activate(
        &self,
        param: ActivateTwitterEventParam,
    ) -> Result<ActivationOutcome, AppError> {
        let discord_user_id = param.discord_user_id.to_string();
        let discord_server_id = param.discord_server_id.to_string();

        let record = ActiveModel {
            discord_user_id: ActiveValue::Set(discord_user_id.clone()),
            discord_server_id: ActiveValue::Set(discord_server_id.clone()),
            is_active: ActiveValue::Set(true),
            event: ActiveValue::Set(param.event),
            start_time: ActiveValue::Set(format_iso(param.start_time)),
            end_time: ActiveValue::Set(format_iso(param.end_time)),
            discord_user_tag: ActiveValue::Set(param.discord_user_tag),
            twitter_user_id: ActiveValue::Set(param.twitter_user_id),
            twitter_space_id: ActiveValue::Set(param.twitter_space_id),
        };

        let replaced = entity::prelude::TwitterEventSettings::update_many()
            .set(record.clone())
            .filter(Column::DiscordUserId.eq(&discord_user_id))
            .filter(Column::DiscordServerId.eq(&discord_server_id))
            .filter(Column::IsActive.eq(false))
            .exec(self.db)
            .await?;

        if replaced.rows_affected == 0 {
            let inserted = match entity::prelude::TwitterEventSettings::insert(record)
                .on_conflict(
                    OnConflict::columns([Column::DiscordUserId, Column::DiscordServerId])
                        .do_nothing()
                        .to_owned(),
                )
                .exec_without_returning(self.db)
                .await
            {
                Ok(rows) => rows,
                Err(DbErr::RecordNotInserted) => 0,
                Err(e) => return Err(e.into()),
            };

            if inserted == 0 {
                return Ok(ActivationOutcome::AlreadyActive);
            }
        }

        let stored = entity::prelude::TwitterEventSettings::find_by_id((
            discord_user_id,
            discord_server_id,
        ))
        .one(self.db)
        .await?
        .ok_or_else(|| {
            DbErr::RecordNotFound("Twitter event settings missing after activation".to_string())
        })?;

        Ok(ActivationOutcome::Activated(TwitterEvent::from_entity(
            stored,
        )?))
    }

    /// Marks an organizer's active event as ended.
    ///
    /// # Arguments
    /// - `discord_user_id` - Organizer's Discord user ID
    /// - `discord_server_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Some(TwitterEvent))` - The event that was deactivated
    /// - `Ok(None)` - No active event
    /// - `Err(AppError)` - Database error
    pub async fn deactivate(
        &self,
        discord_user_id: u64,
        discord_server_id: u64,
    ) -> Result<Option<TwitterEvent>, AppError> {
        let result = entity::prelude::TwitterEventSettings::update_many()
            .col_expr(Column::IsActive, Expr::value(false))
            .filter(Column::DiscordUserId.eq(discord_user_id.to_string()))
            .filter(Column::DiscordServerId.eq(discord_server_id.to_string()))
            .filter(Column::IsActive.eq(true))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_key(discord_user_id, discord_server_id).await
    }

    /// Ends exactly the activation described by `scheduled`.
    ///
    /// The stored record must still be active, tied to the same Space and carry the same
    /// start time. An event the organizer ended and restarted, even in the same Space, has
    /// a new start time and is left running.
    ///
    /// # Returns
    /// - `Ok(Some(TwitterEvent))` - The event that was deactivated
    /// - `Ok(None)` - That activation already ended or was replaced
    /// - `Err(AppError)` - Database error
    pub async fn deactivate_activation(
        &self,
        scheduled: &TwitterEvent,
    ) -> Result<Option<TwitterEvent>, AppError> {
        let result = entity::prelude::TwitterEventSettings::update_many()
            .col_expr(Column::IsActive, Expr::value(false))
            .filter(Column::DiscordUserId.eq(scheduled.discord_user_id.to_string()))
            .filter(Column::DiscordServerId.eq(scheduled.discord_server_id.to_string()))
            .filter(Column::IsActive.eq(true))
            .filter(Column::TwitterSpaceId.eq(scheduled.twitter_space_id.as_str()))
            .filter(Column::StartTime.eq(format_iso(scheduled.start_time)))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_key(scheduled.discord_user_id, scheduled.discord_server_id)
            .await
    }
}
