//! Twitter participant data repository.
//!
//! Participation records mark a Twitter account as eligible to claim the POAP of a Space.
//! They are keyed by (space, account) and replaced on every registration.

use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::{
    error::AppError,
    model::twitter_participant::{TwitterParticipant, UpsertTwitterParticipantParam},
    util::time::format_iso,
};

use entity::twitter_participant::Column;

pub struct TwitterParticipantRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TwitterParticipantRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or replaces the participation record of an account in a Space.
    ///
    /// # Arguments
    /// - `param` - Space, account and registration time
    ///
    /// # Returns
    /// - `Ok(TwitterParticipant)` - The stored record
    /// - `Err(AppError)` - Database error during upsert
    pub async fn upsert(
        &self,
        param: UpsertTwitterParticipantParam,
    ) -> Result<TwitterParticipant, AppError> {
        entity::prelude::TwitterParticipant::insert(entity::twitter_participant::ActiveModel {
            twitter_space_id: ActiveValue::Set(param.twitter_space_id.clone()),
            twitter_user_id: ActiveValue::Set(param.twitter_user_id.clone()),
            date_of_tweet: ActiveValue::Set(format_iso(param.date_of_tweet)),
        })
        .on_conflict(
            OnConflict::columns([Column::TwitterSpaceId, Column::TwitterUserId])
                .update_column(Column::DateOfTweet)
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(TwitterParticipant {
            twitter_space_id: param.twitter_space_id,
            twitter_user_id: param.twitter_user_id,
            date_of_tweet: param.date_of_tweet,
        })
    }

    /// Counts participation records registered for a Space.
    pub async fn count_by_space(&self, twitter_space_id: &str) -> Result<u64, AppError> {
        let count = entity::prelude::TwitterParticipant::find()
            .filter(Column::TwitterSpaceId.eq(twitter_space_id))
            .count(self.db)
            .await?;

        Ok(count)
    }
}
