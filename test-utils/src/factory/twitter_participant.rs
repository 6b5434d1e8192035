//! Twitter participant factory for creating claim-eligibility rows.

use crate::factory::helpers::iso;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a participant row for a Space, registered now.
///
/// # Arguments
/// - `db` - Database connection
/// - `twitter_space_id` - Space the participant attended
/// - `twitter_user_id` - Participant's Twitter account ID
///
/// # Returns
/// - `Ok(entity::twitter_participant::Model)` - Created row
/// - `Err(DbErr)` - Database error during insert (including duplicate key)
pub async fn create_participant(
    db: &DatabaseConnection,
    twitter_space_id: impl Into<String>,
    twitter_user_id: impl Into<String>,
) -> Result<entity::twitter_participant::Model, DbErr> {
    entity::twitter_participant::ActiveModel {
        twitter_space_id: ActiveValue::Set(twitter_space_id.into()),
        twitter_user_id: ActiveValue::Set(twitter_user_id.into()),
        date_of_tweet: ActiveValue::Set(iso(Utc::now())),
    }
    .insert(db)
    .await
}
