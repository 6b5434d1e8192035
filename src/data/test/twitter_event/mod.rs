use crate::{
    data::twitter_event::TwitterEventSettingsRepository,
    error::AppError,
    model::twitter_event::{ActivateTwitterEventParam, ActivationOutcome},
};
use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, twitter_event_settings::TwitterEventSettingsFactory},
};

mod activate;
mod deactivate;
mod deactivate_activation;
mod find_active;
mod get_all_active;

/// Activation parameters for organizer `111` in server `222` running 30 minutes.
fn activate_param(event: &str, twitter_space_id: &str) -> ActivateTwitterEventParam {
    let start_time = Utc::now();
    ActivateTwitterEventParam {
        discord_user_id: 111,
        discord_server_id: 222,
        event: event.to_string(),
        start_time,
        end_time: start_time + Duration::minutes(30),
        discord_user_tag: "organizer".to_string(),
        twitter_user_id: "44196397".to_string(),
        twitter_space_id: twitter_space_id.to_string(),
    }
}
