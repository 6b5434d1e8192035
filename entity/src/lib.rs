pub mod prelude;

pub mod twitter_account;
pub mod twitter_event_settings;
pub mod twitter_participant;
