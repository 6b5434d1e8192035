//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary. Discord
//! snowflakes are `u64` here and timestamps are `DateTime<Utc>`; their stored text forms
//! never leave the data layer.

pub mod notification;
pub mod organizer;
pub mod platform;
pub mod twitter_account;
pub mod twitter_event;
pub mod twitter_participant;
pub mod twitter_space;
