pub use super::twitter_account::Entity as TwitterAccount;
pub use super::twitter_event_settings::Entity as TwitterEventSettings;
pub use super::twitter_participant::Entity as TwitterParticipant;
