//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let account = factory::create_twitter_account(&db).await?;
//! let event = factory::twitter_event_settings::TwitterEventSettingsFactory::new(&db)
//!     .discord_user_id(&account.discord_user_id)
//!     .active(true)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod twitter_account;
pub mod twitter_event_settings;
pub mod twitter_participant;

pub use twitter_account::create_twitter_account;
pub use twitter_event_settings::create_active_event;
pub use twitter_participant::create_participant;
