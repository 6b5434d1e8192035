//! Bot state shared across all event handlers.
//!
//! The state is built once at startup and handed to the Discord event handler. It
//! includes:
//! - Database connection pool for event, participant and account records
//! - Twitter client for live Space lookups
//! - Auto-end scheduler for ending events when their duration elapses
//! - Claim and link page URLs sent to organizers

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    config::Config, scheduler::auto_end::CronAutoEndScheduler, service::twitter::TwitterClient,
};

/// Shared resources of the bot.
///
/// All fields are cheap to clone: the connection pool and scheduler share their inner
/// state and the Twitter client sits behind an `Arc`.
#[derive(Clone)]
pub struct BotState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Twitter API client used by the start workflow.
    pub twitter: Arc<TwitterClient>,

    /// Auto-end scheduler, also used to restore jobs when the bot reconnects.
    pub scheduler: CronAutoEndScheduler,

    /// Base URL of the POAP claim page; the Space ID is appended.
    pub claim_page: String,

    /// URL where members link their Twitter account.
    pub link_page: String,
}

impl BotState {
    /// Creates a new BotState instance.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `twitter` - Twitter API client
    /// - `scheduler` - Running auto-end scheduler
    /// - `config` - Configuration providing the claim and link pages
    pub fn new(
        db: DatabaseConnection,
        twitter: TwitterClient,
        scheduler: CronAutoEndScheduler,
        config: &Config,
    ) -> Self {
        Self {
            db,
            twitter: Arc::new(twitter),
            scheduler,
            claim_page: config.twitter_claim_page.clone(),
            link_page: config.twitter_link_page.clone(),
        }
    }
}
