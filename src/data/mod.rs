//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the bot. Repositories use SeaORM entity models internally and return
//! domain models to keep the services free of storage concerns.

pub mod twitter_account;
pub mod twitter_event;
pub mod twitter_participant;

#[cfg(test)]
mod test;
