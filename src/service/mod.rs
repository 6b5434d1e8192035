//! Service layer: business logic orchestrating repositories and external collaborators.
//!
//! - `notifier` - Messages and embeds sent back to the member
//! - `twitter` - Live Space lookup against the Twitter API
//! - `verify` - Linked Twitter identity verification
//! - `poap` - Starting and ending POAP events

pub mod notifier;
pub mod poap;
pub mod twitter;
pub mod verify;
