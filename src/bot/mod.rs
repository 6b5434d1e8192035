//! Discord bot integration exposing the `/poap` slash command.
//!
//! The bot registers its command globally once connected, restores auto-end jobs for
//! events that were still running when it last stopped, and dispatches command
//! interactions to the POAP services.
//!
//! # Gateway Intents
//!
//! Only `GUILDS` is required. Slash commands arrive as interactions regardless of
//! intents; the guild cache is used for server names shown in embeds.

pub mod command;
pub mod handler;
pub mod notifier;
pub mod start;
