//! Error types and user-facing message mapping.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves as
//! the top-level error type that wraps domain-specific errors and maps them to the text shown
//! to the Discord member through [`AppError::user_message`].

pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Message shown to members when something fails that they cannot fix themselves.
pub const GENERIC_ERROR_MESSAGE: &str = "I'm sorry something is not working, can you try again?";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants use
/// `#[from]` for automatic error conversion. `Validation` is the only variant whose message
/// is meant for the member who ran the command.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest.
    ///
    /// Raised when the Twitter API cannot be reached or its body cannot be decoded.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Unexpected data or conversion failure inside the bot.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Twitter API answered with a non-success status.
    ///
    /// # Fields
    /// - `status` - HTTP status code returned by the API
    /// - `body` - Response body, kept for logging
    #[error("Twitter API returned {status}: {body}")]
    TwitterApi { status: u16, body: String },

    /// Validation error with a message intended for direct display to the member.
    ///
    /// Never retried and never categorized further.
    #[error("{0}")]
    Validation(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Shorthand for building a validation error from any message.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    /// Text to show the member for this error.
    ///
    /// Validation messages are shown verbatim. Every other variant is replaced with a
    /// generic retry message so internal details never reach Discord.
    ///
    /// # Returns
    /// - `String` - Message ready to send as a Discord reply
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}
