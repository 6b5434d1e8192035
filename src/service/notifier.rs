//! Outgoing messages for a single command invocation.

use serenity::async_trait;

use crate::{error::AppError, model::notification::EventEmbed};

/// Delivers messages to the member who invoked a command.
///
/// Direct messages go to the member privately; replies go to the channel the command was
/// used in. Implementations decide how the first reply and later follow-ups map onto the
/// underlying chat platform.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends a direct message and reports whether the member can be reached that way.
    ///
    /// Never fails; a closed DM channel is reported as `false`.
    async fn try_direct_message(&self, content: &str) -> bool;

    async fn direct_message(&self, content: &str) -> Result<(), AppError>;

    async fn direct_message_embed(&self, embed: &EventEmbed) -> Result<(), AppError>;

    /// Replies in the invoking channel, visible to everyone.
    async fn reply(&self, content: &str) -> Result<(), AppError>;

    /// Replies in the invoking channel, visible only to the member.
    async fn reply_ephemeral(&self, content: &str) -> Result<(), AppError>;

    /// Posts a follow-up message in the invoking channel.
    async fn follow_up(&self, content: &str) -> Result<(), AppError>;

    async fn reply_embed(&self, embed: &EventEmbed) -> Result<(), AppError>;
}
