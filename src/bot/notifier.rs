//! [`Notifier`] over a slash command interaction.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use dioxus_logger::tracing;
use serenity::{
    all::{
        CommandInteraction, CreateInteractionResponseFollowup, CreateMessage,
        EditInteractionResponse, Http,
    },
    async_trait,
};

use crate::{error::AppError, model::notification::EventEmbed, service::notifier::Notifier};

/// How a channel message is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delivery {
    /// Replaces the deferred "thinking" response with the message.
    EditOriginal,
    /// Removes the public deferred response and sends the message privately instead.
    ReplaceOriginal,
    FollowUp,
}

/// Picks the delivery for the next channel message.
///
/// The deferred response is public, so only a public message may take its place. An
/// ephemeral first message removes it and goes out as an ephemeral follow-up.
fn delivery(original_pending: bool, ephemeral: bool) -> Delivery {
    match (original_pending, ephemeral) {
        (true, false) => Delivery::EditOriginal,
        (true, true) => Delivery::ReplaceOriginal,
        (false, _) => Delivery::FollowUp,
    }
}

/// Sends messages for one command interaction.
///
/// [`defer`](Self::defer) acknowledges the interaction right away so slow lookups do not
/// outlast Discord's response window. The first channel message then fills the deferred
/// response and every later one is a follow-up. Direct messages go to the invoking user.
pub struct InteractionNotifier<'a> {
    http: Arc<Http>,
    interaction: &'a CommandInteraction,
    original_pending: AtomicBool,
}

impl<'a> InteractionNotifier<'a> {
    pub fn new(http: Arc<Http>, interaction: &'a CommandInteraction) -> Self {
        Self {
            http,
            interaction,
            original_pending: AtomicBool::new(false),
        }
    }

    /// Acknowledges the interaction with a public deferred response.
    ///
    /// # Returns
    /// - `Ok(())` - Interaction acknowledged; later messages fill or follow the response
    /// - `Err(AppError::DiscordErr)` - The interaction could not be acknowledged
    pub async fn defer(&self) -> Result<(), AppError> {
        self.interaction.defer(&self.http).await?;
        self.original_pending.store(true, Ordering::SeqCst);

        Ok(())
    }

    async fn send(
        &self,
        content: Option<&str>,
        embed: Option<&EventEmbed>,
        ephemeral: bool,
    ) -> Result<(), AppError> {
        let pending = self.original_pending.swap(false, Ordering::SeqCst);

        match delivery(pending, ephemeral) {
            Delivery::EditOriginal => {
                let mut edit = EditInteractionResponse::new();
                if let Some(content) = content {
                    edit = edit.content(content);
                }
                if let Some(embed) = embed {
                    edit = edit.embed(embed.to_create_embed());
                }

                self.interaction.edit_response(&self.http, edit).await?;
            }
            Delivery::ReplaceOriginal => {
                self.interaction.delete_response(&self.http).await?;
                self.follow_up_with(content, embed, ephemeral).await?;
            }
            Delivery::FollowUp => self.follow_up_with(content, embed, ephemeral).await?,
        }

        Ok(())
    }

    async fn follow_up_with(
        &self,
        content: Option<&str>,
        embed: Option<&EventEmbed>,
        ephemeral: bool,
    ) -> Result<(), AppError> {
        let mut followup = CreateInteractionResponseFollowup::new().ephemeral(ephemeral);
        if let Some(content) = content {
            followup = followup.content(content);
        }
        if let Some(embed) = embed {
            followup = followup.embed(embed.to_create_embed());
        }

        self.interaction
            .create_followup(&self.http, followup)
            .await?;

        Ok(())
    }

    /// Removes a deferred response that never received a message.
    pub async fn finish(&self) {
        if self.original_pending.swap(false, Ordering::SeqCst) {
            if let Err(e) = self.interaction.delete_response(&self.http).await {
                tracing::debug!("Failed to remove unused deferred response: {}", e);
            }
        }
    }

    async fn send_direct(&self, message: CreateMessage) -> Result<(), AppError> {
        self.interaction
            .user
            .direct_message(&self.http, message)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl<'a> Notifier for InteractionNotifier<'a> {
    async fn try_direct_message(&self, content: &str) -> bool {
        match self.send_direct(CreateMessage::new().content(content)).await {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(
                    "Direct messages closed for user {}: {}",
                    self.interaction.user.id,
                    e
                );
                false
            }
        }
    }

    async fn direct_message(&self, content: &str) -> Result<(), AppError> {
        self.send_direct(CreateMessage::new().content(content)).await
    }

    async fn direct_message_embed(&self, embed: &EventEmbed) -> Result<(), AppError> {
        self.send_direct(CreateMessage::new().embed(embed.to_create_embed()))
            .await
    }

    async fn reply(&self, content: &str) -> Result<(), AppError> {
        self.send(Some(content), None, false).await
    }

    async fn reply_ephemeral(&self, content: &str) -> Result<(), AppError> {
        self.send(Some(content), None, true).await
    }

    async fn follow_up(&self, content: &str) -> Result<(), AppError> {
        self.send(Some(content), None, false).await
    }

    async fn reply_embed(&self, embed: &EventEmbed) -> Result<(), AppError> {
        self.send(None, Some(embed), false).await
    }
}
