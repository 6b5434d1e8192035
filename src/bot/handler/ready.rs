//! Ready event handler for bot initialization.
//!
//! Fired once the gateway handshake completes. Registers the `/poap` command and
//! reschedules auto-end jobs for events that are still active in the database.

use dioxus_logger::tracing;
use serenity::all::{Command, Context, Ready};

use crate::{bot::command::poap_command, state::BotState};

/// Handles the ready event when the bot connects to Discord.
///
/// Failures are logged; the bot keeps running so existing commands still work.
///
/// # Arguments
/// - `state` - Shared bot state holding the auto-end scheduler
/// - `ctx` - Discord context for command registration
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &BotState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    if let Err(e) = Command::set_global_commands(&ctx.http, vec![poap_command()]).await {
        tracing::error!("Failed to register slash commands: {:?}", e);
    }

    if let Err(e) = state
        .scheduler
        .restore_active_events(ctx.http.clone())
        .await
    {
        tracing::error!("Failed to restore auto-end jobs: {}", e);
    }
}
