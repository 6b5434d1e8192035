//! Slash command dispatch.

use dioxus_logger::tracing;
use serenity::all::{CommandInteraction, Context, Interaction};

use crate::{
    bot::{
        command::{PoapCommand, POAP_COMMAND},
        notifier::InteractionNotifier,
    },
    error::AppError,
    model::organizer::Organizer,
    service::{
        notifier::Notifier,
        poap::{
            embed::event_ended_embed,
            end::TwitterEventEndService,
            start::{StartTwitterEventParam, TwitterEventStartService},
        },
        verify::LinkedAccountVerifier,
    },
    state::BotState,
};

/// Handles an interaction, running `/poap` commands.
///
/// The interaction is deferred before any work starts. Errors are logged and reported to
/// the member as an ephemeral message built from [`AppError::user_message`].
pub async fn handle_interaction_create(state: &BotState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    if command.data.name != POAP_COMMAND {
        return;
    }

    let notifier = InteractionNotifier::new(ctx.http.clone(), &command);

    if let Err(e) = run_poap_command(state, &ctx, &command, &notifier).await {
        match &e {
            AppError::Validation(message) => {
                tracing::debug!("POAP command rejected for {}: {}", command.user.id, message)
            }
            _ => tracing::error!("POAP command failed for {}: {}", command.user.id, e),
        }

        if let Err(send_err) = notifier.reply_ephemeral(&e.user_message()).await {
            tracing::error!("Failed to report command error: {}", send_err);
        }
    }

    notifier.finish().await;
}

async fn run_poap_command(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
    notifier: &InteractionNotifier<'_>,
) -> Result<(), AppError> {
    notifier.defer().await?;

    let organizer = organizer_from(ctx, command)?;

    match PoapCommand::parse(command)? {
        PoapCommand::Start {
            event,
            duration_minutes,
        } => {
            let verifier = LinkedAccountVerifier::new(&state.db, &state.link_page);
            let service = TwitterEventStartService::new(
                &state.db,
                &*state.twitter,
                &verifier,
                &state.scheduler,
                &state.claim_page,
            );

            let outcome = service
                .start(
                    notifier,
                    ctx.http.clone(),
                    StartTwitterEventParam {
                        organizer,
                        event,
                        duration_minutes,
                    },
                )
                .await?;

            tracing::debug!("POAP start for {} finished: {:?}", command.user.id, outcome);
        }
        PoapCommand::End => {
            let ended = TwitterEventEndService::new(&state.db)
                .end_by_organizer(organizer.user_id, organizer.guild_id)
                .await?;

            notifier.reply_embed(&event_ended_embed(&ended)).await?;
        }
    }

    Ok(())
}

/// Builds the organizer from the invoking member and server.
///
/// Falls back to the server ID when the guild is not cached.
fn organizer_from(ctx: &Context, command: &CommandInteraction) -> Result<Organizer, AppError> {
    let guild_id = command
        .guild_id
        .ok_or_else(|| AppError::validation("POAP events can only be run from a server."))?;

    let guild_name = guild_id
        .name(&ctx.cache)
        .unwrap_or_else(|| guild_id.to_string());

    Ok(Organizer {
        user_id: command.user.id.get(),
        user_tag: command.user.tag(),
        guild_id: guild_id.get(),
        guild_name,
    })
}
