//! Embeds announcing event start and end.

use crate::model::{
    notification::EventEmbed,
    platform::PlatformType,
    twitter_event::{EndedTwitterEvent, TwitterEvent},
};

pub const EVENT_STARTED_TITLE: &str = "Twitter Event Started";
pub const EVENT_ENDED_TITLE: &str = "Twitter Event Ended";

/// Claim instructions handed to the organizer, in the reply and in the started embed.
pub fn claim_message(claim_url: &str) -> String {
    format!(
        "POAP event setup! Please hand out {} to your participants!",
        claim_url
    )
}

/// Builds the embed sent to the organizer once an event is active.
///
/// # Arguments
/// - `event` - The activated event
/// - `guild_name` - Name of the server the event runs in
/// - `platform` - Platform of the live session
/// - `claim_message` - Claim instructions including the link participants use
pub fn event_started_embed(
    event: &TwitterEvent,
    guild_name: &str,
    platform: PlatformType,
    claim_message: &str,
) -> EventEmbed {
    EventEmbed::new(EVENT_STARTED_TITLE)
        .field("Event", &event.event, true)
        .field("Organizer", &event.discord_user_tag, true)
        .field("Discord Server", guild_name, true)
        .field("Platform", platform.display_name(), true)
        .field(
            "Duration",
            format!("{} minutes", event.duration_minutes()),
            true,
        )
        .field("POAP Participation Claim Link", claim_message, false)
}

pub fn event_ended_embed(ended: &EndedTwitterEvent) -> EventEmbed {
    EventEmbed::new(EVENT_ENDED_TITLE)
        .field("Event", &ended.event.event, true)
        .field("Organizer", &ended.event.discord_user_tag, true)
        .field("Platform", PlatformType::Twitter.display_name(), true)
        .field(
            "Participants",
            ended.participant_count.to_string(),
            true,
        )
        .field(
            "Space",
            format!("https://twitter.com/i/spaces/{}", ended.event.twitter_space_id),
            false,
        )
}
