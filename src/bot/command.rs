//! `/poap` slash command definition and option parsing.

use serenity::all::{
    CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption, ResolvedOption,
    ResolvedValue,
};

use crate::error::AppError;

pub const POAP_COMMAND: &str = "poap";
const START_SUBCOMMAND: &str = "start";
const END_SUBCOMMAND: &str = "end";
const EVENT_OPTION: &str = "event";
const DURATION_OPTION: &str = "duration";

/// Longest event accepted by the command, one week.
pub const MAX_DURATION_MINUTES: u64 = 7 * 24 * 60;

/// Builds the `/poap` command registered with Discord.
pub fn poap_command() -> CreateCommand {
    CreateCommand::new(POAP_COMMAND)
        .description("Run POAP events for your Twitter Space")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                START_SUBCOMMAND,
                "Start a POAP event for your live Twitter Space",
            )
            .add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    EVENT_OPTION,
                    "Name of the event",
                )
                .required(true),
            )
            .add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::Integer,
                    DURATION_OPTION,
                    "How long the event runs, in minutes",
                )
                .min_int_value(1)
                .max_int_value(MAX_DURATION_MINUTES)
                .required(true),
            ),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            END_SUBCOMMAND,
            "End your active POAP event",
        ))
}

/// A parsed `/poap` invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum PoapCommand {
    Start { event: String, duration_minutes: i64 },
    End,
}

impl PoapCommand {
    pub fn parse(interaction: &CommandInteraction) -> Result<Self, AppError> {
        for option in interaction.data.options() {
            match (option.name, option.value) {
                (START_SUBCOMMAND, ResolvedValue::SubCommand(options)) => {
                    return Self::parse_start(&options)
                }
                (END_SUBCOMMAND, ResolvedValue::SubCommand(_)) => return Ok(Self::End),
                _ => {}
            }
        }

        Err(AppError::validation("Unknown POAP command."))
    }

    fn parse_start(options: &[ResolvedOption<'_>]) -> Result<Self, AppError> {
        let mut event = None;
        let mut duration_minutes = None;

        for option in options {
            match (option.name, &option.value) {
                (EVENT_OPTION, ResolvedValue::String(value)) => event = Some(value.to_string()),
                (DURATION_OPTION, ResolvedValue::Integer(value)) => {
                    duration_minutes = Some(*value)
                }
                _ => {}
            }
        }

        Self::start(event, duration_minutes)
    }

    /// Validates raw `start` options.
    ///
    /// The event name is trimmed and must not be empty. The duration must be present;
    /// its lower bound is enforced by Discord through the option's minimum.
    pub fn start(event: Option<String>, duration_minutes: Option<i64>) -> Result<Self, AppError> {
        let event = event
            .map(|event| event.trim().to_string())
            .filter(|event| !event.is_empty())
            .ok_or_else(|| AppError::validation("Please provide a name for your event."))?;

        let duration_minutes = duration_minutes
            .ok_or_else(|| AppError::validation("Please provide the event duration in minutes."))?;

        Ok(Self::Start {
            event,
            duration_minutes,
        })
    }
}
