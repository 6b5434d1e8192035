/// The Discord member invoking a POAP command, with the server it was invoked in.
#[derive(Debug, Clone, PartialEq)]
pub struct Organizer {
    /// Discord user ID of the member.
    pub user_id: u64,
    /// Display tag of the member (`name` or `name#1234`).
    pub user_tag: String,
    /// Discord guild ID the command was invoked in.
    pub guild_id: u64,
    /// Guild name, shown in the event embed.
    pub guild_name: String,
}
