use std::fmt;

/// Platform an event's live session runs on.
///
/// Passed to the auto-end scheduler so it knows which settings table owns the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformType {
    Twitter,
}

impl PlatformType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Twitter => "TWITTER",
        }
    }

    /// Human readable name used in embeds.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Twitter => "Twitter",
        }
    }
}

impl fmt::Display for PlatformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
