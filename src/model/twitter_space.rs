use serde::Deserialize;

/// Lifecycle state of a Twitter Space as reported by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceState {
    Live,
    Scheduled,
    Ended,
    #[serde(other)]
    Unknown,
}

/// A Space hosted by an organizer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TwitterSpace {
    pub id: String,
    pub state: SpaceState,
}

impl TwitterSpace {
    pub fn is_live(&self) -> bool {
        self.state == SpaceState::Live
    }

    /// Public listening URL for the Space.
    pub fn url(&self) -> String {
        format!("https://twitter.com/i/spaces/{}", self.id)
    }
}
