use chrono::{DateTime, Utc};

/// Claim-eligibility marker for a Twitter account in a Space.
#[derive(Debug, Clone, PartialEq)]
pub struct TwitterParticipant {
    pub twitter_space_id: String,
    pub twitter_user_id: String,
    pub date_of_tweet: DateTime<Utc>,
}

/// Parameters for replacing the participation record of (space, account).
#[derive(Debug, Clone)]
pub struct UpsertTwitterParticipantParam {
    pub twitter_space_id: String,
    pub twitter_user_id: String,
    pub date_of_tweet: DateTime<Utc>,
}
