use std::sync::{Arc, Mutex};

use serenity::{async_trait, http::Http};

use crate::{
    error::AppError,
    model::{
        notification::EventEmbed,
        organizer::Organizer,
        platform::PlatformType,
        twitter_account::VerifiedTwitter,
        twitter_event::TwitterEvent,
        twitter_space::{SpaceState, TwitterSpace},
    },
    scheduler::auto_end::AutoEndScheduler,
    service::{notifier::Notifier, twitter::TwitterSpacesApi, verify::TwitterVerifier},
};


/// Everything the workflow did through its collaborators, in call order.
#[derive(Debug, Clone, PartialEq)]
enum Step {
    DirectMessage(String),
    DirectMessageEmbed(EventEmbed),
    Reply(String),
    ReplyEphemeral(String),
    FollowUp(String),
    ReplyEmbed(EventEmbed),
    Scheduled(TwitterEvent, PlatformType),
}

type Journal = Arc<Mutex<Vec<Step>>>;

fn steps(journal: &Journal) -> Vec<Step> {
    journal.lock().unwrap().clone()
}

struct RecordingNotifier {
    dm_open: bool,
    journal: Journal,
}

impl RecordingNotifier {
    fn record(&self, step: Step) -> Result<(), AppError> {
        self.journal.lock().unwrap().push(step);
        Ok(())
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn try_direct_message(&self, content: &str) -> bool {
        if self.dm_open {
            self.journal
                .lock()
                .unwrap()
                .push(Step::DirectMessage(content.to_string()));
        }
        self.dm_open
    }

    async fn direct_message(&self, content: &str) -> Result<(), AppError> {
        self.record(Step::DirectMessage(content.to_string()))
    }

    async fn direct_message_embed(&self, embed: &EventEmbed) -> Result<(), AppError> {
        self.record(Step::DirectMessageEmbed(embed.clone()))
    }

    async fn reply(&self, content: &str) -> Result<(), AppError> {
        self.record(Step::Reply(content.to_string()))
    }

    async fn reply_ephemeral(&self, content: &str) -> Result<(), AppError> {
        self.record(Step::ReplyEphemeral(content.to_string()))
    }

    async fn follow_up(&self, content: &str) -> Result<(), AppError> {
        self.record(Step::FollowUp(content.to_string()))
    }

    async fn reply_embed(&self, embed: &EventEmbed) -> Result<(), AppError> {
        self.record(Step::ReplyEmbed(embed.clone()))
    }
}

/// Returns a fixed lookup result; `None` simulates an API failure.
struct StaticSpacesApi {
    spaces: Option<Vec<TwitterSpace>>,
}

#[async_trait]
impl TwitterSpacesApi for StaticSpacesApi {
    async fn spaces_by_creator(&self, _twitter_user_id: &str) -> Result<Vec<TwitterSpace>, AppError> {
        self.spaces.clone().ok_or(AppError::TwitterApi {
            status: 503,
            body: "Service Unavailable".to_string(),
        })
    }
}

struct FakeVerifier {
    twitter: Option<VerifiedTwitter>,
}

#[async_trait]
impl TwitterVerifier for FakeVerifier {
    async fn verify(
        &self,
        _notifier: &dyn Notifier,
        _organizer: &Organizer,
    ) -> Result<Option<VerifiedTwitter>, AppError> {
        Ok(self.twitter.clone())
    }
}

struct RecordingScheduler {
    journal: Journal,
}

impl AutoEndScheduler for RecordingScheduler {
    fn schedule_auto_end(&self, _http: Arc<Http>, event: TwitterEvent, platform: PlatformType) {
        self.journal
            .lock()
            .unwrap()
            .push(Step::Scheduled(event, platform));
    }
}

fn organizer() -> Organizer {
    Organizer {
        user_id: 111,
        user_tag: "organizer".to_string(),
        guild_id: 222,
        guild_name: "Builders".to_string(),
    }
}

fn verified() -> Option<VerifiedTwitter> {
    Some(VerifiedTwitter {
        twitter_user_id: "44196397".to_string(),
        twitter_screen_name: "spaces_host".to_string(),
    })
}

fn space(id: &str, state: SpaceState) -> TwitterSpace {
    TwitterSpace {
        id: id.to_string(),
        state,
    }
}

fn http() -> Arc<Http> {
    Arc::new(Http::new("test-token"))
}
