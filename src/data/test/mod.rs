mod twitter_account;
mod twitter_event;
mod twitter_participant;
