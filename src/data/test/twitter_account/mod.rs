use crate::{data::twitter_account::TwitterAccountRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory::twitter_account::TwitterAccountFactory};

mod find_by_discord_user_id;
