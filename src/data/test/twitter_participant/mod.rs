use crate::{
    data::twitter_participant::TwitterParticipantRepository, error::AppError,
    model::twitter_participant::UpsertTwitterParticipantParam,
};
use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod count_by_space;
mod upsert;
