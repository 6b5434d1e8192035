use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "twitter_event_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub discord_user_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub discord_server_id: String,
    pub is_active: bool,
    pub event: String,
    pub start_time: String,
    pub end_time: String,
    pub discord_user_tag: String,
    pub twitter_user_id: String,
    pub twitter_space_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
