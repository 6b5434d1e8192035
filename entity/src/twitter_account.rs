use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "twitter_account")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub discord_user_id: String,
    pub twitter_user_id: String,
    pub twitter_screen_name: String,
    pub linked_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
