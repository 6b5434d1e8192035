use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "twitter_participant")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub twitter_space_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub twitter_user_id: String,
    pub date_of_tweet: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
