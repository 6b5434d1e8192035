use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TwitterParticipant::Table)
                    .if_not_exists()
                    .col(string(TwitterParticipant::TwitterSpaceId))
                    .col(string(TwitterParticipant::TwitterUserId))
                    .col(string(TwitterParticipant::DateOfTweet))
                    .primary_key(
                        Index::create()
                            .name("pk_twitter_participant")
                            .col(TwitterParticipant::TwitterSpaceId)
                            .col(TwitterParticipant::TwitterUserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TwitterParticipant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TwitterParticipant {
    Table,
    TwitterSpaceId,
    TwitterUserId,
    DateOfTweet,
}
