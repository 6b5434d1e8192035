use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TwitterAccount::Table)
                    .if_not_exists()
                    .col(string(TwitterAccount::DiscordUserId).primary_key())
                    .col(string(TwitterAccount::TwitterUserId))
                    .col(string(TwitterAccount::TwitterScreenName))
                    .col(string(TwitterAccount::LinkedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TwitterAccount::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TwitterAccount {
    Table,
    DiscordUserId,
    TwitterUserId,
    TwitterScreenName,
    LinkedAt,
}
