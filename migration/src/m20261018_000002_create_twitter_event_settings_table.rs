use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TwitterEventSettings::Table)
                    .if_not_exists()
                    .col(string(TwitterEventSettings::DiscordUserId))
                    .col(string(TwitterEventSettings::DiscordServerId))
                    .col(boolean(TwitterEventSettings::IsActive).default(false))
                    .col(string(TwitterEventSettings::Event))
                    .col(string(TwitterEventSettings::StartTime))
                    .col(string(TwitterEventSettings::EndTime))
                    .col(string(TwitterEventSettings::DiscordUserTag))
                    .col(string(TwitterEventSettings::TwitterUserId))
                    .col(string(TwitterEventSettings::TwitterSpaceId))
                    // One settings row per organizer and server; activation relies on this
                    // key for its conflict target.
                    .primary_key(
                        Index::create()
                            .name("pk_twitter_event_settings")
                            .col(TwitterEventSettings::DiscordUserId)
                            .col(TwitterEventSettings::DiscordServerId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_twitter_event_settings_is_active")
                    .table(TwitterEventSettings::Table)
                    .col(TwitterEventSettings::IsActive)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_twitter_event_settings_is_active")
                    .table(TwitterEventSettings::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TwitterEventSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TwitterEventSettings {
    Table,
    DiscordUserId,
    DiscordServerId,
    IsActive,
    Event,
    StartTime,
    EndTime,
    DiscordUserTag,
    TwitterUserId,
    TwitterSpaceId,
}
