use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create table
        manager
            .create_table(
                Table::create()
                    .table(GithubEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(GithubEvent::Id))
                    .col(string(GithubEvent::EventType).not_null())
                    .col(json(GithubEvent::EventData).not_null())
                    .col(string(GithubEvent::ChannelId).not_null())
                    .col(string_null(GithubEvent::MessageId))
                    .col(
                        timestamp(GithubEvent::ProcessedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index for event type lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_github_event_event_type")
                    .table(GithubEvent::Table)
                    .col(GithubEvent::EventType)
                    .to_owned(),
            )
            .await?;

        // Create index for time-ordered audit queries
        manager
            .create_index(
                Index::create()
                    .name("idx_github_event_processed_at")
                    .table(GithubEvent::Table)
                    .col(GithubEvent::ProcessedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes first
        manager
            .drop_index(
                Index::drop()
                    .name("idx_github_event_processed_at")
                    .table(GithubEvent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_github_event_event_type")
                    .table(GithubEvent::Table)
                    .to_owned(),
            )
            .await?;

        // Drop table
        manager
            .drop_table(Table::drop().table(GithubEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GithubEvent {
    Table,
    Id,
    EventType,
    EventData,
    ChannelId,
    MessageId,
    ProcessedAt,
}
