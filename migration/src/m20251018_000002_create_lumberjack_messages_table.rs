use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LumberjackMessages::Table)
                    .if_not_exists()
                    .col(string(LumberjackMessages::MessageId).primary_key())
                    .col(string(LumberjackMessages::ChannelId))
                    .col(
                        timestamp_with_time_zone(LumberjackMessages::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // The sweeper scans by age
        manager
            .create_index(
                Index::create()
                    .name("idx_lumberjack_messages_created_at")
                    .table(LumberjackMessages::Table)
                    .col(LumberjackMessages::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_lumberjack_messages_created_at")
                    .table(LumberjackMessages::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LumberjackMessages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LumberjackMessages {
    Table,
    MessageId,
    ChannelId,
    CreatedAt,
}
