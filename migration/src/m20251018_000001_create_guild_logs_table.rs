use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildLogs::Table)
                    .if_not_exists()
                    .col(string(GuildLogs::GuildId).primary_key())
                    .col(string_null(GuildLogs::JoinId))
                    .col(string_null(GuildLogs::LeaveId))
                    .col(string_null(GuildLogs::DeleteId))
                    .col(string_null(GuildLogs::DeleteBulk))
                    .col(string_null(GuildLogs::Edit))
                    .col(string_null(GuildLogs::Username))
                    .col(string_null(GuildLogs::Nickname))
                    .col(string_null(GuildLogs::Avatar))
                    .col(string_null(GuildLogs::StatChannel))
                    .col(string_null(GuildLogs::LjId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildLogs {
    Table,
    GuildId,
    JoinId,
    LeaveId,
    DeleteId,
    DeleteBulk,
    Edit,
    Username,
    Nickname,
    Avatar,
    StatChannel,
    LjId,
}
