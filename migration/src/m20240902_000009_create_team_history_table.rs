use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240901_000001_create_user_table::User, m20240901_000003_create_team_table::Team,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamHistory::Table)
                    .if_not_exists()
                    .col(pk_uuid(TeamHistory::Id))
                    .col(uuid(TeamHistory::UserId))
                    .col(uuid(TeamHistory::TeamId))
                    .col(string_len(TeamHistory::Role, 16))
                    .col(timestamp_with_time_zone(TeamHistory::JoinedAt))
                    .col(timestamp_with_time_zone_null(TeamHistory::LeftAt))
                    // Neither a user nor a team with ledger rows can be removed.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_history_user_id")
                            .from(TeamHistory::Table, TeamHistory::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_history_team_id")
                            .from(TeamHistory::Table, TeamHistory::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_team_history_user_id")
                    .table(TeamHistory::Table)
                    .col(TeamHistory::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeamHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeamHistory {
    #[sea_orm(iden = "team_history")]
    Table,
    Id,
    UserId,
    TeamId,
    Role,
    JoinedAt,
    LeftAt,
}
