use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240901_000003_create_team_table::Team, m20240901_000005_create_game_table::Game,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameResult::Table)
                    .if_not_exists()
                    .col(pk_uuid(GameResult::Id))
                    .col(uuid(GameResult::TeamId))
                    .col(uuid(GameResult::GameId))
                    .col(integer(GameResult::Score).default(0))
                    .col(integer(GameResult::Rank).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_result_team_id")
                            .from(GameResult::Table, GameResult::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_result_game_id")
                            .from(GameResult::Table, GameResult::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_results_team_game")
                    .table(GameResult::Table)
                    .col(GameResult::TeamId)
                    .col(GameResult::GameId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameResult::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameResult {
    #[sea_orm(iden = "results")]
    Table,
    Id,
    TeamId,
    GameId,
    Score,
    Rank,
}
