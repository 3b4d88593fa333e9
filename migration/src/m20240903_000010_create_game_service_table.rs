use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240901_000004_create_service_table::Service, m20240901_000005_create_game_table::Game,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameService::Table)
                    .if_not_exists()
                    .col(uuid(GameService::GameId))
                    .col(uuid(GameService::ServiceId))
                    .primary_key(
                        Index::create()
                            .col(GameService::GameId)
                            .col(GameService::ServiceId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_services_game_id")
                            .from(GameService::Table, GameService::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_services_service_id")
                            .from(GameService::Table, GameService::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_games_services_service_game")
                    .table(GameService::Table)
                    .col(GameService::ServiceId)
                    .col(GameService::GameId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameService::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameService {
    #[sea_orm(iden = "games_services")]
    Table,
    GameId,
    ServiceId,
}
