use sea_orm_migration::{prelude::*, schema::*};

use super::m20240901_000002_create_university_table::University;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_uuid(Team::Id))
                    .col(string(Team::Name))
                    .col(text_null(Team::Description))
                    .col(uuid(Team::UniversityId))
                    .col(text_null(Team::SocialLinks))
                    .col(string_null(Team::AvatarUrl))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_university_id")
                            .from(Team::Table, Team::UniversityId)
                            .to(University::Table, University::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Team {
    #[sea_orm(iden = "teams")]
    Table,
    Id,
    Name,
    Description,
    UniversityId,
    SocialLinks,
    AvatarUrl,
}
