use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Service::Table)
                    .if_not_exists()
                    .col(pk_uuid(Service::Id))
                    .col(string(Service::Name))
                    .col(string(Service::Author))
                    .col(string_null(Service::LogoUrl))
                    .col(text_null(Service::Description))
                    .col(boolean(Service::IsPublic).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Service::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Service {
    #[sea_orm(iden = "services")]
    Table,
    Id,
    Name,
    Author,
    LogoUrl,
    Description,
    IsPublic,
}
