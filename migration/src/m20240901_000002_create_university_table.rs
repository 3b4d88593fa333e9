use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(University::Table)
                    .if_not_exists()
                    .col(pk_uuid(University::Id))
                    .col(string(University::Name))
                    .col(string(University::SearchName))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_universities_name")
                    .table(University::Table)
                    .col(University::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(University::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum University {
    #[sea_orm(iden = "universities")]
    Table,
    Id,
    Name,
    SearchName,
}
