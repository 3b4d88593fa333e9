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
                    .table(MembershipRequest::Table)
                    .if_not_exists()
                    .col(pk_uuid(MembershipRequest::Id))
                    .col(uuid(MembershipRequest::UserId))
                    .col(uuid(MembershipRequest::TeamId))
                    .col(string_len(MembershipRequest::Role, 16).default("player"))
                    .col(
                        timestamp_with_time_zone(MembershipRequest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_membership_request_user_id")
                            .from(MembershipRequest::Table, MembershipRequest::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_membership_request_team_id")
                            .from(MembershipRequest::Table, MembershipRequest::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_membership_requests_user_team")
                    .table(MembershipRequest::Table)
                    .col(MembershipRequest::UserId)
                    .col(MembershipRequest::TeamId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MembershipRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MembershipRequest {
    #[sea_orm(iden = "team_membership_requests")]
    Table,
    Id,
    UserId,
    TeamId,
    Role,
    CreatedAt,
}
