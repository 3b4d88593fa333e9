use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::UserRole;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_name: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub role: UserRole,
    pub status: String,
    pub password_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::profile::Entity")]
    Profile,
    #[sea_orm(has_many = "super::membership_request::Entity")]
    MembershipRequest,
    #[sea_orm(has_many = "super::team_history::Entity")]
    TeamHistory,
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl Related<super::membership_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MembershipRequest.def()
    }
}

impl Related<super::team_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamHistory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
