use sea_orm::entity::prelude::*;

/// Platform-wide role of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum UserRole {
    #[sea_orm(string_value = "admin")]
    Admin,
    #[sea_orm(string_value = "player")]
    Player,
    #[sea_orm(string_value = "guest")]
    Guest,
}

/// Role a user holds inside a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum TeamRole {
    #[sea_orm(string_value = "owner")]
    Owner,
    #[sea_orm(string_value = "captain")]
    Captain,
    #[sea_orm(string_value = "vice_captain")]
    ViceCaptain,
    #[sea_orm(string_value = "player")]
    Player,
    #[sea_orm(string_value = "guest")]
    Guest,
}
