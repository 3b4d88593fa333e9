use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub start_time: DateTimeUtc,
    pub end_time: DateTimeUtc,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_result::Entity")]
    GameResult,
    #[sea_orm(has_many = "super::game_service::Entity")]
    GameService,
}

impl Related<super::game_result::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameResult.def()
    }
}

impl Related<super::game_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameService.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
