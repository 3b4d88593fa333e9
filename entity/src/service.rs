use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub author: String,
    pub logo_url: Option<String>,
    pub description: Option<String>,
    pub is_public: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_service::Entity")]
    GameService,
}

impl Related<super::game_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameService.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
