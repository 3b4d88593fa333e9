//! Repository for CTF service definitions.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::ctf_service::{CtfService, UpsertCtfServiceParams};

pub struct CtfServiceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CtfServiceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: UpsertCtfServiceParams) -> Result<CtfService, DbErr> {
        let entity = entity::service::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(params.name),
            author: ActiveValue::Set(params.author),
            logo_url: ActiveValue::Set(params.logo_url),
            description: ActiveValue::Set(params.description),
            is_public: ActiveValue::Set(params.is_public),
        }
        .insert(self.db)
        .await?;

        Ok(CtfService::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<CtfService>, DbErr> {
        let entity = entity::prelude::Service::find_by_id(id).one(self.db).await?;

        Ok(entity.map(CtfService::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<CtfService>, DbErr> {
        let entities = entity::prelude::Service::find()
            .order_by_asc(entity::service::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(CtfService::from_entity).collect())
    }

    /// Replaces every column of a service.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was updated
    /// - `Ok(false)` - `params.id` is unset or matches no service
    pub async fn update(&self, params: UpsertCtfServiceParams) -> Result<bool, DbErr> {
        let Some(id) = params.id else {
            return Ok(false);
        };

        let result = entity::prelude::Service::update_many()
            .set(entity::service::ActiveModel {
                name: ActiveValue::Set(params.name),
                author: ActiveValue::Set(params.author),
                logo_url: ActiveValue::Set(params.logo_url),
                description: ActiveValue::Set(params.description),
                is_public: ActiveValue::Set(params.is_public),
                ..Default::default()
            })
            .filter(entity::service::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Service::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
