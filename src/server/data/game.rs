//! Game data repository.
//!
//! Games are returned with their attached service ids. Writes that carry service ids
//! replace the links in the same transaction as the game row.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use crate::server::{
    data::game_service::{replace_links, service_ids_by_game},
    model::game::{Game, UpsertGameParams},
};

pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a game with a generated id and attaches its services.
    ///
    /// # Returns
    /// - `Ok(Game)` - The game as stored
    /// - `Err(DbErr)` - Database error, including a foreign key violation for an
    ///   unknown service; nothing was committed
    pub async fn create(&self, params: UpsertGameParams) -> Result<Game, DbErr> {
        let txn = self.db.begin().await?;

        match insert_game(&txn, params).await {
            Ok(game) => {
                txn.commit().await?;
                Ok(game)
            }
            Err(e) => {
                txn.rollback().await?;
                Err(e)
            }
        }
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Game>, DbErr> {
        let Some(entity) = entity::prelude::Game::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut service_ids = service_ids_by_game(self.db, &[id]).await?;

        Ok(Some(Game::from_entity(
            entity,
            service_ids.remove(&id).unwrap_or_default(),
        )))
    }

    /// Gets all games ordered by start time, earliest first.
    pub async fn get_all(&self) -> Result<Vec<Game>, DbErr> {
        let entities = entity::prelude::Game::find()
            .order_by_asc(entity::game::Column::StartTime)
            .all(self.db)
            .await?;

        let ids: Vec<Uuid> = entities.iter().map(|g| g.id).collect();
        let mut service_ids = service_ids_by_game(self.db, &ids).await?;

        Ok(entities
            .into_iter()
            .map(|entity| {
                let ids = service_ids.remove(&entity.id).unwrap_or_default();
                Game::from_entity(entity, ids)
            })
            .collect())
    }

    /// Replaces the time window and description of a game, and its services when
    /// `params.service_ids` is set. Runs in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was updated
    /// - `Ok(false)` - `params.id` is unset or matches no game, nothing committed
    pub async fn update(&self, params: UpsertGameParams) -> Result<bool, DbErr> {
        let Some(id) = params.id else {
            return Ok(false);
        };

        let txn = self.db.begin().await?;

        match update_game(&txn, id, params).await {
            Ok(true) => {
                txn.commit().await?;
                Ok(true)
            }
            Ok(false) => {
                txn.rollback().await?;
                Ok(false)
            }
            Err(e) => {
                txn.rollback().await?;
                Err(e)
            }
        }
    }

    /// Deletes a game; its results and service links cascade.
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Game::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}

async fn insert_game<C: ConnectionTrait>(
    conn: &C,
    params: UpsertGameParams,
) -> Result<Game, DbErr> {
    let entity = entity::game::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        start_time: ActiveValue::Set(params.start_time),
        end_time: ActiveValue::Set(params.end_time),
        description: ActiveValue::Set(params.description),
    }
    .insert(conn)
    .await?;

    let service_ids = params.service_ids.unwrap_or_default();
    replace_links(conn, entity.id, &service_ids).await?;

    Ok(Game::from_entity(entity, service_ids))
}

async fn update_game<C: ConnectionTrait>(
    conn: &C,
    id: Uuid,
    params: UpsertGameParams,
) -> Result<bool, DbErr> {
    let result = entity::prelude::Game::update_many()
        .set(entity::game::ActiveModel {
            start_time: ActiveValue::Set(params.start_time),
            end_time: ActiveValue::Set(params.end_time),
            description: ActiveValue::Set(params.description),
            ..Default::default()
        })
        .filter(entity::game::Column::Id.eq(id))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Ok(false);
    }

    if let Some(service_ids) = params.service_ids {
        replace_links(conn, id, &service_ids).await?;
    }

    Ok(true)
}
