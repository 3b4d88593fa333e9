//! Game service link repository.
//!
//! A game runs a set of services; each (game, service) pair is stored at most once.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::ctf_service::CtfService;

pub struct GameServiceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameServiceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attaches a service to a game.
    ///
    /// # Returns
    /// - `Ok(true)` - The link was created
    /// - `Ok(false)` - The service was already attached
    /// - `Err(DbErr)` - Database error, including a foreign key violation for an
    ///   unknown game or service
    pub async fn link(&self, game_id: Uuid, service_id: Uuid) -> Result<bool, DbErr> {
        let existing = entity::prelude::GameServiceLink::find_by_id((game_id, service_id))
            .one(self.db)
            .await?;
        if existing.is_some() {
            return Ok(false);
        }

        insert_link(self.db, game_id, service_id).await?;

        Ok(true)
    }

    /// Detaches a service from a game.
    ///
    /// # Returns
    /// - `Ok(true)` - The link was removed
    /// - `Ok(false)` - The service was not attached to the game
    pub async fn unlink(&self, game_id: Uuid, service_id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::GameServiceLink::delete_by_id((game_id, service_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the services attached to a game, ordered by name.
    pub async fn get_services(&self, game_id: Uuid) -> Result<Vec<CtfService>, DbErr> {
        let entities = entity::prelude::Service::find()
            .inner_join(entity::prelude::GameServiceLink)
            .filter(entity::game_service::Column::GameId.eq(game_id))
            .order_by_asc(entity::service::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(CtfService::from_entity).collect())
    }
}

async fn insert_link<C: ConnectionTrait>(
    conn: &C,
    game_id: Uuid,
    service_id: Uuid,
) -> Result<(), DbErr> {
    entity::game_service::ActiveModel {
        game_id: ActiveValue::Set(game_id),
        service_id: ActiveValue::Set(service_id),
    }
    .insert(conn)
    .await?;

    Ok(())
}

/// Replaces the services attached to a game with `service_ids`.
pub(crate) async fn replace_links<C: ConnectionTrait>(
    conn: &C,
    game_id: Uuid,
    service_ids: &[Uuid],
) -> Result<(), DbErr> {
    entity::prelude::GameServiceLink::delete_many()
        .filter(entity::game_service::Column::GameId.eq(game_id))
        .exec(conn)
        .await?;

    for service_id in service_ids {
        insert_link(conn, game_id, *service_id).await?;
    }

    Ok(())
}

/// Loads the attached service ids of each game, sorted per game.
///
/// Games without services are absent from the map.
pub(crate) async fn service_ids_by_game<C: ConnectionTrait>(
    conn: &C,
    game_ids: &[Uuid],
) -> Result<HashMap<Uuid, Vec<Uuid>>, DbErr> {
    let links = entity::prelude::GameServiceLink::find()
        .filter(entity::game_service::Column::GameId.is_in(game_ids.iter().copied()))
        .order_by_asc(entity::game_service::Column::ServiceId)
        .all(conn)
        .await?;

    let mut by_game: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
    for link in links {
        by_game.entry(link.game_id).or_default().push(link.service_id);
    }

    Ok(by_game)
}
