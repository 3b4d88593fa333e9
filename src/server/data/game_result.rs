//! Result data repository.
//!
//! Results are unique per (team, game). Their `rank` column is derived: every
//! write re-ranks the affected games inside the same transaction, so stored
//! ranks match the scoreboard once committed.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use crate::server::model::game_result::{
    rank_standings, GameResult, Standing, UpsertGameResultParams,
};

pub struct GameResultRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameResultRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a result and re-ranks its game in the same transaction.
    ///
    /// # Returns
    /// - `Ok(GameResult)` - The result as stored, with its computed rank
    /// - `Err(DbErr)` - Database error, including a unique violation for a
    ///   duplicate (team, game) pair or a foreign key violation; nothing was committed
    pub async fn create(&self, params: UpsertGameResultParams) -> Result<GameResult, DbErr> {
        let txn = self.db.begin().await?;

        match insert_ranked(&txn, params).await {
            Ok(result) => {
                txn.commit().await?;
                Ok(result)
            }
            Err(e) => {
                txn.rollback().await?;
                Err(e)
            }
        }
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<GameResult>, DbErr> {
        let entity = entity::prelude::GameResult::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(GameResult::from_entity))
    }

    /// Gets all results grouped by game, best rank first within a game.
    pub async fn get_all(&self) -> Result<Vec<GameResult>, DbErr> {
        let entities = entity::prelude::GameResult::find()
            .order_by_asc(entity::game_result::Column::GameId)
            .order_by_asc(entity::game_result::Column::Rank)
            .order_by_asc(entity::game_result::Column::TeamId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(GameResult::from_entity).collect())
    }

    /// Gets every result recorded for a game, ordered by stored rank.
    pub async fn get_by_game(&self, game_id: Uuid) -> Result<Vec<GameResult>, DbErr> {
        let entities = entity::prelude::GameResult::find()
            .filter(entity::game_result::Column::GameId.eq(game_id))
            .order_by_asc(entity::game_result::Column::Rank)
            .order_by_asc(entity::game_result::Column::TeamId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(GameResult::from_entity).collect())
    }

    /// Finds the result of one team in one game.
    pub async fn find_by_team_and_game(
        &self,
        team_id: Uuid,
        game_id: Uuid,
    ) -> Result<Option<GameResult>, DbErr> {
        let entity = entity::prelude::GameResult::find()
            .filter(entity::game_result::Column::TeamId.eq(team_id))
            .filter(entity::game_result::Column::GameId.eq(game_id))
            .one(self.db)
            .await?;

        Ok(entity.map(GameResult::from_entity))
    }

    /// Loads the results of a game joined to team names, unranked.
    ///
    /// # Returns
    /// - `Ok(Vec<Standing>)` - One row per team with its stored rank
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_standings(&self, game_id: Uuid) -> Result<Vec<Standing>, DbErr> {
        load_standings(self.db, game_id).await
    }

    /// Replaces team, game and score of a result, then re-ranks both the game it
    /// left and the game it now belongs to. Runs in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was updated
    /// - `Ok(false)` - `params.id` is unset or matches no result, nothing committed
    pub async fn update(&self, params: UpsertGameResultParams) -> Result<bool, DbErr> {
        let Some(id) = params.id else {
            return Ok(false);
        };

        let txn = self.db.begin().await?;

        match update_ranked(&txn, id, params).await {
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

    /// Deletes a result and re-ranks its game in one transaction.
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        match delete_ranked(&txn, id).await {
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
}

async fn insert_ranked<C: ConnectionTrait>(
    conn: &C,
    params: UpsertGameResultParams,
) -> Result<GameResult, DbErr> {
    let inserted = entity::game_result::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        team_id: ActiveValue::Set(params.team_id),
        game_id: ActiveValue::Set(params.game_id),
        score: ActiveValue::Set(params.score),
        rank: ActiveValue::Set(0),
    }
    .insert(conn)
    .await?;

    rerank_game(conn, inserted.game_id).await?;

    let ranked = entity::prelude::GameResult::find_by_id(inserted.id)
        .one(conn)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("result {}", inserted.id)))?;

    Ok(GameResult::from_entity(ranked))
}

async fn update_ranked<C: ConnectionTrait>(
    conn: &C,
    id: Uuid,
    params: UpsertGameResultParams,
) -> Result<bool, DbErr> {
    let Some(existing) = entity::prelude::GameResult::find_by_id(id).one(conn).await? else {
        return Ok(false);
    };

    let game_id = params.game_id;
    entity::prelude::GameResult::update_many()
        .set(entity::game_result::ActiveModel {
            team_id: ActiveValue::Set(params.team_id),
            game_id: ActiveValue::Set(params.game_id),
            score: ActiveValue::Set(params.score),
            ..Default::default()
        })
        .filter(entity::game_result::Column::Id.eq(id))
        .exec(conn)
        .await?;

    rerank_game(conn, game_id).await?;
    if existing.game_id != game_id {
        rerank_game(conn, existing.game_id).await?;
    }

    Ok(true)
}

async fn delete_ranked<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<bool, DbErr> {
    let Some(existing) = entity::prelude::GameResult::find_by_id(id).one(conn).await? else {
        return Ok(false);
    };

    entity::prelude::GameResult::delete_by_id(id)
        .exec(conn)
        .await?;

    rerank_game(conn, existing.game_id).await?;

    Ok(true)
}

/// Recomputes and stores the rank of every result of a game.
pub(crate) async fn rerank_game<C: ConnectionTrait>(
    conn: &C,
    game_id: Uuid,
) -> Result<(), DbErr> {
    let standings = rank_standings(load_standings(conn, game_id).await?);

    for standing in &standings {
        entity::prelude::GameResult::update_many()
            .set(entity::game_result::ActiveModel {
                rank: ActiveValue::Set(standing.rank),
                ..Default::default()
            })
            .filter(entity::game_result::Column::GameId.eq(game_id))
            .filter(entity::game_result::Column::TeamId.eq(standing.team_id))
            .exec(conn)
            .await?;
    }

    tracing::debug!("Recomputed {} ranks for game {}", standings.len(), game_id);

    Ok(())
}

async fn load_standings<C: ConnectionTrait>(
    conn: &C,
    game_id: Uuid,
) -> Result<Vec<Standing>, DbErr> {
    let results = entity::prelude::GameResult::find()
        .filter(entity::game_result::Column::GameId.eq(game_id))
        .find_also_related(entity::prelude::Team)
        .all(conn)
        .await?;

    Ok(results
        .into_iter()
        .map(|(result, team)| Standing::from_entity(result, team))
        .collect())
}
