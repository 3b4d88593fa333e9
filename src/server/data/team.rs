//! Team data repository.
//!
//! Reads always join the owning university so responses can carry its name.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use uuid::Uuid;

use crate::server::{
    data::game_result::rerank_game,
    model::team::{CreateTeamParams, Team, UpdateTeamParams},
};

pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a team and returns it with its university name.
    ///
    /// # Returns
    /// - `Ok(Team)` - The team as stored
    /// - `Err(DbErr)` - Database error, including a foreign key violation for an
    ///   unknown university
    pub async fn create(&self, params: CreateTeamParams) -> Result<Team, DbErr> {
        let team = entity::team::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            university_id: ActiveValue::Set(params.university_id),
            social_links: ActiveValue::Set(params.social_links),
            avatar_url: ActiveValue::Set(params.avatar_url),
        }
        .insert(self.db)
        .await?;

        let university = entity::prelude::University::find_by_id(team.university_id)
            .one(self.db)
            .await?;

        Ok(Team::from_entity(team, university))
    }

    /// Gets a team by id with its university.
    ///
    /// # Returns
    /// - `Ok(Some(Team))` - Team found
    /// - `Ok(None)` - No team with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Team>, DbErr> {
        let result = entity::prelude::Team::find_by_id(id)
            .find_also_related(entity::prelude::University)
            .one(self.db)
            .await?;

        Ok(result.map(|(team, university)| Team::from_entity(team, university)))
    }

    /// Gets all teams ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Team>, DbErr> {
        let results = entity::prelude::Team::find()
            .find_also_related(entity::prelude::University)
            .order_by_asc(entity::team::Column::Name)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(|(team, university)| Team::from_entity(team, university))
            .collect())
    }

    /// Replaces every column of a team by id.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was updated
    /// - `Ok(false)` - No team with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateTeamParams) -> Result<bool, DbErr> {
        let result = entity::prelude::Team::update_many()
            .set(entity::team::ActiveModel {
                name: ActiveValue::Set(params.name),
                description: ActiveValue::Set(params.description),
                university_id: ActiveValue::Set(params.university_id),
                social_links: ActiveValue::Set(params.social_links),
                avatar_url: ActiveValue::Set(params.avatar_url),
                ..Default::default()
            })
            .filter(entity::team::Column::Id.eq(params.id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether any user is or ever was a member of the team.
    ///
    /// Current members and ledger rows both reference the team with a restricting
    /// foreign key, so such a team cannot be deleted.
    pub async fn has_membership_records(&self, id: Uuid) -> Result<bool, DbErr> {
        let members = entity::prelude::Profile::find()
            .filter(entity::profile::Column::CurrentTeamId.eq(id))
            .count(self.db)
            .await?;
        if members > 0 {
            return Ok(true);
        }

        let history = entity::prelude::TeamHistory::find()
            .filter(entity::team_history::Column::TeamId.eq(id))
            .count(self.db)
            .await?;

        Ok(history > 0)
    }

    /// Deletes a team in one transaction.
    ///
    /// Pending requests and the team's results cascade, and every game the team
    /// had a result in is re-ranked before committing. A team with current members
    /// or ledger rows yields a foreign key error and nothing is committed.
    ///
    /// # Returns
    /// - `Ok(true)` - Team deleted
    /// - `Ok(false)` - No team with that id, nothing committed
    /// - `Err(DbErr)` - Statement or rollback failure
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        match delete_team_rows(&txn, id).await {
            Ok(true) => {
                txn.commit().await?;
                Ok(true)
            }
            Ok(false) => {
                txn.rollback().await?;
                Ok(false)
            }
            Err(e) => {
                tracing::debug!("Rolling back deletion of team {}: {}", id, e);
                txn.rollback().await?;
                Err(e)
            }
        }
    }
}

async fn delete_team_rows<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<bool, DbErr> {
    let game_ids: Vec<Uuid> = entity::prelude::GameResult::find()
        .select_only()
        .column(entity::game_result::Column::GameId)
        .filter(entity::game_result::Column::TeamId.eq(id))
        .into_tuple()
        .all(conn)
        .await?;

    let result = entity::prelude::Team::delete_by_id(id).exec(conn).await?;
    if result.rows_affected == 0 {
        return Ok(false);
    }

    for game_id in game_ids {
        rerank_game(conn, game_id).await?;
    }

    Ok(true)
}
