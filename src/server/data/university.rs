//! University data repository.
//!
//! Universities are a lookup table for team registration, so listing and search
//! are capped to a short page ordered by name.

use sea_orm::{
    sea_query::LikeExpr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::model::university::{University, UpsertUniversityParams};

/// Maximum number of universities returned by `get_all` and `search`.
pub const UNIVERSITY_LIST_LIMIT: u64 = 10;

pub struct UniversityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UniversityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a university with a generated id.
    pub async fn create(&self, params: UpsertUniversityParams) -> Result<University, DbErr> {
        let entity = entity::university::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            search_name: ActiveValue::Set(params.name.to_lowercase()),
            name: ActiveValue::Set(params.name),
        }
        .insert(self.db)
        .await?;

        Ok(University::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<University>, DbErr> {
        let entity = entity::prelude::University::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(University::from_entity))
    }

    /// Gets the first universities ordered by name, capped at `UNIVERSITY_LIST_LIMIT`.
    pub async fn get_all(&self) -> Result<Vec<University>, DbErr> {
        let entities = entity::prelude::University::find()
            .order_by_asc(entity::university::Column::Name)
            .limit(UNIVERSITY_LIST_LIMIT)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(University::from_entity).collect())
    }

    /// Finds universities whose name contains `term`, capped at `UNIVERSITY_LIST_LIMIT`.
    ///
    /// Matches against the stored lowercased name, so case folding covers
    /// non-ASCII names too. `%` and `_` in `term` match literally.
    ///
    /// # Arguments
    /// - `term` - Substring to look for in the university name
    ///
    /// # Returns
    /// - `Ok(Vec<University>)` - Matches ordered by name (empty when none match)
    /// - `Err(DbErr)` - Database error during query
    pub async fn search(&self, term: &str) -> Result<Vec<University>, DbErr> {
        let entities = entity::prelude::University::find()
            .filter(entity::university::Column::SearchName.like(search_pattern(term)))
            .order_by_asc(entity::university::Column::Name)
            .limit(UNIVERSITY_LIST_LIMIT)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(University::from_entity).collect())
    }

    /// Renames a university.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was updated
    /// - `Ok(false)` - `params.id` is unset or matches no university
    pub async fn update(&self, params: UpsertUniversityParams) -> Result<bool, DbErr> {
        let Some(id) = params.id else {
            return Ok(false);
        };

        let result = entity::prelude::University::update_many()
            .set(entity::university::ActiveModel {
                search_name: ActiveValue::Set(params.name.to_lowercase()),
                name: ActiveValue::Set(params.name),
                ..Default::default()
            })
            .filter(entity::university::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a university. Fails with a foreign key error while teams reference it.
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::University::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

/// Builds a `LIKE` pattern matching `term` anywhere in a lowercased name.
fn search_pattern(term: &str) -> LikeExpr {
    let mut escaped = String::with_capacity(term.len());
    for c in term.to_lowercase().chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    LikeExpr::new(format!("%{escaped}%")).escape('\\')
}
