//! University factory for creating test university entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

pub struct UniversityFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> UniversityFactory<'a> {
    /// Creates a new UniversityFactory named `"University {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("University {}", next_id()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the university entity into the database.
    pub async fn build(self) -> Result<entity::university::Model, DbErr> {
        entity::university::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            search_name: ActiveValue::Set(self.name.to_lowercase()),
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a university with default values.
pub async fn create_university(
    db: &DatabaseConnection,
) -> Result<entity::university::Model, DbErr> {
    UniversityFactory::new(db).build().await
}
