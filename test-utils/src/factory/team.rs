//! Team factory for creating test team entities.
//!
//! Teams require an existing university; use
//! `helpers::create_team_with_university` when the university itself is irrelevant.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    university_id: Uuid,
    name: String,
    description: Option<String>,
    social_links: Option<String>,
    avatar_url: Option<String>,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory named `"Team {id}"` with no optional fields set.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `university_id` - University the team belongs to
    pub fn new(db: &'a DatabaseConnection, university_id: Uuid) -> Self {
        Self {
            db,
            university_id,
            name: format!("Team {}", next_id()),
            description: None,
            social_links: None,
            avatar_url: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn social_links(mut self, social_links: impl Into<String>) -> Self {
        self.social_links = Some(social_links.into());
        self
    }

    pub fn avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    /// Builds and inserts the team entity into the database.
    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            university_id: ActiveValue::Set(self.university_id),
            social_links: ActiveValue::Set(self.social_links),
            avatar_url: ActiveValue::Set(self.avatar_url),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team with default values for the given university.
pub async fn create_team(
    db: &DatabaseConnection,
    university_id: Uuid,
) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db, university_id).build().await
}
