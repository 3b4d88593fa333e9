//! Service factory for creating test service definitions.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

pub struct ServiceFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    author: String,
    logo_url: Option<String>,
    description: Option<String>,
    is_public: bool,
}

impl<'a> ServiceFactory<'a> {
    /// Creates a new ServiceFactory for a private service named `"Service {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Service {}", next_id()),
            author: "Test Author".to_string(),
            logo_url: None,
            description: None,
            is_public: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn logo_url(mut self, logo_url: impl Into<String>) -> Self {
        self.logo_url = Some(logo_url.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    /// Builds and inserts the service entity into the database.
    pub async fn build(self) -> Result<entity::service::Model, DbErr> {
        entity::service::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            author: ActiveValue::Set(self.author),
            logo_url: ActiveValue::Set(self.logo_url),
            description: ActiveValue::Set(self.description),
            is_public: ActiveValue::Set(self.is_public),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a service with default values.
pub async fn create_service(db: &DatabaseConnection) -> Result<entity::service::Model, DbErr> {
    ServiceFactory::new(db).build().await
}
