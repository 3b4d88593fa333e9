//! User factory for creating test user entities.

use crate::{factory::helpers::next_id, fixture};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .user_name("alice")
///     .role(UserRole::Player)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    user_name: String,
    display_name: Option<String>,
    avatar_url: Option<String>,
    role: UserRole,
    status: String,
    password_hash: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - user_name: `"user_{id}"` where id is auto-incremented
    /// - display_name / avatar_url: `None`
    /// - role: `UserRole::Player`
    /// - status: `"active"`
    /// - password_hash: a placeholder that never verifies
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_name: format!("user_{}", id),
            display_name: None,
            avatar_url: None,
            role: UserRole::Player,
            status: fixture::user::DEFAULT_STATUS.to_string(),
            password_hash: fixture::user::DEFAULT_PASSWORD_HASH.to_string(),
        }
    }

    pub fn user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    pub fn role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the stored password hash, e.g. one produced by the server's hasher.
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_name: ActiveValue::Set(self.user_name),
            display_name: ActiveValue::Set(self.display_name),
            avatar_url: ActiveValue::Set(self.avatar_url),
            role: ActiveValue::Set(self.role),
            status: ActiveValue::Set(self.status),
            password_hash: ActiveValue::Set(self.password_hash),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with the admin role.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role(UserRole::Admin).build().await
}
