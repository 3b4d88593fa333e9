//! User service for business logic.
//!
//! This module provides the `UserService` for managing platform users. It enforces
//! unique user names ahead of the database constraint and maps missing rows to
//! `AppError::NotFound`.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, UpdateUserParams, User},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - The user name is already taken
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo
            .find_by_user_name(&params.user_name)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "User name '{}' is already taken",
                params.user_name
            )));
        }

        let user = user_repo.create(params).await?;

        tracing::info!("Created user {} ({})", user.user_name, user.id);

        Ok(user)
    }

    /// Whether an admin account exists yet.
    pub async fn admin_exists(&self) -> Result<bool, AppError> {
        let exists = UserRepository::new(self.db).admin_exists().await?;
        Ok(exists)
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get_by_id(&self, id: Uuid) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Retrieves all users ordered by user name.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;
        Ok(users)
    }

    /// Replaces a user.
    ///
    /// # Returns
    /// - `Ok(())` - User updated
    /// - `Err(AppError::Conflict)` - The new user name belongs to another user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn update(&self, params: UpdateUserParams) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        if let Some(existing) = user_repo.find_by_user_name(&params.user_name).await? {
            if existing.id != params.id {
                return Err(AppError::Conflict(format!(
                    "User name '{}' is already taken",
                    params.user_name
                )));
            }
        }

        if !user_repo.update(params).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }

    /// Deletes a user together with their current membership and pending requests.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::DbErr)` - The transaction failed and was rolled back; a user
    ///   with team history surfaces as a foreign key violation (409)
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::info!("Deleted user {}", id);

        Ok(())
    }
}
