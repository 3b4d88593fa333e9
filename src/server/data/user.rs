//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records. Entity models are
//! converted to domain models at this boundary so the password hash only leaves the
//! repository through `find_credentials_by_user_name`.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use entity::sea_orm_active_enums::UserRole;
use uuid::Uuid;

use crate::server::model::user::{CreateUserParams, UpdateUserParams, User, UserCredentials};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user with a generated id.
    ///
    /// # Arguments
    /// - `params` - User fields including the already hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The user as stored
    /// - `Err(DbErr)` - Database error, including a unique violation on `user_name`
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_name: ActiveValue::Set(params.user_name),
            display_name: ActiveValue::Set(params.display_name),
            avatar_url: ActiveValue::Set(params.avatar_url),
            role: ActiveValue::Set(params.role),
            status: ActiveValue::Set(params.status),
            password_hash: ActiveValue::Set(params.password_hash),
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by their unique login name.
    pub async fn find_by_user_name(&self, user_name: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::UserName.eq(user_name))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Loads the stored password hash for sign-in.
    ///
    /// # Returns
    /// - `Ok(Some(UserCredentials))` - User found
    /// - `Ok(None)` - No user with that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials_by_user_name(
        &self,
        user_name: &str,
    ) -> Result<Option<UserCredentials>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::UserName.eq(user_name))
            .one(self.db)
            .await?;

        Ok(entity.map(|e| UserCredentials {
            id: e.id,
            password_hash: e.password_hash,
        }))
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used to let the very first admin account be created without a session.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin user exists
    /// - `Ok(false)` - No admin users exist (first-time setup)
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(UserRole::Admin))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Gets all users ordered by user name.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::UserName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Replaces every column of a user by id.
    ///
    /// The password hash is only written when `params.password_hash` is set.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was updated
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateUserParams) -> Result<bool, DbErr> {
        let password_hash = match params.password_hash {
            Some(hash) => ActiveValue::Set(hash),
            None => ActiveValue::NotSet,
        };

        let result = entity::prelude::User::update_many()
            .set(entity::user::ActiveModel {
                user_name: ActiveValue::Set(params.user_name),
                display_name: ActiveValue::Set(params.display_name),
                avatar_url: ActiveValue::Set(params.avatar_url),
                role: ActiveValue::Set(params.role),
                status: ActiveValue::Set(params.status),
                password_hash,
                ..Default::default()
            })
            .filter(entity::user::Column::Id.eq(params.id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a user together with their current membership and pending requests.
    ///
    /// All statements run in one transaction. On any failure the transaction is rolled
    /// back; if the rollback itself fails that error is returned instead. A user that
    /// still has team history rows cannot be deleted and yields a foreign key error.
    ///
    /// # Returns
    /// - `Ok(true)` - User and dependent rows deleted
    /// - `Ok(false)` - No user with that id, nothing committed
    /// - `Err(DbErr)` - Statement or rollback failure
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        match delete_user_rows(&txn, id).await {
            Ok(true) => {
                txn.commit().await?;
                Ok(true)
            }
            Ok(false) => {
                txn.rollback().await?;
                Ok(false)
            }
            Err(e) => {
                tracing::debug!("Rolling back deletion of user {}: {}", id, e);
                txn.rollback().await?;
                Err(e)
            }
        }
    }
}

async fn delete_user_rows<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<bool, DbErr> {
    entity::prelude::Profile::delete_many()
        .filter(entity::profile::Column::UserId.eq(id))
        .exec(conn)
        .await?;

    entity::prelude::MembershipRequest::delete_many()
        .filter(entity::membership_request::Column::UserId.eq(id))
        .exec(conn)
        .await?;

    let result = entity::prelude::User::delete_by_id(id).exec(conn).await?;

    Ok(result.rows_affected > 0)
}
