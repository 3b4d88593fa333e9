//! Password based sign-in.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    util::password::verify_password,
};

/// Service verifying user credentials.
///
/// Storing the signed-in user in the session is left to the controller so this
/// service stays independent of the HTTP layer.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies a user name and password.
    ///
    /// Unknown user names and wrong passwords produce the same error so callers
    /// cannot learn which user names exist.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AuthError::InvalidCredentials)` - Unknown user name or wrong password
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn sign_in(&self, user_name: &str, password: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(credentials) = user_repo.find_credentials_by_user_name(user_name).await? else {
            tracing::debug!("Sign-in attempt for unknown user name '{}'", user_name);
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &credentials.password_hash) {
            tracing::debug!("Sign-in attempt with wrong password for user {}", credentials.id);
            return Err(AuthError::InvalidCredentials.into());
        }

        let Some(user) = user_repo.get_by_id(credentials.id).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        tracing::info!("User {} signed in", user.id);

        Ok(user)
    }
}
