//! Type-safe session management wrappers.
//!
//! `AuthSession` wraps the raw tower-sessions `Session` and exposes only the
//! authentication state, keeping the session key and its encoding in one place.

use tower_sessions::Session;
use uuid::Uuid;

use crate::server::{error::AppError, util::parse::parse_uuid_from_string};

const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Handles storing and retrieving the signed-in user's id and clearing the
/// session on sign-out.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's id in the session.
    ///
    /// Called after a successful sign-in. The session id is cycled first so a
    /// pre-authentication session id cannot be reused.
    ///
    /// # Arguments
    /// - `user_id` - Id of the authenticated user
    ///
    /// # Returns
    /// - `Ok(())` - User id successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: Uuid) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session
            .insert(SESSION_AUTH_USER_ID, user_id.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves the signed-in user's id from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - A user is signed in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    /// - `Err(AppError::InternalErr(_))` - The stored value is not a UUID
    pub async fn get_user_id(&self) -> Result<Option<Uuid>, AppError> {
        let Some(user_id_str) = self.session.get::<String>(SESSION_AUTH_USER_ID).await? else {
            return Ok(None);
        };

        let user_id = parse_uuid_from_string(user_id_str)?;

        Ok(Some(user_id))
    }

    /// Removes all data from the session and deletes it from the store.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
