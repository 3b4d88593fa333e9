//! Session-based authorization guard.
//!
//! `AuthGuard` resolves the signed-in user from the session and checks a list of
//! permissions against it. Admins pass every permission.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;
use uuid::Uuid;

use crate::server::{
    data::{membership::MembershipRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{team::can_manage_roster, user::User},
};

/// A single access requirement checked by `AuthGuard::require`.
pub enum Permission {
    /// The user must have the admin role.
    Admin,
    /// The user must be the given user, or an admin.
    SelfOrAdmin(Uuid),
    /// The user must be an owner, captain or vice captain of the given team, or an admin.
    TeamManager(Uuid),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the signed-in user and checks every permission.
    ///
    /// An empty permission list only requires a signed-in user.
    ///
    /// # Returns
    /// - `Ok(User)` - The signed-in user satisfying all permissions
    /// - `Err(AuthError::UserNotInSession)` - No user signed in
    /// - `Err(AuthError::UserNotInDatabase)` - Session refers to a deleted user
    /// - `Err(AuthError::AccessDenied)` - The first permission that failed
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.get_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if user.is_admin() {
            return Ok(user);
        }

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    return Err(AuthError::AccessDenied(
                        user.id,
                        "User attempted an admin action without the admin role".to_string(),
                    )
                    .into());
                }
                Permission::SelfOrAdmin(target_id) => {
                    if user.id != *target_id {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!("User attempted to act on behalf of user {}", target_id),
                        )
                        .into());
                    }
                }
                Permission::TeamManager(team_id) => {
                    if !self.manages_team(user.id, *team_id).await? {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!("User attempted to manage team {} without a manager role", team_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    async fn manages_team(&self, user_id: Uuid, team_id: Uuid) -> Result<bool, AppError> {
        let profile = MembershipRepository::new(self.db)
            .get_profile(user_id)
            .await?;

        Ok(profile.is_some_and(|p| p.team_id == team_id && can_manage_roster(p.role)))
    }
}
