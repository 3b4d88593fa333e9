//! Team membership service.
//!
//! Drives the per (user, team) lifecycle `none -> pending -> active -> left` and
//! assembles profiles together with their history ledger.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{membership::MembershipRepository, team::TeamRepository, user::UserRepository},
    error::AppError,
    model::{
        membership::{ApprovalOutcome, JoinTeamParams, MembershipRequest},
        profile::{Profile, ProfileWithHistory, TeamHistoryEntry},
    },
};

pub struct MembershipService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> MembershipService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files a pending request for a user to join a team.
    ///
    /// # Returns
    /// - `Ok(MembershipRequest)` - The pending request
    /// - `Err(AppError::NotFound)` - User or team does not exist
    /// - `Err(AppError::Conflict)` - Already a member of the team, or a request is pending
    pub async fn join(&self, params: JoinTeamParams) -> Result<MembershipRequest, AppError> {
        let membership_repo = MembershipRepository::new(self.db);

        self.ensure_user_and_team(params.user_id, params.team_id)
            .await?;

        if let Some(profile) = membership_repo.get_profile(params.user_id).await? {
            if profile.team_id == params.team_id {
                return Err(AppError::Conflict(
                    "User is already a member of this team".to_string(),
                ));
            }
        }

        if membership_repo
            .find_request(params.user_id, params.team_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "A join request for this team is already pending".to_string(),
            ));
        }

        let request = membership_repo.create_request(params).await?;

        tracing::info!(
            "User {} requested to join team {}",
            request.user_id,
            request.team_id
        );

        Ok(request)
    }

    /// Approves a pending request, moving the user out of any previous team.
    ///
    /// # Returns
    /// - `Ok(Profile)` - The new current membership
    /// - `Err(AppError::NotFound)` - No pending request for the pair
    /// - `Err(AppError::Conflict)` - The user is already a member of the team
    pub async fn approve(&self, user_id: Uuid, team_id: Uuid) -> Result<Profile, AppError> {
        match MembershipRepository::new(self.db)
            .approve(user_id, team_id)
            .await?
        {
            ApprovalOutcome::Approved(profile) => {
                tracing::info!("User {} joined team {}", user_id, team_id);
                Ok(profile)
            }
            ApprovalOutcome::RequestNotFound => Err(AppError::NotFound(
                "Membership request not found".to_string(),
            )),
            ApprovalOutcome::AlreadyMember => Err(AppError::Conflict(
                "User is already a member of this team".to_string(),
            )),
        }
    }

    /// Rejects a pending request.
    pub async fn reject(&self, user_id: Uuid, team_id: Uuid) -> Result<(), AppError> {
        if !MembershipRepository::new(self.db)
            .delete_request(user_id, team_id)
            .await?
        {
            return Err(AppError::NotFound(
                "Membership request not found".to_string(),
            ));
        }

        Ok(())
    }

    /// Ends a user's membership in a team, appending it to their history.
    ///
    /// # Returns
    /// - `Ok(())` - Membership closed
    /// - `Err(AppError::NotFound)` - The user is not a member of the team
    pub async fn leave(&self, user_id: Uuid, team_id: Uuid) -> Result<(), AppError> {
        if !MembershipRepository::new(self.db)
            .leave(user_id, team_id)
            .await?
        {
            return Err(AppError::NotFound(
                "User is not a member of this team".to_string(),
            ));
        }

        tracing::info!("User {} left team {}", user_id, team_id);

        Ok(())
    }

    /// Lists pending requests of an existing team.
    pub async fn get_requests_for_team(
        &self,
        team_id: Uuid,
    ) -> Result<Vec<MembershipRequest>, AppError> {
        if TeamRepository::new(self.db).get_by_id(team_id).await?.is_none() {
            return Err(AppError::NotFound("Team not found".to_string()));
        }

        let requests = MembershipRepository::new(self.db)
            .get_requests_for_team(team_id)
            .await?;

        Ok(requests)
    }

    /// Gets the current membership of a user together with their history.
    ///
    /// # Returns
    /// - `Ok(ProfileWithHistory)` - Current team plus ledger ordered by join time
    /// - `Err(AppError::NotFound)` - The user has no current team
    pub async fn get_profile_with_history(
        &self,
        user_id: Uuid,
    ) -> Result<ProfileWithHistory, AppError> {
        let membership_repo = MembershipRepository::new(self.db);

        let Some(profile) = membership_repo.get_profile(user_id).await? else {
            return Err(AppError::NotFound("Profile not found".to_string()));
        };

        let history = membership_repo.get_history(user_id).await?;

        Ok(ProfileWithHistory { profile, history })
    }

    /// Gets the history ledger of an existing user.
    pub async fn get_history(&self, user_id: Uuid) -> Result<Vec<TeamHistoryEntry>, AppError> {
        if UserRepository::new(self.db).get_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let history = MembershipRepository::new(self.db)
            .get_history(user_id)
            .await?;

        Ok(history)
    }

    async fn ensure_user_and_team(&self, user_id: Uuid, team_id: Uuid) -> Result<(), AppError> {
        if UserRepository::new(self.db).get_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        if TeamRepository::new(self.db).get_by_id(team_id).await?.is_none() {
            return Err(AppError::NotFound("Team not found".to_string()));
        }

        Ok(())
    }
}
