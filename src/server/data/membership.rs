//! Team membership repository.
//!
//! Owns the three tables behind the membership lifecycle: pending requests, the
//! current membership (`profiles`, one row per user) and the append-only
//! `team_history` ledger. Approve and leave move rows between them inside a
//! single transaction so a user is never observed in two teams at once.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use crate::server::model::{
    membership::{ApprovalOutcome, JoinTeamParams, MembershipRequest},
    profile::{Profile, TeamHistoryEntry},
};

pub struct MembershipRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MembershipRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a pending join request.
    ///
    /// # Returns
    /// - `Ok(MembershipRequest)` - The stored request
    /// - `Err(DbErr)` - Database error, including a unique violation when the user
    ///   already has a pending request for the team
    pub async fn create_request(&self, params: JoinTeamParams) -> Result<MembershipRequest, DbErr> {
        let entity = entity::membership_request::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(params.user_id),
            team_id: ActiveValue::Set(params.team_id),
            role: ActiveValue::Set(params.role),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(MembershipRequest::from_entity(entity))
    }

    /// Finds the pending request of a user for a team.
    pub async fn find_request(
        &self,
        user_id: Uuid,
        team_id: Uuid,
    ) -> Result<Option<MembershipRequest>, DbErr> {
        let entity = find_request_entity(self.db, user_id, team_id).await?;

        Ok(entity.map(MembershipRequest::from_entity))
    }

    /// Gets the pending requests of a team, oldest first.
    pub async fn get_requests_for_team(
        &self,
        team_id: Uuid,
    ) -> Result<Vec<MembershipRequest>, DbErr> {
        let entities = entity::prelude::MembershipRequest::find()
            .filter(entity::membership_request::Column::TeamId.eq(team_id))
            .order_by_asc(entity::membership_request::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(MembershipRequest::from_entity)
            .collect())
    }

    /// Deletes a pending request without approving it.
    ///
    /// # Returns
    /// - `Ok(true)` - Request deleted
    /// - `Ok(false)` - No pending request for the pair
    pub async fn delete_request(&self, user_id: Uuid, team_id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::MembershipRequest::delete_many()
            .filter(entity::membership_request::Column::UserId.eq(user_id))
            .filter(entity::membership_request::Column::TeamId.eq(team_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the current membership of a user joined to its team.
    ///
    /// # Returns
    /// - `Ok(Some(Profile))` - The user is a member of a team
    /// - `Ok(None)` - The user has no current team
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>, DbErr> {
        let result = entity::prelude::Profile::find()
            .filter(entity::profile::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Team)
            .one(self.db)
            .await?;

        Ok(result.map(|(profile, team)| Profile::from_entity(profile, team)))
    }

    /// Gets the membership ledger of a user.
    ///
    /// Entries are ordered by `joined_at` ascending, then `left_at`.
    pub async fn get_history(&self, user_id: Uuid) -> Result<Vec<TeamHistoryEntry>, DbErr> {
        let results = entity::prelude::TeamHistory::find()
            .filter(entity::team_history::Column::UserId.eq(user_id))
            .order_by_asc(entity::team_history::Column::JoinedAt)
            .order_by_asc(entity::team_history::Column::LeftAt)
            .find_also_related(entity::prelude::Team)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(|(entry, team)| TeamHistoryEntry::from_entity(entry, team))
            .collect())
    }

    /// Turns a pending request into the user's current membership.
    ///
    /// Runs in one transaction: a membership in another team is closed into the
    /// ledger and removed, the new profile is inserted and the request deleted.
    /// The unique `profiles.user_id` constraint keeps concurrent approvals from
    /// both committing.
    ///
    /// # Returns
    /// - `Ok(ApprovalOutcome::Approved(Profile))` - Membership created
    /// - `Ok(ApprovalOutcome::RequestNotFound)` - No pending request, nothing written
    /// - `Ok(ApprovalOutcome::AlreadyMember)` - Already in that team, nothing written
    /// - `Err(DbErr)` - Statement or rollback failure
    pub async fn approve(&self, user_id: Uuid, team_id: Uuid) -> Result<ApprovalOutcome, DbErr> {
        let txn = self.db.begin().await?;

        match approve_request(&txn, user_id, team_id, Utc::now()).await {
            Ok(outcome @ ApprovalOutcome::Approved(_)) => {
                txn.commit().await?;
                Ok(outcome)
            }
            Ok(outcome) => {
                txn.rollback().await?;
                Ok(outcome)
            }
            Err(e) => {
                txn.rollback().await?;
                Err(e)
            }
        }
    }

    /// Ends the user's membership in a team and records it in the ledger.
    ///
    /// # Returns
    /// - `Ok(true)` - Membership closed into the ledger and removed
    /// - `Ok(false)` - The user is not a member of that team, nothing written
    /// - `Err(DbErr)` - Statement or rollback failure
    pub async fn leave(&self, user_id: Uuid, team_id: Uuid) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        match leave_team(&txn, user_id, team_id, Utc::now()).await {
            Ok(true) => {
                txn.commit().await?;
                Ok(true)
            }
            Ok(false) => {
                txn.rollback().await?;
                Ok(false)
            }
            Err(e) => {
                txn.rollback().await?;
                Err(e)
            }
        }
    }
}

async fn find_request_entity<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    team_id: Uuid,
) -> Result<Option<entity::membership_request::Model>, DbErr> {
    entity::prelude::MembershipRequest::find()
        .filter(entity::membership_request::Column::UserId.eq(user_id))
        .filter(entity::membership_request::Column::TeamId.eq(team_id))
        .one(conn)
        .await
}

async fn approve_request<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    team_id: Uuid,
    now: DateTime<Utc>,
) -> Result<ApprovalOutcome, DbErr> {
    let Some(request) = find_request_entity(conn, user_id, team_id).await? else {
        return Ok(ApprovalOutcome::RequestNotFound);
    };

    let current = entity::prelude::Profile::find()
        .filter(entity::profile::Column::UserId.eq(user_id))
        .one(conn)
        .await?;

    if let Some(current) = current {
        if current.current_team_id == team_id {
            return Ok(ApprovalOutcome::AlreadyMember);
        }

        close_membership(conn, current, now).await?;
    }

    let profile = entity::profile::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        user_id: ActiveValue::Set(user_id),
        current_team_id: ActiveValue::Set(team_id),
        role: ActiveValue::Set(request.role),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(conn)
    .await?;

    entity::prelude::MembershipRequest::delete_by_id(request.id)
        .exec(conn)
        .await?;

    let team = entity::prelude::Team::find_by_id(team_id).one(conn).await?;

    Ok(ApprovalOutcome::Approved(Profile::from_entity(profile, team)))
}

async fn leave_team<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    team_id: Uuid,
    now: DateTime<Utc>,
) -> Result<bool, DbErr> {
    let profile = entity::prelude::Profile::find()
        .filter(entity::profile::Column::UserId.eq(user_id))
        .filter(entity::profile::Column::CurrentTeamId.eq(team_id))
        .one(conn)
        .await?;

    let Some(profile) = profile else {
        return Ok(false);
    };

    close_membership(conn, profile, now).await?;

    Ok(true)
}

/// Appends the membership interval to the ledger and removes the profile.
async fn close_membership<C: ConnectionTrait>(
    conn: &C,
    profile: entity::profile::Model,
    left_at: DateTime<Utc>,
) -> Result<(), DbErr> {
    entity::team_history::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        user_id: ActiveValue::Set(profile.user_id),
        team_id: ActiveValue::Set(profile.current_team_id),
        role: ActiveValue::Set(profile.role),
        joined_at: ActiveValue::Set(profile.created_at),
        left_at: ActiveValue::Set(Some(left_at)),
    }
    .insert(conn)
    .await?;

    entity::prelude::Profile::delete_by_id(profile.id)
        .exec(conn)
        .await?;

    Ok(())
}
