use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        membership::{JoinTeamDto, MembershipRequestDto},
        user::{ProfileDto, TeamHistoryDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            membership::{JoinTeamParams, MembershipRequest},
            profile::TeamHistoryEntry,
        },
        service::membership::MembershipService,
        state::AppState,
    },
};

/// Tag for grouping membership endpoints in OpenAPI documentation
pub static MEMBERSHIP_TAG: &str = "membership";

/// Request to join a team.
///
/// Creates a pending request that a team manager or admin must approve. The
/// body is optional; the requested role defaults to `player` and may only be
/// `player` or `guest`.
///
/// # Access Control
/// - `SelfOrAdmin` - Users may only file requests for themselves
///
/// # Returns
/// - `201 Created` - The pending request
/// - `404 Not Found` - User or team does not exist
/// - `409 Conflict` - Already a member, or a request is already pending
#[utoipa::path(
    post,
    path = "/api/v1/teams/{team_id}/users/{user_id}",
    tag = MEMBERSHIP_TAG,
    params(
        ("team_id" = Uuid, Path, description = "Team ID"),
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    request_body(content = JoinTeamDto, description = "Optional requested role, defaults to player"),
    responses(
        (status = 201, description = "Join request created", body = MembershipRequestDto),
        (status = 400, description = "Requested role is not player or guest", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to act for this user", body = ErrorDto),
        (status = 404, description = "User or team not found", body = ErrorDto),
        (status = 409, description = "Already a member or request pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_team(
    State(state): State<AppState>,
    session: Session,
    Path((team_id, user_id)): Path<(Uuid, Uuid)>,
    payload: Option<Json<JoinTeamDto>>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfOrAdmin(user_id)])
        .await?;

    let dto = payload.map(|Json(dto)| dto).unwrap_or_default();
    let params = JoinTeamParams::from_dto(user_id, team_id, dto)?;
    let request = MembershipService::new(&state.db).join(params).await?;

    Ok((StatusCode::CREATED, Json(request.into_dto())))
}

/// Approve a pending join request.
///
/// Moves the user out of any previous team (recording it in their history) and
/// makes this team their current one.
///
/// # Access Control
/// - `TeamManager` - Owner, captain or vice captain of the team, or an admin
#[utoipa::path(
    put,
    path = "/api/v1/teams/{team_id}/users/{user_id}",
    tag = MEMBERSHIP_TAG,
    params(
        ("team_id" = Uuid, Path, description = "Team ID"),
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Request approved", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a manager of this team", body = ErrorDto),
        (status = 404, description = "No pending request", body = ErrorDto),
        (status = 409, description = "Already a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_member(
    State(state): State<AppState>,
    session: Session,
    Path((team_id, user_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TeamManager(team_id)])
        .await?;

    MembershipService::new(&state.db)
        .approve(user_id, team_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::updated("Membership"))))
}

/// Leave a team, or remove a member from it.
///
/// # Access Control
/// - The member themself, a manager of the team, or an admin
#[utoipa::path(
    delete,
    path = "/api/v1/teams/{team_id}/users/{user_id}",
    tag = MEMBERSHIP_TAG,
    params(
        ("team_id" = Uuid, Path, description = "Team ID"),
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Membership ended", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to remove this member", body = ErrorDto),
        (status = 404, description = "User is not a member of the team", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leave_team(
    State(state): State<AppState>,
    session: Session,
    Path((team_id, user_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require(&[]).await?;

    if user.id != user_id {
        auth_guard
            .require(&[Permission::TeamManager(team_id)])
            .await?;
    }

    MembershipService::new(&state.db)
        .leave(user_id, team_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::deleted("Membership"))))
}

/// Reject a pending join request.
///
/// # Access Control
/// - `TeamManager` - Owner, captain or vice captain of the team, or an admin
#[utoipa::path(
    delete,
    path = "/api/v1/teams/{team_id}/requests/{user_id}",
    tag = MEMBERSHIP_TAG,
    params(
        ("team_id" = Uuid, Path, description = "Team ID"),
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Request rejected", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a manager of this team", body = ErrorDto),
        (status = 404, description = "No pending request", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_request(
    State(state): State<AppState>,
    session: Session,
    Path((team_id, user_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TeamManager(team_id)])
        .await?;

    MembershipService::new(&state.db)
        .reject(user_id, team_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::deleted("Membership request"))))
}

/// List pending join requests of a team.
///
/// # Access Control
/// - `TeamManager` - Owner, captain or vice captain of the team, or an admin
#[utoipa::path(
    get,
    path = "/api/v1/teams/{team_id}/requests",
    tag = MEMBERSHIP_TAG,
    params(
        ("team_id" = Uuid, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Pending requests", body = Vec<MembershipRequestDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a manager of this team", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_requests(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TeamManager(team_id)])
        .await?;

    let requests = MembershipService::new(&state.db)
        .get_requests_for_team(team_id)
        .await?;
    let requests_dto: Vec<MembershipRequestDto> = requests
        .into_iter()
        .map(MembershipRequest::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(requests_dto)))
}

/// Get the current team of a user together with their team history.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/profile",
    tag = MEMBERSHIP_TAG,
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Profile with history", body = ProfileDto),
        (status = 404, description = "User has no current team", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let profile = MembershipService::new(&state.db)
        .get_profile_with_history(id)
        .await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// Get the closed team memberships of a user, oldest first.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/history",
    tag = MEMBERSHIP_TAG,
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Team history", body = Vec<TeamHistoryDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let history = MembershipService::new(&state.db).get_history(id).await?;
    let history_dto: Vec<TeamHistoryDto> = history
        .into_iter()
        .map(TeamHistoryEntry::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(history_dto)))
}
