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
        team::{TeamDto, TeamRequestDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::team::{CreateTeamParams, Team, UpdateTeamParams},
        service::team::TeamService,
        state::AppState,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

/// Create a new team.
///
/// # Access Control
/// - `Admin` - Only admins can create teams
///
/// # Returns
/// - `201 Created` - The created team with its university name
/// - `400 Bad Request` - Empty name or unknown university
#[utoipa::path(
    post,
    path = "/api/v1/teams",
    tag = TEAM_TAG,
    request_body = TeamRequestDto,
    responses(
        (status = 201, description = "Successfully created team", body = TeamDto),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<TeamRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateTeamParams::from_dto(payload)?;
    let team = TeamService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(team.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/v1/teams",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "Successfully retrieved teams", body = Vec<TeamDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teams(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let teams = TeamService::new(&state.db).get_all().await?;
    let teams_dto: Vec<TeamDto> = teams.into_iter().map(Team::into_dto).collect();

    Ok((StatusCode::OK, Json(teams_dto)))
}

#[utoipa::path(
    get,
    path = "/api/v1/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = Uuid, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved team", body = TeamDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let team = TeamService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Replace a team.
///
/// # Access Control
/// - `Admin` - Only admins can edit teams
#[utoipa::path(
    put,
    path = "/api/v1/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = Uuid, Path, description = "Team ID")
    ),
    request_body = TeamRequestDto,
    responses(
        (status = 200, description = "Successfully updated team", body = MessageDto),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_team(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(payload): Json<TeamRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpdateTeamParams::from_dto(id, payload)?;
    TeamService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(MessageDto::updated("Team"))))
}

/// Delete a team together with its pending requests and results.
///
/// The games the team scored in are re-ranked. A team with current members or
/// membership history cannot be deleted.
///
/// # Access Control
/// - `Admin` - Only admins can delete teams
#[utoipa::path(
    delete,
    path = "/api/v1/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = Uuid, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted team", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 409, description = "Team has members or membership history", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    TeamService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::deleted("Team"))))
}
