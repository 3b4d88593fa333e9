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
        game::{GameDto, GameRequestDto},
        game_result::ScoreboardDto,
        service::ServiceDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            ctf_service::CtfService,
            game::{Game, UpsertGameParams},
        },
        service::{game::GameService, scoreboard::ScoreboardService},
        state::AppState,
    },
};

/// Tag for grouping game endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

/// Create a new game.
///
/// The response carries the game's status (`upcoming`, `ongoing` or `past`),
/// derived from its window at request time.
///
/// # Access Control
/// - `Admin` - Only admins can schedule games
///
/// # Returns
/// - `201 Created` - The created game
/// - `400 Bad Request` - End time precedes start time, or a listed service does not exist
#[utoipa::path(
    post,
    path = "/api/v1/games",
    tag = GAME_TAG,
    request_body = GameRequestDto,
    responses(
        (status = 201, description = "Successfully created game", body = GameDto),
        (status = 400, description = "Invalid game window or unknown service", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_game(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<GameRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpsertGameParams::from_dto(None, payload)?;
    let game = GameService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(game.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/v1/games",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "Games ordered by start time", body = Vec<GameDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_games(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let games = GameService::new(&state.db).get_all().await?;
    let games_dto: Vec<GameDto> = games.into_iter().map(Game::into_dto).collect();

    Ok((StatusCode::OK, Json(games_dto)))
}

#[utoipa::path(
    get,
    path = "/api/v1/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = Uuid, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved game", body = GameDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let game = GameService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/v1/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = Uuid, Path, description = "Game ID")
    ),
    request_body = GameRequestDto,
    responses(
        (status = 200, description = "Successfully updated game", body = MessageDto),
        (status = 400, description = "Invalid game window or unknown service", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_game(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(payload): Json<GameRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpsertGameParams::from_dto(Some(id), payload)?;
    GameService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(MessageDto::updated("Game"))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = Uuid, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted game", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_game(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    GameService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::deleted("Game"))))
}

#[utoipa::path(
    get,
    path = "/api/v1/games/{id}/services",
    tag = GAME_TAG,
    params(
        ("id" = Uuid, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Services attached to the game, by name", body = Vec<ServiceDto>),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game_services(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let services = GameService::new(&state.db).get_services(id).await?;
    let services_dto: Vec<ServiceDto> = services.into_iter().map(CtfService::into_dto).collect();

    Ok((StatusCode::OK, Json(services_dto)))
}

/// Attach a service to a game.
///
/// # Access Control
/// - `Admin` - Only admins can change a game's services
#[utoipa::path(
    post,
    path = "/api/v1/games/{id}/services/{service_id}",
    tag = GAME_TAG,
    params(
        ("id" = Uuid, Path, description = "Game ID"),
        ("service_id" = Uuid, Path, description = "Service ID")
    ),
    responses(
        (status = 200, description = "Service attached", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Game or service not found", body = ErrorDto),
        (status = 409, description = "Service already attached", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_game_service(
    State(state): State<AppState>,
    session: Session,
    Path((id, service_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    GameService::new(&state.db)
        .add_service(id, service_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::updated("Game"))))
}

/// Detach a service from a game.
///
/// # Access Control
/// - `Admin` - Only admins can change a game's services
#[utoipa::path(
    delete,
    path = "/api/v1/games/{id}/services/{service_id}",
    tag = GAME_TAG,
    params(
        ("id" = Uuid, Path, description = "Game ID"),
        ("service_id" = Uuid, Path, description = "Service ID")
    ),
    responses(
        (status = 200, description = "Service detached", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Service not attached to the game", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_game_service(
    State(state): State<AppState>,
    session: Session,
    Path((id, service_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    GameService::new(&state.db)
        .remove_service(id, service_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::deleted("Game service"))))
}

/// Get the ranked scoreboard of a game.
///
/// Teams are ordered by score descending; equal scores are ordered by team id.
#[utoipa::path(
    get,
    path = "/api/v1/games/{id}/scoreboard",
    tag = GAME_TAG,
    params(
        ("id" = Uuid, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Ranked standings", body = ScoreboardDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_scoreboard(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let scoreboard = ScoreboardService::new(&state.db).get_scoreboard(id).await?;

    Ok((StatusCode::OK, Json(scoreboard.into_dto())))
}
