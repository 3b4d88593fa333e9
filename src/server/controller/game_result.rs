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
        game_result::{ResultDto, ResultRequestDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::game_result::{GameResult, UpsertGameResultParams},
        service::game_result::GameResultService,
        state::AppState,
    },
};

/// Tag for grouping result endpoints in OpenAPI documentation
pub static RESULT_TAG: &str = "result";

/// Record the score of a team in a game.
///
/// Ranks of every result in the game are recomputed in the same transaction as
/// the insert.
///
/// # Access Control
/// - `Admin` - Only admins can record results
#[utoipa::path(
    post,
    path = "/api/v1/results",
    tag = RESULT_TAG,
    request_body = ResultRequestDto,
    responses(
        (status = 201, description = "Successfully recorded result", body = ResultDto),
        (status = 400, description = "Unknown team or game", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 409, description = "Team already has a result for the game", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_result(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ResultRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpsertGameResultParams::from_dto(None, payload);
    let result = GameResultService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(result.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/v1/results",
    tag = RESULT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved results", body = Vec<ResultDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_results(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let results = GameResultService::new(&state.db).get_all().await?;
    let results_dto: Vec<ResultDto> = results.into_iter().map(GameResult::into_dto).collect();

    Ok((StatusCode::OK, Json(results_dto)))
}

#[utoipa::path(
    get,
    path = "/api/v1/results/{id}",
    tag = RESULT_TAG,
    params(
        ("id" = Uuid, Path, description = "Result ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved result", body = ResultDto),
        (status = 404, description = "Result not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_result(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let result = GameResultService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/v1/results/{id}",
    tag = RESULT_TAG,
    params(
        ("id" = Uuid, Path, description = "Result ID")
    ),
    request_body = ResultRequestDto,
    responses(
        (status = 200, description = "Successfully updated result", body = MessageDto),
        (status = 400, description = "Unknown team or game", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Result not found", body = ErrorDto),
        (status = 409, description = "Team already has a result for the game", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_result(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(payload): Json<ResultRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpsertGameResultParams::from_dto(Some(id), payload);
    GameResultService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(MessageDto::updated("Result"))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/results/{id}",
    tag = RESULT_TAG,
    params(
        ("id" = Uuid, Path, description = "Result ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted result", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Result not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_result(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    GameResultService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::deleted("Result"))))
}
