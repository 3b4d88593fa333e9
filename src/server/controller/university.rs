use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        university::{UniversityDto, UniversityQuery, UniversityRequestDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::university::{University, UpsertUniversityParams},
        service::university::UniversityService,
        state::AppState,
    },
};

/// Tag for grouping university endpoints in OpenAPI documentation
pub static UNIVERSITY_TAG: &str = "university";

#[utoipa::path(
    post,
    path = "/api/v1/universities",
    tag = UNIVERSITY_TAG,
    request_body = UniversityRequestDto,
    responses(
        (status = 201, description = "Successfully created university", body = UniversityDto),
        (status = 400, description = "Empty university name", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_university(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UniversityRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpsertUniversityParams::from_dto(None, payload)?;
    let university = UniversityService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(university.into_dto())))
}

/// List or search universities.
///
/// Without `term` returns the first ten universities by name; with `term`
/// returns up to ten whose name contains it, ignoring case.
#[utoipa::path(
    get,
    path = "/api/v1/universities",
    tag = UNIVERSITY_TAG,
    params(UniversityQuery),
    responses(
        (status = 200, description = "At most ten universities", body = Vec<UniversityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_universities(
    State(state): State<AppState>,
    Query(query): Query<UniversityQuery>,
) -> Result<impl IntoResponse, AppError> {
    let universities = UniversityService::new(&state.db)
        .list(query.term.as_deref())
        .await?;
    let universities_dto: Vec<UniversityDto> = universities
        .into_iter()
        .map(University::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(universities_dto)))
}

#[utoipa::path(
    get,
    path = "/api/v1/universities/{id}",
    tag = UNIVERSITY_TAG,
    params(
        ("id" = Uuid, Path, description = "University ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved university", body = UniversityDto),
        (status = 404, description = "University not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_university(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let university = UniversityService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(university.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/v1/universities/{id}",
    tag = UNIVERSITY_TAG,
    params(
        ("id" = Uuid, Path, description = "University ID")
    ),
    request_body = UniversityRequestDto,
    responses(
        (status = 200, description = "Successfully updated university", body = MessageDto),
        (status = 400, description = "Empty university name", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "University not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_university(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(payload): Json<UniversityRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpsertUniversityParams::from_dto(Some(id), payload)?;
    UniversityService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(MessageDto::updated("University"))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/universities/{id}",
    tag = UNIVERSITY_TAG,
    params(
        ("id" = Uuid, Path, description = "University ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted university", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "University not found", body = ErrorDto),
        (status = 409, description = "Teams still belong to the university", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_university(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    UniversityService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::deleted("University"))))
}
