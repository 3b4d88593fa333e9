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
        service::{ServiceDto, ServiceRequestDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::ctf_service::{CtfService, UpsertCtfServiceParams},
        service::ctf_service::CtfServiceService,
        state::AppState,
    },
};

/// Tag for grouping service endpoints in OpenAPI documentation
pub static SERVICE_TAG: &str = "service";

/// Create a new CTF service.
///
/// # Access Control
/// - `Admin` - Only admins can create services
#[utoipa::path(
    post,
    path = "/api/v1/services",
    tag = SERVICE_TAG,
    request_body = ServiceRequestDto,
    responses(
        (status = 201, description = "Successfully created service", body = ServiceDto),
        (status = 400, description = "Invalid service data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_service(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ServiceRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpsertCtfServiceParams::from_dto(None, payload)?;
    let service = CtfServiceService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(service.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/v1/services",
    tag = SERVICE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved services", body = Vec<ServiceDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_services(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let services = CtfServiceService::new(&state.db).get_all().await?;
    let services_dto: Vec<ServiceDto> = services.into_iter().map(CtfService::into_dto).collect();

    Ok((StatusCode::OK, Json(services_dto)))
}

#[utoipa::path(
    get,
    path = "/api/v1/services/{id}",
    tag = SERVICE_TAG,
    params(
        ("id" = Uuid, Path, description = "Service ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved service", body = ServiceDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = CtfServiceService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(service.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/v1/services/{id}",
    tag = SERVICE_TAG,
    params(
        ("id" = Uuid, Path, description = "Service ID")
    ),
    request_body = ServiceRequestDto,
    responses(
        (status = 200, description = "Successfully updated service", body = MessageDto),
        (status = 400, description = "Invalid service data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_service(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(payload): Json<ServiceRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpsertCtfServiceParams::from_dto(Some(id), payload)?;
    CtfServiceService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(MessageDto::updated("Service"))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/services/{id}",
    tag = SERVICE_TAG,
    params(
        ("id" = Uuid, Path, description = "Service ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted service", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_service(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    CtfServiceService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::deleted("Service"))))
}
