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
        user::{CreateUserDto, UpdateUserDto, UserDto, UserRoleDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{CreateUserParams, UpdateUserParams, User},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Create a new user.
///
/// Requires an admin session once an admin account exists. Before that, any
/// request may create users so the first admin can be registered.
///
/// # Access Control
/// - `Admin` - After first-time setup
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - Empty user name or password
/// - `401 Unauthorized` / `403 Forbidden` - Not an admin
/// - `409 Conflict` - User name already taken
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 409, description = "User name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_service = UserService::new(&state.db);

    if user_service.admin_exists().await? {
        let _ = AuthGuard::new(&state.db, &session)
            .require(&[Permission::Admin])
            .await?;
    } else if payload.role != UserRoleDto::Admin {
        return Err(AppError::BadRequest(
            "The first user must be an admin".to_string(),
        ));
    }

    let params = CreateUserParams::from_dto(payload)?;
    let user = user_service.create(params).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// List all users ordered by user name.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all().await?;
    let users_dto: Vec<UserDto> = users.into_iter().map(User::into_dto).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// Get a user by id.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Replace a user.
///
/// # Access Control
/// - `Admin` - Only admins can edit users
///
/// # Returns
/// - `200 OK` - `{"data": "User updated successfully"}`
/// - `404 Not Found` - No user with that id
/// - `409 Conflict` - New user name already taken
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = MessageDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "User name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpdateUserParams::from_dto(id, payload)?;
    UserService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(MessageDto::updated("User"))))
}

/// Delete a user with their current membership and pending requests.
///
/// # Access Control
/// - `Admin` - Only admins can delete users
///
/// # Returns
/// - `200 OK` - `{"data": "User deleted successfully"}`
/// - `404 Not Found` - No user with that id
/// - `409 Conflict` - The user still has team history
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted user", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "User is still referenced", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::deleted("User"))))
}
