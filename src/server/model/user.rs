//! User domain models and parameters.
//!
//! Provides the platform user model, its role conversions and the parameter types
//! used for creating and replacing users. Password hashes are carried only by the
//! parameter and credential types and never reach a response.

use entity::sea_orm_active_enums::UserRole;
use uuid::Uuid;

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto, UserRoleDto},
    server::{
        error::AppError,
        util::{avatar::avatar_url_or_default, password::hash_password},
    },
};

/// Platform user without credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    /// Unique login name, also used to derive the default avatar.
    pub user_name: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub role: UserRole,
    pub status: String,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The password hash is dropped here.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            user_name: entity.user_name,
            display_name: entity.display_name,
            avatar_url: entity.avatar_url,
            role: entity.role,
            status: entity.status,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// A missing avatar becomes `api/v1/avatar/<escaped user_name>`.
    pub fn into_dto(self) -> UserDto {
        let avatar_url = avatar_url_or_default(self.avatar_url, &self.user_name);

        UserDto {
            id: self.id,
            user_name: self.user_name,
            display_name: self.display_name,
            role: self.role.into(),
            avatar_url,
            status: self.status,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Stored login data looked up during sign-in.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub id: Uuid,
    pub password_hash: String,
}

/// Parameters for inserting a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub user_name: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub role: UserRole,
    pub status: String,
    pub password_hash: String,
}

impl CreateUserParams {
    /// Converts the request body, hashing the plaintext password.
    ///
    /// # Returns
    /// - `Ok(CreateUserParams)` - Parameters ready for insertion
    /// - `Err(AppError::BadRequest)` - Empty user name or password
    /// - `Err(AppError::InternalError)` - Hashing failed
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        if dto.user_name.trim().is_empty() {
            return Err(AppError::BadRequest("user_name must not be empty".to_string()));
        }
        if dto.password.is_empty() {
            return Err(AppError::BadRequest("password must not be empty".to_string()));
        }

        Ok(Self {
            user_name: dto.user_name,
            display_name: dto.display_name,
            avatar_url: dto.avatar_url,
            role: dto.role.into(),
            status: dto.status,
            password_hash: hash_password(&dto.password)?,
        })
    }
}

/// Parameters for replacing every column of an existing user.
///
/// `password_hash` of `None` keeps the stored hash.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub id: Uuid,
    pub user_name: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub role: UserRole,
    pub status: String,
    pub password_hash: Option<String>,
}

impl UpdateUserParams {
    pub fn from_dto(id: Uuid, dto: UpdateUserDto) -> Result<Self, AppError> {
        if dto.user_name.trim().is_empty() {
            return Err(AppError::BadRequest("user_name must not be empty".to_string()));
        }

        let password_hash = match dto.password.as_deref() {
            Some(password) if !password.is_empty() => Some(hash_password(password)?),
            _ => None,
        };

        Ok(Self {
            id,
            user_name: dto.user_name,
            display_name: dto.display_name,
            avatar_url: dto.avatar_url,
            role: dto.role.into(),
            status: dto.status,
            password_hash,
        })
    }
}

impl From<UserRole> for UserRoleDto {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Admin => Self::Admin,
            UserRole::Player => Self::Player,
            UserRole::Guest => Self::Guest,
        }
    }
}

impl From<UserRoleDto> for UserRole {
    fn from(role: UserRoleDto) -> Self {
        match role {
            UserRoleDto::Admin => Self::Admin,
            UserRoleDto::Player => Self::Player,
            UserRoleDto::Guest => Self::Guest,
        }
    }
}
