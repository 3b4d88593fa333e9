//! User fixtures for creating in-memory test data.

use entity::{sea_orm_active_enums::UserRole, user};
use uuid::Uuid;

/// Default test user name.
pub const DEFAULT_USER_NAME: &str = "alice";

/// Default account status.
pub const DEFAULT_STATUS: &str = "active";

/// Placeholder hash that is not a valid PHC string, so it never verifies.
pub const DEFAULT_PASSWORD_HASH: &str = "not-a-real-hash";

/// Creates a user entity model with default values.
///
/// # Default Values
/// - id: nil UUID
/// - user_name: `"alice"`
/// - display_name / avatar_url: `None`
/// - role: `UserRole::Player`
/// - status: `"active"`
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a builder for a user entity model starting from the defaults.
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder {
        model: user::Model {
            id: Uuid::nil(),
            user_name: DEFAULT_USER_NAME.to_string(),
            display_name: None,
            avatar_url: None,
            role: UserRole::Player,
            status: DEFAULT_STATUS.to_string(),
            password_hash: DEFAULT_PASSWORD_HASH.to_string(),
        },
    }
}

pub struct UserEntityBuilder {
    model: user::Model,
}

impl UserEntityBuilder {
    pub fn id(mut self, id: Uuid) -> Self {
        self.model.id = id;
        self
    }

    pub fn user_name(mut self, user_name: impl Into<String>) -> Self {
        self.model.user_name = user_name.into();
        self
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.model.display_name = Some(display_name.into());
        self
    }

    pub fn avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.model.avatar_url = Some(avatar_url.into());
        self
    }

    pub fn role(mut self, role: UserRole) -> Self {
        self.model.role = role;
        self
    }

    pub fn build(self) -> user::Model {
        self.model
    }
}
