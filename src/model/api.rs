use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Acknowledgement returned by update and delete endpoints.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub data: String,
}

impl MessageDto {
    pub fn updated(entity: &str) -> Self {
        Self {
            data: format!("{} updated successfully", entity),
        }
    }

    pub fn deleted(entity: &str) -> Self {
        Self {
            data: format!("{} deleted successfully", entity),
        }
    }
}
