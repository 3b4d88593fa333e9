use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct ServiceDto {
    pub id: Uuid,
    pub name: String,
    pub author: String,
    pub logo_url: Option<String>,
    pub description: Option<String>,
    pub is_public: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct ServiceRequestDto {
    pub name: String,
    pub author: String,
    pub logo_url: Option<String>,
    pub description: Option<String>,
    pub is_public: bool,
}
