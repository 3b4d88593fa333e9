use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct UniversityDto {
    pub id: Uuid,
    pub name: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct UniversityRequestDto {
    pub name: String,
}

/// Query string of the university listing; `term` switches it to a search.
#[derive(Serialize, Deserialize, IntoParams, Clone, Debug, Default)]
pub struct UniversityQuery {
    pub term: Option<String>,
}
