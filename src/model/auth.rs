use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SignInDto {
    pub user_name: String,
    pub password: String,
}
