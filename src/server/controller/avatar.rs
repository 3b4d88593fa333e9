use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::server::util::avatar::render_avatar_svg;

/// Tag for grouping avatar endpoints in OpenAPI documentation
pub static AVATAR_TAG: &str = "avatar";

/// Render the generated avatar for a name.
///
/// Default avatar URLs of users and teams point here.
#[utoipa::path(
    get,
    path = "/api/v1/avatar/{name}",
    tag = AVATAR_TAG,
    params(
        ("name" = String, Path, description = "User or team name")
    ),
    responses(
        (status = 200, description = "SVG avatar", content_type = "image/svg+xml", body = String)
    ),
)]
pub async fn get_avatar(Path(name): Path<String>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        render_avatar_svg(&name),
    )
}
