use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        avatar::{self, AVATAR_TAG},
        ctf_service::{self, SERVICE_TAG},
        game::{self, GAME_TAG},
        game_result::{self, RESULT_TAG},
        membership::{self, MEMBERSHIP_TAG},
        team::{self, TEAM_TAG},
        university::{self, UNIVERSITY_TAG},
        user::{self, USER_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "ctfboard", description = "CTF tournament platform API"),
    tags(
        (name = AUTH_TAG, description = "Session sign-in and sign-out"),
        (name = USER_TAG, description = "Platform users"),
        (name = TEAM_TAG, description = "Teams"),
        (name = MEMBERSHIP_TAG, description = "Join requests, team membership and history"),
        (name = SERVICE_TAG, description = "CTF services"),
        (name = GAME_TAG, description = "Games, their services and scoreboards"),
        (name = RESULT_TAG, description = "Per-game team results"),
        (name = UNIVERSITY_TAG, description = "Universities"),
        (name = AVATAR_TAG, description = "Generated avatars"),
    )
)]
struct ApiDoc;

/// Builds the API router and mounts the Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::sign_in))
        .routes(routes!(auth::sign_out))
        .routes(routes!(auth::get_session_user))
        .routes(routes!(user::get_users, user::create_user))
        .routes(routes!(user::get_user, user::update_user, user::delete_user))
        .routes(routes!(membership::get_profile))
        .routes(routes!(membership::get_history))
        .routes(routes!(team::get_teams, team::create_team))
        .routes(routes!(team::get_team, team::update_team, team::delete_team))
        .routes(routes!(membership::get_team_requests))
        .routes(routes!(
            membership::join_team,
            membership::approve_member,
            membership::leave_team
        ))
        .routes(routes!(membership::reject_request))
        .routes(routes!(
            ctf_service::get_services,
            ctf_service::create_service
        ))
        .routes(routes!(
            ctf_service::get_service,
            ctf_service::update_service,
            ctf_service::delete_service
        ))
        .routes(routes!(game::get_games, game::create_game))
        .routes(routes!(game::get_game, game::update_game, game::delete_game))
        .routes(routes!(game::get_scoreboard))
        .routes(routes!(game::get_game_services))
        .routes(routes!(game::add_game_service, game::remove_game_service))
        .routes(routes!(game_result::get_results, game_result::create_result))
        .routes(routes!(
            game_result::get_result,
            game_result::update_result,
            game_result::delete_result
        ))
        .routes(routes!(
            university::get_universities,
            university::create_university
        ))
        .routes(routes!(
            university::get_university,
            university::update_university,
            university::delete_university
        ))
        .routes(routes!(avatar::get_avatar))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
