use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for Lanvote Back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::user::list_users,
        crate::routes::user::create_user,
        crate::routes::user::rename_user,
        crate::routes::user::delete_user,
        crate::routes::game::list_games,
        crate::routes::game::save_game,
        crate::routes::game::get_game,
        crate::routes::vote::cast_vote,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::common::ActionResponse,
            crate::dto::user::UpsertUserRequest,
            crate::dto::user::UserIdResponse,
            crate::dto::user::UserSummary,
            crate::dto::user::UserListResponse,
            crate::dto::game::SaveGameRequest,
            crate::dto::game::SaveGameResponse,
            crate::dto::game::GameSummary,
            crate::dto::game::GameListResponse,
            crate::dto::game::GameDetail,
            crate::dto::vote::CastVoteRequest,
            crate::dao::models::GameSort,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "users", description = "User registration and management"),
        (name = "games", description = "Game catalogue and scoreboard"),
        (name = "votes", description = "Vote casting"),
    )
)]
pub struct ApiDoc;
