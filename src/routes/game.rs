use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::game::{GameDetail, GameListResponse, ListGamesQuery, SaveGameRequest, SaveGameResponse},
    error::AppError,
    services::game_service,
    state::SharedState,
};

/// Routes exposing the game catalogue and its scoreboard.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/games", get(list_games).post(save_game))
        .route("/games/{id}", get(get_game))
}

/// List games with vote tallies, optionally ranked and personalized.
#[utoipa::path(
    get,
    path = "/games",
    tag = "games",
    params(ListGamesQuery),
    responses(
        (status = 200, description = "Games with their vote tallies", body = GameListResponse)
    )
)]
pub async fn list_games(
    State(state): State<SharedState>,
    Query(query): Query<ListGamesQuery>,
) -> Result<Json<GameListResponse>, AppError> {
    let sort = query.sort_order.unwrap_or_default();
    let response = game_service::list_games(&state, query.uid, sort).await?;
    Ok(Json(response))
}

/// Create, update or delete a catalogue entry.
#[utoipa::path(
    post,
    path = "/games",
    tag = "games",
    request_body = SaveGameRequest,
    responses(
        (status = 200, description = "Catalogue updated", body = SaveGameResponse),
        (status = 404, description = "Unknown game id"),
        (status = 409, description = "Game name already taken")
    )
)]
pub async fn save_game(
    State(state): State<SharedState>,
    Json(payload): Json<SaveGameRequest>,
) -> Result<Json<SaveGameResponse>, AppError> {
    let response = game_service::save_game(&state, payload).await?;
    Ok(Json(response))
}

/// Fetch one game with its rendered description and voter lists.
#[utoipa::path(
    get,
    path = "/games/{id}",
    tag = "games",
    params(("id" = i64, Path, description = "Identifier of the game")),
    responses(
        (status = 200, description = "Game detail", body = GameDetail),
        (status = 404, description = "Unknown game id")
    )
)]
pub async fn get_game(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<GameDetail>, AppError> {
    let detail = game_service::get_game(&state, id).await?;
    Ok(Json(detail))
}
