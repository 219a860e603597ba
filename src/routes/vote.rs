use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::{game::GameListResponse, vote::CastVoteRequest},
    error::AppError,
    services::vote_service,
    state::SharedState,
};

/// Routes handling ballot submission.
pub fn router() -> Router<SharedState> {
    Router::new().route("/votes", post(cast_vote))
}

/// Replace the caller's ballot for a game and return the refreshed scoreboard.
#[utoipa::path(
    post,
    path = "/votes",
    tag = "votes",
    request_body = CastVoteRequest,
    responses(
        (status = 200, description = "Scoreboard after the ballot was recorded", body = GameListResponse),
        (status = 403, description = "Username does not match the registered user"),
        (status = 404, description = "Unknown game id")
    )
)]
pub async fn cast_vote(
    State(state): State<SharedState>,
    Json(payload): Json<CastVoteRequest>,
) -> Result<Json<GameListResponse>, AppError> {
    let response = vote_service::cast_vote(&state, payload).await?;
    Ok(Json(response))
}
