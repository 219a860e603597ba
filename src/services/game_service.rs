//! Business logic for the game catalogue and the scoreboard.

use tracing::debug;
use validator::Validate;

use crate::{
    dao::{
        models::{GameDraft, GameSort},
        storage::StorageError,
    },
    dto::game::{GameDetail, GameListResponse, GameSummary, SaveGameRequest, SaveGameResponse},
    error::ServiceError,
    services::markdown,
    state::SharedState,
};

/// Insert, rewrite, or delete a catalogue entry according to the request.
pub async fn save_game(
    state: &SharedState,
    request: SaveGameRequest,
) -> Result<SaveGameResponse, ServiceError> {
    request.validate()?;

    let draft = GameDraft {
        name: request.name,
        disk_usage: request.disk_usage,
        info: request.info,
        players: request.players,
    };

    match (request.id, request.delete) {
        (None, _) => {
            let id = match state.store().insert_game(&draft).await {
                Ok(id) => id,
                Err(StorageError::UniqueViolation(_)) => {
                    return Err(ServiceError::Conflict(format!(
                        "a game named `{}` already exists",
                        draft.name
                    )));
                }
                Err(err) => return Err(err.into()),
            };
            debug!(id, name = %draft.name, "inserted game");
            Ok(SaveGameResponse { id: Some(id) })
        }
        (Some(id), true) => {
            let removed = state.store().delete_game(id).await?;
            debug!(id, removed, "deleted game");
            Ok(SaveGameResponse { id: None })
        }
        (Some(id), false) => {
            let affected = match state.store().update_game(id, &draft).await {
                Ok(affected) => affected,
                Err(StorageError::UniqueViolation(_)) => {
                    return Err(ServiceError::Conflict(format!(
                        "a game named `{}` already exists",
                        draft.name
                    )));
                }
                Err(err) => return Err(err.into()),
            };
            if affected == 0 {
                return Err(ServiceError::NotFound(format!("game `{id}` not found")));
            }
            Ok(SaveGameResponse { id: Some(id) })
        }
    }
}

/// Rank every game with its vote aggregates, as seen by `viewer`.
pub async fn list_games(
    state: &SharedState,
    viewer: Option<i64>,
    sort: GameSort,
) -> Result<GameListResponse, ServiceError> {
    let rows = state.store().scoreboard(viewer, sort).await?;
    let users = state.store().list_usernames().await?;

    Ok(GameListResponse {
        games: rows.into_iter().map(GameSummary::from).collect(),
        users,
    })
}

/// Fetch one game with its rendered info text and voter lists.
pub async fn get_game(state: &SharedState, id: i64) -> Result<GameDetail, ServiceError> {
    let Some(game) = state.store().find_game(id).await? else {
        return Err(ServiceError::NotFound(format!("game `{id}` not found")));
    };
    let voters = state.store().game_voters(id).await?;

    let info_html = markdown::render_info(&game.info);
    Ok(GameDetail::assemble(game, info_html, voters))
}
