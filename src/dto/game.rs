use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationErrors};

use crate::{
    dao::models::{GameEntity, GameScoreEntity, GameSort, VoterEntity},
    dto::validation::validate_game_name,
};

/// Payload used to insert, rewrite, or delete a catalogue entry.
///
/// Without `id` a new game is inserted; with `id` the row is rewritten, or
/// deleted when `delete` is set.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveGameRequest {
    /// Target game for updates and deletes; omit to insert.
    #[serde(default)]
    pub id: Option<i64>,
    /// Game name, unique across the catalogue.
    pub name: String,
    /// Free-text disk usage note.
    #[serde(default)]
    pub disk_usage: String,
    /// Free-text description, may contain markup rendered on the detail view.
    #[serde(default)]
    pub info: String,
    /// Free-text player count note.
    #[serde(default)]
    pub players: String,
    /// Delete the game named by `id` instead of rewriting it.
    #[serde(default)]
    pub delete: bool,
}

impl Validate for SaveGameRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = validate_game_name(&self.name) {
            errors.add("name", e);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Identifier of the saved game; absent after a delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct SaveGameResponse {
    /// Id of the inserted or rewritten game.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

/// Query parameters accepted by the game list route.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListGamesQuery {
    /// Requesting user's id; folds their own vote into each row.
    #[serde(default)]
    pub uid: Option<i64>,
    /// Scoreboard ordering; defaults to name.
    #[serde(default)]
    pub sort_order: Option<GameSort>,
}

/// One scoreboard row shown on the voting board.
#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct GameSummary {
    /// Stable identifier for the game.
    pub id: i64,
    /// Game name.
    pub name: String,
    /// Free-text disk usage note.
    pub disk_usage: String,
    /// Free-text player count note.
    pub players: String,
    /// Number of +1 votes.
    pub upvotes: i64,
    /// Number of -1 votes.
    pub downvotes: i64,
    /// Upvotes minus downvotes; 0 for games without votes.
    pub score: i64,
    /// The viewer's own vote on this game, absent when they have none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewer_vote: Option<i64>,
}

impl From<GameScoreEntity> for GameSummary {
    fn from(row: GameScoreEntity) -> Self {
        Self {
            id: row.id,
            name: row.name,
            disk_usage: row.disk_usage,
            players: row.players,
            upvotes: row.upvotes,
            downvotes: row.downvotes,
            score: row.score,
            // Values are only ever ±1, so a zero total means no vote.
            viewer_vote: match row.viewer_value {
                0 => None,
                value => Some(value),
            },
        }
    }
}

/// Ranked games plus the full username list for client-side autocomplete.
#[derive(Debug, Serialize, ToSchema)]
pub struct GameListResponse {
    /// Scoreboard rows in the requested order.
    pub games: Vec<GameSummary>,
    /// Every registered username, ordered alphabetically.
    pub users: Vec<String>,
}

/// Full detail view of one game, including rendered info and voter lists.
#[derive(Debug, Serialize, ToSchema)]
pub struct GameDetail {
    /// Stable identifier for the game.
    pub id: i64,
    /// Game name.
    pub name: String,
    /// Free-text disk usage note.
    pub disk_usage: String,
    /// Raw info text as stored.
    pub info: String,
    /// Info sanitized against the markup allow-list, then rendered to HTML.
    pub info_html: String,
    /// Free-text player count note.
    pub players: String,
    /// Usernames that voted +1, ordered alphabetically.
    pub upvoters: Vec<String>,
    /// Usernames that voted -1, ordered alphabetically.
    pub downvoters: Vec<String>,
}

impl GameDetail {
    /// Assemble the detail view from the stored game, its rendered info, and
    /// the joined voter rows.
    pub fn assemble(game: GameEntity, info_html: String, voters: Vec<VoterEntity>) -> Self {
        let mut upvoters = Vec::new();
        let mut downvoters = Vec::new();
        for voter in voters {
            match voter.value {
                1 => upvoters.push(voter.username),
                -1 => downvoters.push(voter.username),
                _ => {}
            }
        }

        Self {
            id: game.id,
            name: game.name,
            disk_usage: game.disk_usage,
            info: game.info,
            info_html,
            players: game.players,
            upvoters,
            downvoters,
        }
    }
}
