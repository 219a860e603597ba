use serde::Deserialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Registered voter stored in the `users` table.
#[derive(Debug, Clone, FromRow, PartialEq, Eq)]
pub struct UserEntity {
    /// Stable identifier assigned at registration.
    pub id: i64,
    /// Display name, unique across all users.
    pub username: String,
}

/// Catalogued game stored in the `games` table.
#[derive(Debug, Clone, FromRow, PartialEq, Eq)]
pub struct GameEntity {
    /// Stable identifier for the game.
    pub id: i64,
    /// Game name, unique across the catalogue.
    pub name: String,
    /// Free-text disk usage note (e.g. "12 GB").
    pub disk_usage: String,
    /// Free-text description, may contain markup.
    pub info: String,
    /// Free-text player count note (e.g. "2-8").
    pub players: String,
}

/// Fields supplied when inserting or rewriting a game row.
#[derive(Debug, Clone)]
pub struct GameDraft {
    /// Game name, unique across the catalogue.
    pub name: String,
    /// Free-text disk usage note.
    pub disk_usage: String,
    /// Free-text description, may contain markup.
    pub info: String,
    /// Free-text player count note.
    pub players: String,
}

/// One scoreboard row: a game joined with its vote aggregates.
///
/// Aggregates come from SQLite `TOTAL()`, which yields 0 for games without
/// votes instead of NULL.
#[derive(Debug, Clone, FromRow, PartialEq, Eq)]
pub struct GameScoreEntity {
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
    /// Upvotes minus downvotes.
    pub score: i64,
    /// Sum of the viewer's vote on this game; 0 when absent.
    pub viewer_value: i64,
}

/// A vote joined with the username of the user who cast it.
#[derive(Debug, Clone, FromRow, PartialEq, Eq)]
pub struct VoterEntity {
    /// Name of the voting user.
    pub username: String,
    /// Vote value, +1 or -1.
    pub value: i64,
}

/// Orderings supported by the game scoreboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GameSort {
    /// Ascending by game name.
    #[default]
    Name,
    /// Descending by score, ties broken by ascending name.
    Score,
    /// Descending by upvote count, ties broken by ascending name.
    Upvotes,
}
