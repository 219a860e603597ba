//! Game table operations and vote aggregation queries.

use crate::dao::{
    models::{GameDraft, GameEntity, GameScoreEntity, GameSort, VoterEntity},
    storage::StorageResult,
    vote_store::SqliteVoteStore,
};

/// Scoreboard projection shared by every sort order. `TOTAL()` (not `SUM()`)
/// keeps games without votes at score 0 instead of NULL.
const SCOREBOARD_SQL: &str = "\
    SELECT \
        games.id, \
        games.name, \
        games.disk_usage, \
        games.players, \
        (SELECT COUNT(*) FROM votes WHERE votes.game_id = games.id AND value = 1) AS upvotes, \
        (SELECT COUNT(*) FROM votes WHERE votes.game_id = games.id AND value = -1) AS downvotes, \
        (SELECT CAST(TOTAL(value) AS INTEGER) FROM votes WHERE votes.game_id = games.id) AS score, \
        (SELECT CAST(TOTAL(value) AS INTEGER) FROM votes \
            WHERE votes.game_id = games.id AND votes.user_id = ?) AS viewer_value \
    FROM games";

impl SqliteVoteStore {
    /// Insert a new game and return its id. A name collision surfaces as a
    /// unique violation.
    pub async fn insert_game(&self, draft: &GameDraft) -> StorageResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO games (name, disk_usage, info, players) VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(&draft.name)
        .bind(&draft.disk_usage)
        .bind(&draft.info)
        .bind(&draft.players)
        .fetch_one(self.pool())
        .await?;
        Ok(id)
    }

    /// Rewrite every field of an existing game, returning the number of
    /// affected rows. A collision with another game's name surfaces as a
    /// unique violation.
    pub async fn update_game(&self, id: i64, draft: &GameDraft) -> StorageResult<u64> {
        let result = sqlx::query(
            "UPDATE games SET name = ?, disk_usage = ?, info = ?, players = ? WHERE id = ?",
        )
        .bind(&draft.name)
        .bind(&draft.disk_usage)
        .bind(&draft.info)
        .bind(&draft.players)
        .bind(id)
        .execute(self.pool())
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete a game; votes on it cascade. Deleting a missing id is a no-op.
    pub async fn delete_game(&self, id: i64) -> StorageResult<u64> {
        let result = sqlx::query("DELETE FROM games WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected())
    }

    /// Fetch the full record for one game.
    pub async fn find_game(&self, id: i64) -> StorageResult<Option<GameEntity>> {
        let game = sqlx::query_as::<_, GameEntity>(
            "SELECT id, name, disk_usage, info, players FROM games WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;
        Ok(game)
    }

    /// Rank every game with its vote aggregates, computed per read.
    ///
    /// `viewer` folds the requesting user's own vote into each row; binding
    /// NULL matches no vote rows, which `TOTAL()` reports as 0.
    pub async fn scoreboard(
        &self,
        viewer: Option<i64>,
        sort: GameSort,
    ) -> StorageResult<Vec<GameScoreEntity>> {
        let order_by = match sort {
            GameSort::Name => "ORDER BY name ASC",
            GameSort::Score => "ORDER BY score DESC, name ASC",
            GameSort::Upvotes => "ORDER BY upvotes DESC, name ASC",
        };
        let sql = format!("{SCOREBOARD_SQL} {order_by}");

        let rows = sqlx::query_as::<_, GameScoreEntity>(&sql)
            .bind(viewer)
            .fetch_all(self.pool())
            .await?;
        Ok(rows)
    }

    /// List who voted on a game, joined to usernames, ordered alphabetically.
    pub async fn game_voters(&self, game_id: i64) -> StorageResult<Vec<VoterEntity>> {
        let voters = sqlx::query_as::<_, VoterEntity>(
            "SELECT users.username, votes.value FROM votes \
             INNER JOIN users ON users.id = votes.user_id \
             WHERE votes.game_id = ? \
             ORDER BY users.username",
        )
        .bind(game_id)
        .fetch_all(self.pool())
        .await?;
        Ok(voters)
    }
}
