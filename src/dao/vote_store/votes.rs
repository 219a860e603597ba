//! Vote table operations.

use crate::dao::{storage::StorageResult, vote_store::SqliteVoteStore};

impl SqliteVoteStore {
    /// Replace the vote for `(user_id, game_id)` inside one transaction.
    ///
    /// The existing vote, if any, is removed first; `value` of `Some(±1)`
    /// inserts the replacement, `None` leaves no vote behind. Both statements
    /// commit together — a failed insert (e.g. the game vanished and the
    /// foreign key rejects it) rolls the delete back too, so the pair is
    /// never left partially applied.
    pub async fn replace_vote(
        &self,
        user_id: i64,
        game_id: i64,
        value: Option<i64>,
    ) -> StorageResult<()> {
        let mut tx = self.pool().begin().await?;

        sqlx::query("DELETE FROM votes WHERE user_id = ? AND game_id = ?")
            .bind(user_id)
            .bind(game_id)
            .execute(&mut *tx)
            .await?;

        if let Some(value) = value {
            sqlx::query("INSERT INTO votes (user_id, game_id, value) VALUES (?, ?, ?)")
                .bind(user_id)
                .bind(game_id)
                .bind(value)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Count all stored votes. Used by tests to assert cascade behavior.
    pub async fn count_votes(&self) -> StorageResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM votes")
            .fetch_one(self.pool())
            .await?;
        Ok(count)
    }
}
