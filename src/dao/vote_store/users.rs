//! User table operations.

use crate::dao::{models::UserEntity, storage::StorageResult, vote_store::SqliteVoteStore};

impl SqliteVoteStore {
    /// Enumerate all registered users, ordered by id.
    pub async fn list_users(&self) -> StorageResult<Vec<UserEntity>> {
        let users =
            sqlx::query_as::<_, UserEntity>("SELECT id, username FROM users ORDER BY id")
                .fetch_all(self.pool())
                .await?;
        Ok(users)
    }

    /// Enumerate all usernames, ordered alphabetically for display.
    pub async fn list_usernames(&self) -> StorageResult<Vec<String>> {
        let usernames =
            sqlx::query_scalar::<_, String>("SELECT username FROM users ORDER BY username")
                .fetch_all(self.pool())
                .await?;
        Ok(usernames)
    }

    /// Look up a user id by exact username.
    pub async fn find_user_id(&self, username: &str) -> StorageResult<Option<i64>> {
        let id = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(self.pool())
            .await?;
        Ok(id)
    }

    /// Look up the stored username for a user id.
    pub async fn find_username(&self, user_id: i64) -> StorageResult<Option<String>> {
        let username = sqlx::query_scalar::<_, String>("SELECT username FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_optional(self.pool())
            .await?;
        Ok(username)
    }

    /// Return the id for `username`, inserting the user first if missing.
    ///
    /// Losing an insert race to a concurrent caller with the same name is not
    /// an error: the conflict clause swallows the duplicate and the id is
    /// re-read, so every caller observes the same single row.
    pub async fn create_or_get_user(&self, username: &str) -> StorageResult<i64> {
        if let Some(id) = self.find_user_id(username).await? {
            return Ok(id);
        }

        let inserted = sqlx::query_scalar::<_, i64>(
            "INSERT INTO users (username) VALUES (?) ON CONFLICT(username) DO NOTHING RETURNING id",
        )
        .bind(username)
        .fetch_optional(self.pool())
        .await?;

        match inserted {
            Some(id) => Ok(id),
            None => {
                let id = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE username = ?")
                    .bind(username)
                    .fetch_one(self.pool())
                    .await?;
                Ok(id)
            }
        }
    }

    /// Rename a user, returning the number of affected rows.
    ///
    /// A missing id affects zero rows and is not an error; a name collision
    /// surfaces as a unique violation.
    pub async fn rename_user(&self, id: i64, username: &str) -> StorageResult<u64> {
        let result = sqlx::query("UPDATE users SET username = ? WHERE id = ?")
            .bind(username)
            .bind(id)
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete a user; their votes cascade. Deleting a missing id is a no-op.
    pub async fn delete_user(&self, id: i64) -> StorageResult<u64> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected())
    }
}
