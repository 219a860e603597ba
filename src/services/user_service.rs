//! Business logic for user registration, rename, and removal.

use tracing::debug;
use validator::Validate;

use crate::{
    dao::storage::StorageError,
    dto::user::{UpsertUserRequest, UserIdResponse, UserListResponse, UserSummary},
    error::ServiceError,
    state::SharedState,
};

/// Enumerate every registered user.
pub async fn list_users(state: &SharedState) -> Result<UserListResponse, ServiceError> {
    let users = state.store().list_users().await?;
    Ok(UserListResponse {
        users: users.into_iter().map(UserSummary::from).collect(),
    })
}

/// Register a username, or fetch the existing id when it is already taken.
pub async fn create_or_get_user(
    state: &SharedState,
    request: UpsertUserRequest,
) -> Result<UserIdResponse, ServiceError> {
    request.validate()?;

    let id = state.store().create_or_get_user(&request.username).await?;
    debug!(id, username = %request.username, "resolved user");
    Ok(UserIdResponse { id })
}

/// Rename an existing user. Renaming a missing id is a no-op.
pub async fn rename_user(
    state: &SharedState,
    id: i64,
    request: UpsertUserRequest,
) -> Result<(), ServiceError> {
    request.validate()?;

    match state.store().rename_user(id, &request.username).await {
        Ok(_) => Ok(()),
        Err(StorageError::UniqueViolation(_)) => Err(ServiceError::Conflict(format!(
            "username `{}` is already taken",
            request.username
        ))),
        Err(err) => Err(err.into()),
    }
}

/// Delete a user together with their votes. Deleting a missing id is a no-op.
pub async fn delete_user(state: &SharedState, id: i64) -> Result<(), ServiceError> {
    let removed = state.store().delete_user(id).await?;
    debug!(id, removed, "deleted user");
    Ok(())
}
