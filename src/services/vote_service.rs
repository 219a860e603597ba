//! Business logic for casting votes.

use tracing::debug;
use validator::Validate;

use crate::{
    dao::{models::GameSort, storage::StorageError},
    dto::{game::GameListResponse, vote::CastVoteRequest},
    error::ServiceError,
    services::game_service,
    state::SharedState,
};

/// Cast, change, or retract a vote, then return the refreshed game list as
/// seen by the voter.
///
/// The claimed username must exactly match the one stored for `user_id`; a
/// mismatch rejects the request before any state changes.
pub async fn cast_vote(
    state: &SharedState,
    request: CastVoteRequest,
) -> Result<GameListResponse, ServiceError> {
    request.validate()?;

    let stored = state.store().find_username(request.user_id).await?;
    if stored.as_deref() != Some(request.username.as_str()) {
        return Err(ServiceError::Forbidden(
            "username does not match the registered user".into(),
        ));
    }

    // Anything outside ±1 retracts the vote instead of storing it.
    let value = match request.value {
        1 | -1 => Some(request.value),
        _ => None,
    };

    match state
        .store()
        .replace_vote(request.user_id, request.game_id, value)
        .await
    {
        Ok(()) => {}
        Err(StorageError::ForeignKeyViolation(_)) => {
            return Err(ServiceError::NotFound(format!(
                "game `{}` not found",
                request.game_id
            )));
        }
        Err(err) => return Err(err.into()),
    }

    debug!(
        user_id = request.user_id,
        game_id = request.game_id,
        value = request.value,
        "vote recorded"
    );

    game_service::list_games(state, Some(request.user_id), GameSort::default()).await
}
