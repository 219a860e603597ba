use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::dto::validation::validate_username;

/// Payload casting, changing, or retracting a vote.
///
/// The `(user_id, username)` pair is the whole authentication scheme: the
/// claimed name must exactly match the stored one or the vote is rejected.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CastVoteRequest {
    /// Id of the voting user.
    pub user_id: i64,
    /// Username the caller claims to own.
    pub username: String,
    /// Game being voted on.
    pub game_id: i64,
    /// +1 or -1 casts a vote; any other value retracts the existing one.
    pub value: i64,
}

impl Validate for CastVoteRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = validate_username(&self.username) {
            errors.add("username", e);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
