use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::{dao::models::UserEntity, dto::validation::validate_username};

/// Payload naming a user, shared by registration and rename.
///
/// Registration is idempotent: posting an existing username returns the
/// existing id instead of failing.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpsertUserRequest {
    /// Display name, unique across all users. Stored verbatim.
    pub username: String,
}

impl Validate for UpsertUserRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = validate_username(&self.username) {
            errors.add("username", e);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Identifier of a created-or-fetched user.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserIdResponse {
    /// Stable identifier for the user.
    pub id: i64,
}

/// One registered user.
#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct UserSummary {
    /// Stable identifier for the user.
    pub id: i64,
    /// Display name.
    pub username: String,
}

impl From<UserEntity> for UserSummary {
    fn from(user: UserEntity) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// Every registered user, ordered by id.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserListResponse {
    /// Registered users.
    pub users: Vec<UserSummary>,
}
