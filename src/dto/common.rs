use serde::Serialize;
use utoipa::ToSchema;

/// Minimal acknowledgement returned by mutations without a payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct ActionResponse {
    /// Always "ok" for a successful action.
    pub status: String,
}

impl ActionResponse {
    /// Create an acknowledgement for a completed action.
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
