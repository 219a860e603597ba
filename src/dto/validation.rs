//! Validation helpers for DTOs.

use validator::ValidationError;

/// Validates that a username is present and not just whitespace.
///
/// Usernames are stored verbatim (no trimming), so an all-whitespace name
/// would otherwise become an unusable but unique row.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        let mut err = ValidationError::new("username_empty");
        err.message = Some("Username must not be empty".into());
        return Err(err);
    }

    Ok(())
}

/// Validates that a game name is present and not just whitespace.
pub fn validate_game_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut err = ValidationError::new("game_name_empty");
        err.message = Some("Game name must not be empty".into());
        return Err(err);
    }

    Ok(())
}
