/// OpenAPI documentation generation.
pub mod documentation;
/// Game catalogue management and scoreboard queries.
pub mod game_service;
/// Health check service.
pub mod health_service;
/// Sanitize-then-render pipeline for game info text.
pub mod markdown;
/// User registration and management.
pub mod user_service;
/// Vote casting with identity check and atomic replacement.
pub mod vote_service;
