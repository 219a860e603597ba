/// Shared response envelopes.
pub mod common;
/// Game catalogue requests and responses.
pub mod game;
/// Health check payloads.
pub mod health;
/// User registration and management payloads.
pub mod user;
/// Validation helpers for DTOs.
pub mod validation;
/// Vote casting payloads.
pub mod vote;
