/// Database model definitions.
pub mod models;
/// Storage error classification shared by the store and the services.
pub mod storage;
/// SQLite store owning the users, games, and votes tables.
pub mod vote_store;
