use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
    routing::post,
};

use crate::{
    dto::{
        common::ActionResponse,
        user::{UpsertUserRequest, UserIdResponse, UserListResponse},
    },
    error::AppError,
    services::user_service,
    state::SharedState,
};

/// Routes handling user registration and management.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", post(rename_user).delete(delete_user))
}

/// List every registered user.
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "Registered users", body = UserListResponse)
    )
)]
pub async fn list_users(
    State(state): State<SharedState>,
) -> Result<Json<UserListResponse>, AppError> {
    let users = user_service::list_users(&state).await?;
    Ok(Json(users))
}

/// Register a username, or fetch the id it already maps to.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = UpsertUserRequest,
    responses(
        (status = 200, description = "User created or already present", body = UserIdResponse)
    )
)]
pub async fn create_user(
    State(state): State<SharedState>,
    Json(payload): Json<UpsertUserRequest>,
) -> Result<Json<UserIdResponse>, AppError> {
    let response = user_service::create_or_get_user(&state, payload).await?;
    Ok(Json(response))
}

/// Rename an existing user.
#[utoipa::path(
    post,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "Identifier of the user to rename")),
    request_body = UpsertUserRequest,
    responses(
        (status = 200, description = "User renamed (or id unknown, a no-op)", body = ActionResponse),
        (status = 409, description = "Username already taken")
    )
)]
pub async fn rename_user(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpsertUserRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    user_service::rename_user(&state, id, payload).await?;
    Ok(Json(ActionResponse::ok()))
}

/// Delete a user together with their votes.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "Identifier of the user to delete")),
    responses(
        (status = 200, description = "User deleted (or id unknown, a no-op)", body = ActionResponse)
    )
)]
pub async fn delete_user(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<ActionResponse>, AppError> {
    user_service::delete_user(&state, id).await?;
    Ok(Json(ActionResponse::ok()))
}
