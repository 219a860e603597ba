//! Tests for ballot casting, replacement, retraction, and authorization.

use lanvote_back::{
    dao::vote_store::SqliteVoteStore,
    dto::{
        game::{GameListResponse, SaveGameRequest},
        user::UpsertUserRequest,
        vote::CastVoteRequest,
    },
    error::ServiceError,
    services::{game_service, user_service, vote_service},
    state::{AppState, SharedState},
};

async fn state() -> SharedState {
    let store = SqliteVoteStore::connect_in_memory()
        .await
        .expect("in-memory store");
    AppState::new(store)
}

async fn register(state: &SharedState, username: &str) -> i64 {
    user_service::create_or_get_user(
        state,
        UpsertUserRequest {
            username: username.to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

async fn add_game(state: &SharedState, name: &str) -> i64 {
    game_service::save_game(
        state,
        SaveGameRequest {
            id: None,
            name: name.to_string(),
            disk_usage: String::new(),
            info: String::new(),
            players: String::new(),
            delete: false,
        },
    )
    .await
    .unwrap()
    .id
    .unwrap()
}

fn ballot(user_id: i64, username: &str, game_id: i64, value: i64) -> CastVoteRequest {
    CastVoteRequest {
        user_id,
        username: username.to_string(),
        game_id,
        value,
    }
}

async fn cast(
    state: &SharedState,
    user_id: i64,
    username: &str,
    game_id: i64,
    value: i64,
) -> GameListResponse {
    vote_service::cast_vote(state, ballot(user_id, username, game_id, value))
        .await
        .unwrap()
}

#[tokio::test]
async fn repeating_the_same_vote_is_idempotent() {
    let state = state().await;
    let alice = register(&state, "alice").await;
    let chess = add_game(&state, "Chess").await;

    cast(&state, alice, "alice", chess, 1).await;
    let list = cast(&state, alice, "alice", chess, 1).await;

    assert_eq!(state.store().count_votes().await.unwrap(), 1);
    assert_eq!(list.games[0].upvotes, 1);
    assert_eq!(list.games[0].score, 1);
}

#[tokio::test]
async fn flipping_a_vote_replaces_the_old_ballot() {
    let state = state().await;
    let alice = register(&state, "alice").await;
    let chess = add_game(&state, "Chess").await;

    cast(&state, alice, "alice", chess, 1).await;
    let list = cast(&state, alice, "alice", chess, -1).await;

    assert_eq!(state.store().count_votes().await.unwrap(), 1);
    let row = &list.games[0];
    assert_eq!(row.upvotes, 0);
    assert_eq!(row.downvotes, 1);
    assert_eq!(row.score, -1);
    assert_eq!(row.viewer_vote, Some(-1));
}

#[tokio::test]
async fn value_outside_plus_minus_one_retracts_the_vote() {
    let state = state().await;
    let alice = register(&state, "alice").await;
    let chess = add_game(&state, "Chess").await;

    cast(&state, alice, "alice", chess, 1).await;
    let list = cast(&state, alice, "alice", chess, 0).await;

    assert_eq!(state.store().count_votes().await.unwrap(), 0);
    let row = &list.games[0];
    assert_eq!(row.score, 0);
    assert_eq!(row.viewer_vote, None);
}

#[tokio::test]
async fn score_is_upvotes_minus_downvotes() {
    let state = state().await;
    let alice = register(&state, "alice").await;
    let bob = register(&state, "bob").await;
    let chess = add_game(&state, "Chess").await;

    cast(&state, alice, "alice", chess, 1).await;
    let list = cast(&state, bob, "bob", chess, -1).await;

    let row = &list.games[0];
    assert_eq!(row.upvotes, 1);
    assert_eq!(row.downvotes, 1);
    assert_eq!(row.score, 0);
    // The response reflects bob's own ballot, not alice's.
    assert_eq!(row.viewer_vote, Some(-1));

    let detail = game_service::get_game(&state, chess).await.unwrap();
    assert_eq!(detail.upvoters, vec!["alice".to_string()]);
    assert_eq!(detail.downvoters, vec!["bob".to_string()]);
}

#[tokio::test]
async fn mismatched_username_is_forbidden_and_records_nothing() {
    let state = state().await;
    let alice = register(&state, "alice").await;
    let chess = add_game(&state, "Chess").await;

    let err = vote_service::cast_vote(&state, ballot(alice, "mallory", chess, 1))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Forbidden(_)));
    assert_eq!(state.store().count_votes().await.unwrap(), 0);
}

#[tokio::test]
async fn unknown_user_id_is_forbidden() {
    let state = state().await;
    let chess = add_game(&state, "Chess").await;

    let err = vote_service::cast_vote(&state, ballot(404, "nobody", chess, 1))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Forbidden(_)));
}

#[tokio::test]
async fn voting_on_a_missing_game_is_not_found() {
    let state = state().await;
    let alice = register(&state, "alice").await;

    let err = vote_service::cast_vote(&state, ballot(alice, "alice", 999, 1))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
    assert_eq!(state.store().count_votes().await.unwrap(), 0);
}

#[tokio::test]
async fn retracting_a_vote_on_a_missing_game_succeeds() {
    let state = state().await;
    let alice = register(&state, "alice").await;

    // No row is inserted, so the foreign key never fires.
    let list = cast(&state, alice, "alice", 999, 0).await;
    assert!(list.games.is_empty());
}

#[tokio::test]
async fn response_is_sorted_by_name_for_the_voter() {
    let state = state().await;
    let alice = register(&state, "alice").await;
    add_game(&state, "Go").await;
    let chess = add_game(&state, "Chess").await;

    let list = cast(&state, alice, "alice", chess, 1).await;
    let names: Vec<_> = list.games.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Chess", "Go"]);
    assert_eq!(list.users, vec!["alice"]);
}

#[tokio::test]
async fn per_game_ballots_are_independent() {
    let state = state().await;
    let alice = register(&state, "alice").await;
    let chess = add_game(&state, "Chess").await;
    let go = add_game(&state, "Go").await;

    cast(&state, alice, "alice", chess, 1).await;
    let list = cast(&state, alice, "alice", go, -1).await;

    assert_eq!(state.store().count_votes().await.unwrap(), 2);
    let by_name: Vec<_> = list
        .games
        .iter()
        .map(|g| (g.name.as_str(), g.viewer_vote))
        .collect();
    assert_eq!(by_name, vec![("Chess", Some(1)), ("Go", Some(-1))]);
}
