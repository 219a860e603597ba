//! Tests for user registration, rename, and removal.

use lanvote_back::{
    dao::vote_store::SqliteVoteStore,
    dto::{game::SaveGameRequest, user::UpsertUserRequest, vote::CastVoteRequest},
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

fn upsert(username: &str) -> UpsertUserRequest {
    UpsertUserRequest {
        username: username.to_string(),
    }
}

fn new_game(name: &str) -> SaveGameRequest {
    SaveGameRequest {
        id: None,
        name: name.to_string(),
        disk_usage: String::new(),
        info: String::new(),
        players: String::new(),
        delete: false,
    }
}

#[tokio::test]
async fn registering_same_username_yields_same_id() {
    let state = state().await;

    let first = user_service::create_or_get_user(&state, upsert("alice"))
        .await
        .unwrap();
    let second = user_service::create_or_get_user(&state, upsert("alice"))
        .await
        .unwrap();

    assert_eq!(first.id, second.id);

    let users = user_service::list_users(&state).await.unwrap();
    assert_eq!(users.users.len(), 1);
    assert_eq!(users.users[0].username, "alice");
}

#[tokio::test]
async fn concurrent_registrations_converge_on_one_row() {
    let state = state().await;

    let mut handles = Vec::new();
    for _ in 0..8 {
        let state = state.clone();
        handles.push(tokio::spawn(async move {
            user_service::create_or_get_user(&state, upsert("carol")).await
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id);
    }

    assert!(ids.windows(2).all(|pair| pair[0] == pair[1]));
    let users = user_service::list_users(&state).await.unwrap();
    assert_eq!(users.users.len(), 1);
}

#[tokio::test]
async fn blank_username_is_rejected() {
    let state = state().await;

    let err = user_service::create_or_get_user(&state, upsert("   "))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));

    let users = user_service::list_users(&state).await.unwrap();
    assert!(users.users.is_empty());
}

#[tokio::test]
async fn rename_moves_votes_with_the_user() {
    let state = state().await;

    let alice = user_service::create_or_get_user(&state, upsert("alice"))
        .await
        .unwrap();
    let game = game_service::save_game(&state, new_game("Chess"))
        .await
        .unwrap();

    vote_service::cast_vote(
        &state,
        CastVoteRequest {
            user_id: alice.id,
            username: "alice".to_string(),
            game_id: game.id.unwrap(),
            value: 1,
        },
    )
    .await
    .unwrap();

    user_service::rename_user(&state, alice.id, upsert("alicia"))
        .await
        .unwrap();

    let detail = game_service::get_game(&state, game.id.unwrap())
        .await
        .unwrap();
    assert_eq!(detail.upvoters, vec!["alicia".to_string()]);
}

#[tokio::test]
async fn rename_onto_taken_username_conflicts() {
    let state = state().await;

    let alice = user_service::create_or_get_user(&state, upsert("alice"))
        .await
        .unwrap();
    user_service::create_or_get_user(&state, upsert("bob"))
        .await
        .unwrap();

    let err = user_service::rename_user(&state, alice.id, upsert("bob"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));

    // Both original rows survive the failed rename.
    let users = user_service::list_users(&state).await.unwrap();
    let names: Vec<_> = users.users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["alice", "bob"]);
}

#[tokio::test]
async fn rename_of_unknown_id_is_a_no_op() {
    let state = state().await;

    user_service::rename_user(&state, 4242, upsert("ghost"))
        .await
        .unwrap();

    let users = user_service::list_users(&state).await.unwrap();
    assert!(users.users.is_empty());
}

#[tokio::test]
async fn deleting_a_user_cascades_to_their_votes() {
    let state = state().await;

    let alice = user_service::create_or_get_user(&state, upsert("alice"))
        .await
        .unwrap();
    let bob = user_service::create_or_get_user(&state, upsert("bob"))
        .await
        .unwrap();
    let game = game_service::save_game(&state, new_game("Chess"))
        .await
        .unwrap();
    let game_id = game.id.unwrap();

    for (id, name) in [(alice.id, "alice"), (bob.id, "bob")] {
        vote_service::cast_vote(
            &state,
            CastVoteRequest {
                user_id: id,
                username: name.to_string(),
                game_id,
                value: 1,
            },
        )
        .await
        .unwrap();
    }

    user_service::delete_user(&state, alice.id).await.unwrap();

    // Bob's ballot is untouched by the cascade.
    assert_eq!(state.store().count_votes().await.unwrap(), 1);
    let detail = game_service::get_game(&state, game_id).await.unwrap();
    assert_eq!(detail.upvoters, vec!["bob".to_string()]);
}

#[tokio::test]
async fn deleting_an_unknown_user_is_a_no_op() {
    let state = state().await;

    user_service::create_or_get_user(&state, upsert("alice"))
        .await
        .unwrap();
    user_service::delete_user(&state, 999).await.unwrap();

    let users = user_service::list_users(&state).await.unwrap();
    assert_eq!(users.users.len(), 1);
}
