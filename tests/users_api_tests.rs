// tests/users_api_tests.rs

mod common;

use common::{JWT_SECRET, register, sample_corpus, spawn_app, unique_name};
use globetrotter::utils::jwt::verify_jwt;

#[tokio::test]
async fn register_works() {
    // Arrange
    let address = spawn_app(sample_corpus()).await;
    let client = reqwest::Client::new();
    let username = unique_name("u");

    // Act
    let response = register(&client, &address, &username).await;

    // Assert
    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["username"], username.as_str());
    assert_eq!(body["token_type"], "bearer");

    let claims = verify_jwt(body["access_token"].as_str().unwrap(), JWT_SECRET).unwrap();
    assert_eq!(claims.sub, username);
}

#[tokio::test]
async fn register_fails_validation() {
    let address = spawn_app(sample_corpus()).await;
    let client = reqwest::Client::new();

    // Act: Send a username that is too short
    let response = register(&client, &address, "yo").await;

    // Assert
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn duplicate_username_is_rejected() {
    let address = spawn_app(sample_corpus()).await;
    let client = reqwest::Client::new();
    let username = unique_name("dup");

    assert_eq!(register(&client, &address, &username).await.status().as_u16(), 201);
    let second = register(&client, &address, &username).await;

    assert_eq!(second.status().as_u16(), 409);
    let body: serde_json::Value = second.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().contains(&username));
}

#[tokio::test]
async fn user_lifecycle() {
    let address = spawn_app(sample_corpus()).await;
    let client = reqwest::Client::new();
    let username = unique_name("life");

    register(&client, &address, &username).await;

    // Fresh users start with zeroed counters
    let user: serde_json::Value = client
        .get(format!("{}/users/{}", address, username))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(user["username"], username.as_str());
    assert_eq!(user["score"], 0);
    assert_eq!(user["correct_answers"], 0);
    assert_eq!(user["total_answers"], 0);
    assert!(user["created_at"].is_string());

    // Delete
    let deleted = client
        .delete(format!("{}/users/{}", address, username))
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status().as_u16(), 200);
    let body: serde_json::Value = deleted.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains(&username));

    // Gone
    let missing = client
        .get(format!("{}/users/{}", address, username))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status().as_u16(), 404);

    let deleted_again = client
        .delete(format!("{}/users/{}", address, username))
        .send()
        .await
        .unwrap();
    assert_eq!(deleted_again.status().as_u16(), 404);
}
