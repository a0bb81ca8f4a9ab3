// tests/common/mod.rs

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use globetrotter::{
    config::Config, models::destination::Destination, routes, state::AppState, store::MemoryStore,
};

pub const JWT_SECRET: &str = "test_secret_for_integration_tests";

pub fn test_config() -> Config {
    Config {
        database_url: None,
        jwt_secret: JWT_SECRET.to_string(),
        jwt_expiration: 600, // 10 minutes for tests
        rust_log: "error".to_string(),
        port: 0,
        destinations_path: PathBuf::from("data/destinations.json"),
        question_options: 4,
        cors_origins: Vec::new(),
        log_dir: PathBuf::from("logs"),
    }
}

pub fn destination(city: &str, country: &str, clues: &[&str], fun_facts: &[&str]) -> Destination {
    Destination {
        city: city.to_string(),
        country: country.to_string(),
        clues: clues.iter().map(|c| c.to_string()).collect(),
        fun_facts: fun_facts.iter().map(|f| f.to_string()).collect(),
        trivia: vec![],
    }
}

pub fn sample_corpus() -> Vec<Destination> {
    vec![
        destination(
            "Paris",
            "France",
            &["A tower sparkles here every night.", "The City of Love."],
            &["Paris has only one stop sign."],
        ),
        destination(
            "Tokyo",
            "Japan",
            &["The busiest pedestrian crossing in the world."],
            &["Tokyo was once called Edo."],
        ),
        destination(
            "Rome",
            "Italy",
            &["Gladiators fought in its amphitheater.", "A country lies inside it."],
            &["Coins tossed in the Trevi Fountain go to charity."],
        ),
        destination("Cairo", "Egypt", &["The pyramids are nearby."], &[]),
        destination("Sydney", "Australia", &["Its opera house looks like sails."], &[]),
    ]
}

/// Helper function to spawn the app on a random port for testing.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
pub async fn spawn_app(destinations: Vec<Destination>) -> String {
    let store = Arc::new(MemoryStore::with_destinations(destinations));
    let state = AppState {
        store,
        config: test_config(),
    };

    let app = routes::create_router(state);

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

pub fn unique_name(prefix: &str) -> String {
    format!("{}_{}", prefix, &uuid::Uuid::new_v4().to_string()[..8])
}

pub async fn register(client: &reqwest::Client, address: &str, username: &str) -> reqwest::Response {
    client
        .post(format!("{}/users", address))
        .json(&serde_json::json!({ "username": username }))
        .send()
        .await
        .expect("Failed to execute request")
}
