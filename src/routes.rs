// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{game, health, users},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges the user and game sub-routers.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (store handle and config).
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    let user_routes = Router::new()
        .route("/users", post(users::create_user))
        .route(
            "/users/{username}",
            get(users::get_user).delete(users::delete_user),
        );

    let game_routes = Router::new()
        .route("/game/question", get(game::get_question))
        .route("/game/answer", post(game::submit_answer))
        .route("/game/challenge/{username}", get(game::get_challenge_info));

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .merge(user_routes)
        .merge(game_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// An empty origin list allows any origin.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(parsed)
}
