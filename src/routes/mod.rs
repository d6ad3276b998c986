pub mod auth;
pub mod grid;
pub mod health;
pub mod words;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/users/me", get(auth::get_current_user))
        .route("/words", get(words::get_words).post(words::create_word))
        .route("/generate_grid", post(grid::generate_grid))
}

/// Full application router with CORS and request tracing
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(create_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
