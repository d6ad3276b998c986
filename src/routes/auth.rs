use crate::{auth, db, error::ApiError, password, AppState};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// JWT for bearer authentication
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub user: String,
}

/// Create an account with a bcrypt-hashed password
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let username = payload.username.trim();
    if username.is_empty() || payload.password.is_empty() {
        return Err(ApiError::BadRequest(
            "Username and password must not be empty".to_string(),
        ));
    }

    tracing::info!("Registering user: {}", username);

    let hashed =
        password::hash_password_blocking(payload.password, state.config.security.bcrypt_cost)
            .await
            .map_err(|e| {
                tracing::error!("Failed to hash password: {:#}", e);
                ApiError::Internal
            })?;

    db::queries::create_user(&state.db, username, payload.email.trim(), &hashed)
        .await
        .map_err(|e| {
            if db::queries::is_unique_violation(&e) {
                tracing::warn!("Username already registered: {}", username);
                ApiError::Conflict(format!("Username '{}' is already registered", username))
            } else {
                tracing::error!("Failed to create user in database: {}", e);
                ApiError::Internal
            }
        })?;

    Ok(Json(MessageResponse {
        message: format!("User '{}' registered successfully", username),
    }))
}

/// Verify credentials and issue a bearer token
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = db::queries::get_user_by_username(&state.db, payload.username.trim())
        .await
        .map_err(|e| {
            tracing::error!("Database error fetching user for login: {}", e);
            ApiError::Internal
        })?
        .ok_or_else(|| {
            tracing::warn!("Login attempt for unknown user: {}", payload.username);
            ApiError::Unauthorized(INVALID_CREDENTIALS)
        })?;

    let matches = password::verify_password_blocking(payload.password, user.hashed_password)
        .await
        .map_err(|e| {
            tracing::error!("Failed to verify password for {}: {:#}", user.username, e);
            ApiError::Internal
        })?;

    if !matches {
        tracing::warn!("Wrong password for user: {}", user.username);
        return Err(ApiError::Unauthorized(INVALID_CREDENTIALS));
    }

    let access_token = auth::generate_token(
        user.id,
        &user.username,
        &state.config.security.jwt_secret,
        state.config.token_ttl(),
    )
    .map_err(|e| {
        tracing::error!("Failed to generate JWT token: {:#}", e);
        ApiError::Internal
    })?;

    tracing::info!("Successfully authenticated user: {} (ID: {})", user.username, user.id);

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}

/// Echo the username carried by the bearer token
pub async fn get_current_user(user: auth::AuthenticatedUser) -> Json<CurrentUserResponse> {
    tracing::debug!(
        "Getting user info for authenticated user: {} ({})",
        user.username,
        user.user_id
    );

    Json(CurrentUserResponse {
        user: user.username,
    })
}
