use anyhow::Context;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use jsonwebtoken::{decode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{error::ApiError, AppState};

const INVALID_CREDENTIALS: &str = "Could not validate credentials";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,      // User ID
    pub username: String, // Username
    pub exp: usize,       // Expiration time
}

#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub username: String,
}

/// Extractor for authenticated users from `Authorization: Bearer` tokens
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = ApiError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let app_state = Arc::<AppState>::from_ref(state);

        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
            .map(String::from);

        async move {
            let token = token.ok_or(ApiError::Unauthorized(INVALID_CREDENTIALS))?;

            let claims = decode_token(&token, &app_state.config.security.jwt_secret)
                .map_err(|e| {
                    tracing::debug!("Rejected bearer token: {}", e);
                    ApiError::Unauthorized(INVALID_CREDENTIALS)
                })?;

            let user_id = claims
                .sub
                .parse::<i64>()
                .map_err(|_| ApiError::Unauthorized(INVALID_CREDENTIALS))?;

            Ok(AuthenticatedUser {
                user_id,
                username: claims.username,
            })
        }
    }
}

/// Generate a JWT token for a user, valid for `ttl`
pub fn generate_token(
    user_id: i64,
    username: &str,
    jwt_secret: &str,
    ttl: chrono::Duration,
) -> anyhow::Result<String> {
    let expiration = chrono::Utc::now()
        .checked_add_signed(ttl)
        .context("Token expiration out of range")?
        .timestamp();

    let claims = Claims {
        sub: user_id.to_string(),
        username: username.to_string(),
        exp: expiration.max(0) as usize,
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_ref()),
    )
    .context("Failed to encode JWT")
}

/// Validate signature and expiry, returning the claims
pub fn decode_token(token: &str, jwt_secret: &str) -> jsonwebtoken::errors::Result<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}
