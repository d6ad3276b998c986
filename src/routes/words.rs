use crate::{db, error::ApiError, AppState};
use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;

use super::auth::MessageResponse;

#[derive(Debug, Deserialize)]
pub struct WordCreate {
    pub word: String,
}

pub async fn create_word(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<WordCreate>,
) -> Result<Json<MessageResponse>, ApiError> {
    let word = payload.word.trim();
    if word.is_empty() {
        return Err(ApiError::BadRequest("Word must not be empty".to_string()));
    }

    let stored = db::queries::add_word(&state.db, word).await.map_err(|e| {
        tracing::error!("Failed to store word: {}", e);
        ApiError::Internal
    })?;

    tracing::info!("Stored word '{}' (ID: {})", stored.word, stored.id);

    Ok(Json(MessageResponse {
        message: format!("Word '{}' added successfully", stored.word),
    }))
}

/// List every stored word; 404 while the list is empty
pub async fn get_words(State(state): State<Arc<AppState>>) -> Result<Json<Vec<String>>, ApiError> {
    let words = db::queries::get_all_words(&state.db).await.map_err(|e| {
        tracing::error!("Failed to fetch words: {}", e);
        ApiError::Internal
    })?;

    if words.is_empty() {
        return Err(ApiError::NotFound("No words found"));
    }

    Ok(Json(words))
}
