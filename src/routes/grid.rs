use crate::{
    error::ApiError,
    game::{GridGenerator, WordValidator},
    models::Grid,
    AppState,
};
use axum::{extract::State, Json};
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct GridRequest {
    /// Grid dimension; the configured default when absent
    #[serde(default)]
    pub size: Option<i64>,
    pub words: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct GridResponse {
    pub grid: Grid,
}

/// Build a fresh word search puzzle for the requested words
pub async fn generate_grid(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GridRequest>,
) -> Result<Json<GridResponse>, ApiError> {
    let validator = WordValidator::new(state.config.grid.default_size, state.config.grid.max_size);

    let (size, words) = validator
        .resolve_size(payload.size)
        .and_then(|size| Ok((size, validator.normalize_words(&payload.words, size)?)))
        .inspect_err(|e| tracing::warn!("Rejected grid request: {}", e))?;

    // Each request gets its own independently seeded generator
    let mut rng = StdRng::from_os_rng();
    let grid = GridGenerator::create_wordsearch_grid(size, &words, &mut rng)?;

    tracing::info!("Generated {}x{} grid with {} words", size, size, words.len());

    Ok(Json(GridResponse { grid }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::locate_word;
    use crate::routes::test_support::{send, test_app};
    use axum::http::{Method, StatusCode};
    use serde_json::{json, Value};

    fn rows(body: &Value) -> Vec<String> {
        body["grid"]
            .as_array()
            .unwrap()
            .iter()
            .map(|row| {
                row.as_array()
                    .unwrap()
                    .iter()
                    .map(|cell| cell.as_str().unwrap())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_request_size_defaults_to_none() {
        let request: GridRequest = serde_json::from_str(r#"{"words": ["CAT"]}"#).unwrap();
        assert_eq!(request.size, None);
        assert_eq!(request.words, vec!["CAT"]);
    }

    #[tokio::test]
    async fn test_default_size_grid() {
        let app = test_app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/generate_grid",
            Some(json!({"words": ["rust", "Axum"]})),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let rows = rows(&body);
        assert_eq!(rows.len(), 10);
        for row in &rows {
            assert_eq!(row.len(), 10);
            assert!(row.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[tokio::test]
    async fn test_hello_is_placed() {
        let app = test_app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/generate_grid",
            Some(json!({"size": 5, "words": ["HELLO"]})),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let mut grid = GridGenerator::create_empty_grid(5).unwrap();
        for (row, line) in rows(&body).iter().enumerate() {
            for (col, letter) in line.chars().enumerate() {
                grid.set(crate::models::Position { row, col }, letter);
            }
        }
        assert!(locate_word(&grid, "HELLO").is_some());
    }

    #[tokio::test]
    async fn test_single_cell() {
        let app = test_app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/generate_grid",
            Some(json!({"size": 1, "words": ["a"]})),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"grid": [["A"]]}));
    }

    #[tokio::test]
    async fn test_word_longer_than_size_rejected() {
        let app = test_app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/generate_grid",
            Some(json!({"size": 3, "words": ["ABCD"]})),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().unwrap().contains("ABCD"));
    }

    #[tokio::test]
    async fn test_blank_word_rejected_by_position() {
        let app = test_app().await;
        for blank in ["", "   "] {
            let (status, body) = send(
                &app,
                Method::POST,
                "/generate_grid",
                Some(json!({"size": 5, "words": ["CAT", blank]})),
                None,
            )
            .await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(body["detail"], "Word #2 is empty");
        }
    }

    #[tokio::test]
    async fn test_non_letter_word_rejected() {
        let app = test_app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/generate_grid",
            Some(json!({"size": 10, "words": ["o'neil"]})),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().unwrap().contains("O'NEIL"));
    }

    #[tokio::test]
    async fn test_invalid_sizes_rejected() {
        let app = test_app().await;
        for size in [0, -4, 101] {
            let (status, _) = send(
                &app,
                Method::POST,
                "/generate_grid",
                Some(json!({"size": size, "words": []})),
                None,
            )
            .await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "size {}", size);
        }
    }
}
