use sqlx::{Result, SqlitePool};

use crate::models::{User, Word};

// User queries
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    email: &str,
    hashed_password: &str,
) -> Result<User> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, email, hashed_password)
        VALUES (?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(username)
    .bind(email)
    .bind(hashed_password)
    .fetch_one(pool)
    .await
}

pub async fn get_user_by_username(pool: &SqlitePool, username: &str) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await
}

/// Whether `err` came from the UNIQUE constraint on `users.username`
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

// Word queries
pub async fn add_word(pool: &SqlitePool, word: &str) -> Result<Word> {
    sqlx::query_as::<_, Word>("INSERT INTO words (word) VALUES (?) RETURNING *")
        .bind(word)
        .fetch_one(pool)
        .await
}

/// All stored words in insertion order
pub async fn get_all_words(pool: &SqlitePool) -> Result<Vec<String>> {
    sqlx::query_scalar::<_, String>("SELECT word FROM words ORDER BY id")
        .fetch_all(pool)
        .await
}
