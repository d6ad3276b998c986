use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    /// Unique login name
    pub username: String,
    pub email: String,
    /// bcrypt hash, never the plain password
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub created_at: NaiveDateTime,
}
