//! Word search puzzle service: grid generation plus a small account and
//! word-list API.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod game;
pub mod models;
pub mod password;
pub mod routes;

use config::Config;
use sqlx::SqlitePool;

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    pub db: SqlitePool,
}
