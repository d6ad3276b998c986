use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub security: SecurityConfig,
    pub grid: GridConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub access_token_expire_minutes: i64,
    pub bcrypt_cost: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GridConfig {
    /// Size used when a request does not name one
    pub default_size: usize,
    /// Largest grid a request may ask for
    pub max_size: usize,
}

/// Longest access token lifetime accepted from configuration (one year)
pub const MAX_TOKEN_EXPIRE_MINUTES: i64 = 60 * 24 * 365;

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key/value source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database = DatabaseConfig {
            url: var("DATABASE_URL", "sqlite://wordsearch.db"),
            max_connections: var("DATABASE_MAX_CONNECTIONS", "5")
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a number")?,
        };

        let server = ServerConfig {
            host: var("HOST", "0.0.0.0"),
            port: var("PORT", "8000")
                .parse()
                .context("PORT must be a number")?,
        };

        let security = SecurityConfig {
            jwt_secret: lookup("JWT_SECRET")
                .context("JWT_SECRET must be set")?,
            access_token_expire_minutes: var("ACCESS_TOKEN_EXPIRE_MINUTES", "30")
                .parse()
                .context("ACCESS_TOKEN_EXPIRE_MINUTES must be a number")?,
            bcrypt_cost: match lookup("BCRYPT_COST") {
                Some(cost) => cost.parse().context("BCRYPT_COST must be a number")?,
                None => bcrypt::DEFAULT_COST,
            },
        };

        if !(1..=MAX_TOKEN_EXPIRE_MINUTES).contains(&security.access_token_expire_minutes) {
            anyhow::bail!(
                "ACCESS_TOKEN_EXPIRE_MINUTES must be between 1 and {}",
                MAX_TOKEN_EXPIRE_MINUTES
            );
        }

        let grid = GridConfig {
            default_size: var("GRID_DEFAULT_SIZE", "10")
                .parse()
                .context("GRID_DEFAULT_SIZE must be a number")?,
            max_size: var("GRID_MAX_SIZE", "100")
                .parse()
                .context("GRID_MAX_SIZE must be a number")?,
        };

        if grid.default_size == 0 || grid.default_size > grid.max_size {
            anyhow::bail!(
                "GRID_DEFAULT_SIZE must be between 1 and GRID_MAX_SIZE ({})",
                grid.max_size
            );
        }

        Ok(Config {
            database,
            server,
            security,
            grid,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database.url
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.security.access_token_expire_minutes)
    }
}

#[cfg(test)]
impl Config {
    /// Fixed configuration for in-process tests
    pub(crate) fn for_tests() -> Self {
        Config {
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            security: SecurityConfig {
                jwt_secret: "test-secret".to_string(),
                access_token_expire_minutes: 30,
                bcrypt_cost: 4,
            },
            grid: GridConfig {
                default_size: 10,
                max_size: 100,
            },
        }
    }
}
