use anyhow::{Context, Result};

/// Hash a plain password with bcrypt at the given cost
pub fn hash_password(password: &str, cost: u32) -> Result<String> {
    bcrypt::hash(password, cost).context("Failed to hash password")
}

/// Check a plain password against a stored bcrypt hash.
///
/// A malformed stored hash is an error, a mismatch is `Ok(false)`.
pub fn verify_password(password: &str, hashed: &str) -> Result<bool> {
    bcrypt::verify(password, hashed).context("Failed to verify password")
}

/// Run bcrypt hashing on the blocking pool so it does not stall the runtime
pub async fn hash_password_blocking(password: String, cost: u32) -> Result<String> {
    tokio::task::spawn_blocking(move || hash_password(&password, cost))
        .await
        .context("Password hashing task panicked")?
}

pub async fn verify_password_blocking(password: String, hashed: String) -> Result<bool> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hashed))
        .await
        .context("Password verification task panicked")?
}
