//! Authentication - password digests, registration and login
//!
//! The digest is deliberately the same scheme the deployed store already
//! holds: unsalted SHA-256 of the UTF-8 password bytes, rendered as 64
//! lowercase hex characters. Identical passwords therefore produce identical
//! digests across users; switching to a salted scheme would orphan every
//! stored hash, so the weakness is documented here instead of silently fixed.

use sha2::{Digest, Sha256};

use crate::db::Database;
use crate::error::{Error, Result};
use crate::models::User;

/// Hash a password into a 64-char lowercase hex SHA-256 digest
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Register a new user
///
/// Validates input, then issues a single constrained INSERT; the UNIQUE
/// constraint on `users.email` is the only duplicate check, so two racing
/// registrations for the same email cannot both succeed.
pub async fn register(db: &Database, full_name: &str, email: &str, password: &str) -> Result<User> {
    validate_registration(full_name, email, password)?;

    let password_hash = hash_password(password);

    let result = sqlx::query(
        "INSERT INTO users (full_name, email, password_hash) VALUES (?, ?, ?)",
    )
    .bind(full_name)
    .bind(email)
    .bind(&password_hash)
    .execute(&db.pool)
    .await;

    match result {
        Ok(done) => {
            let id = done.last_insert_rowid();
            log::info!("Registered user {} ({})", id, email);
            fetch_user_by_id(db, id).await
        }
        Err(err) if Error::is_unique_violation(&err) => Err(Error::EmailExists),
        Err(err) => Err(err.into()),
    }
}

/// Log a user in
///
/// Returns `InvalidCredentials` for both an unknown email and a wrong
/// password, so callers cannot enumerate registered addresses.
pub async fn login(db: &Database, email: &str, password: &str) -> Result<User> {
    let user = find_user_by_email(db, email)
        .await?
        .ok_or(Error::InvalidCredentials)?;

    if user.password_hash != hash_password(password) {
        return Err(Error::InvalidCredentials);
    }

    log::info!("User {} logged in", user.id);
    Ok(user)
}

/// Look up a user by email (case-sensitive natural key)
pub async fn find_user_by_email(db: &Database, email: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, full_name, email, password_hash, created_at FROM users WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(&db.pool)
    .await?;

    Ok(user)
}

/// Get a user's id by email
pub async fn user_id(db: &Database, email: &str) -> Result<Option<i64>> {
    Ok(find_user_by_email(db, email).await?.map(|u| u.id))
}

/// Get a user's full name by email
pub async fn full_name(db: &Database, email: &str) -> Result<Option<String>> {
    Ok(find_user_by_email(db, email).await?.map(|u| u.full_name))
}

async fn fetch_user_by_id(db: &Database, id: i64) -> Result<User> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, full_name, email, password_hash, created_at FROM users WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&db.pool)
    .await?;

    user.ok_or_else(|| Error::not_found(format!("user id {}", id)))
}

/// Client-side rules the original registration screen enforced
fn validate_registration(full_name: &str, email: &str, password: &str) -> Result<()> {
    if full_name.trim().len() < 2 {
        return Err(Error::validation(
            "Full name must be at least 2 characters",
        ));
    }
    if !looks_like_email(email) {
        return Err(Error::validation("Please enter a valid email address"));
    }
    if password.len() < 6 {
        return Err(Error::validation(
            "Password must be at least 6 characters",
        ));
    }
    Ok(())
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}
