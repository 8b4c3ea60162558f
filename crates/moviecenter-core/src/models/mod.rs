//! Data models for the MovieCenter application

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User model, one row per registered identity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    /// Natural key, case-sensitive, unique in the store
    pub email: String,
    /// 64-char lowercase hex SHA-256 digest
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User response (without the password digest)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// One recorded search, append-only
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SearchEntry {
    pub search_id: i64,
    pub user_id: Option<i64>,
    pub search_query: String,
    pub search_time: DateTime<Utc>,
}

/// Film value object handed to the list/detail layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Film {
    pub title: String,
    pub poster_url: String,
    pub year: u16,
    pub genre: String,
    /// 0.0 - 10.0
    pub rating: f32,
    pub description: String,
}
