//! # moviecenter-core
//!
//! Core logic for MovieCenter, shared by its front ends.
//!
//! This crate provides:
//! - Credential store operations (`db` module)
//! - Data models (`models` module)
//! - Registration, login and password digests (`auth` module)
//! - Persisted session state (`session` module)
//! - Film catalog, search history and poster cache (`services` module)
//! - Unified error handling (`error` module)

pub mod auth;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod session;

// Re-exports for convenience
pub use db::Database;
pub use error::{Error, Result};

pub use models::{Film, SearchEntry, User, UserResponse};
pub use session::{Session, SessionStore};

pub use services::{
    all_films, clear_search_history, find_film, insert_search_entry, recent_searches,
    search_films, PosterCache,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
