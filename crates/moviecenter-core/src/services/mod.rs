//! Business logic services

pub mod catalog;
pub mod history;
pub mod posters;

pub use catalog::{all_films, find_film, search_films};
pub use history::{clear_search_history, insert_search_entry, recent_searches};
pub use posters::PosterCache;
