//! Search history - append-only per-user log of catalog searches

use crate::db::Database;
use crate::error::Result;
use crate::models::SearchEntry;

/// Record one search for a user
pub async fn insert_search_entry(db: &Database, user_id: i64, query: &str) -> Result<()> {
    sqlx::query("INSERT INTO search_history (user_id, search_query) VALUES (?, ?)")
        .bind(user_id)
        .bind(query)
        .execute(&db.pool)
        .await?;

    log::debug!("Recorded search {:?} for user {}", query, user_id);
    Ok(())
}

/// Most recent search queries for a user, newest first, at most `limit`
///
/// `search_id` breaks ties between entries recorded within the same second.
pub async fn recent_searches(db: &Database, user_id: i64, limit: i64) -> Result<Vec<String>> {
    let rows: Vec<(String,)> = sqlx::query_as(
        "SELECT search_query FROM search_history
         WHERE user_id = ?
         ORDER BY search_time DESC, search_id DESC
         LIMIT ?",
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(&db.pool)
    .await?;

    Ok(rows.into_iter().map(|(q,)| q).collect())
}

/// Full entries, for detail display
pub async fn recent_entries(db: &Database, user_id: i64, limit: i64) -> Result<Vec<SearchEntry>> {
    let entries = sqlx::query_as::<_, SearchEntry>(
        "SELECT search_id, user_id, search_query, search_time FROM search_history
         WHERE user_id = ?
         ORDER BY search_time DESC, search_id DESC
         LIMIT ?",
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(&db.pool)
    .await?;

    Ok(entries)
}

/// Delete all history for a user, returning how many rows went away
pub async fn clear_search_history(db: &Database, user_id: i64) -> Result<u64> {
    let done = sqlx::query("DELETE FROM search_history WHERE user_id = ?")
        .bind(user_id)
        .execute(&db.pool)
        .await?;

    log::info!("Cleared {} history entries for user {}", done.rows_affected(), user_id);
    Ok(done.rows_affected())
}
