//! History commands - the logged-in user's recent catalog searches

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Subcommand;
use serde::Serialize;
use tabled::Tabled;

use super::Context;
use crate::output::{print_output, print_success};
use moviecenter_core::services::history;

#[derive(Subcommand)]
pub enum HistoryAction {
    /// Show recent searches, most recent first
    List {
        /// Maximum number of entries
        #[arg(long, default_value_t = 10)]
        limit: i64,
    },

    /// Delete all recorded searches
    Clear,
}

/// History row for table display
#[derive(Debug, Serialize, Tabled)]
pub struct HistoryRow {
    #[tabled(rename = "Query")]
    pub query: String,
    #[tabled(rename = "Searched at")]
    pub searched_at: DateTime<Utc>,
}

pub async fn execute(ctx: &Context, action: HistoryAction) -> Result<()> {
    match action {
        HistoryAction::List { limit } => list(ctx, limit).await,
        HistoryAction::Clear => clear(ctx).await,
    }
}

async fn list(ctx: &Context, limit: i64) -> Result<()> {
    let session = ctx.require_login()?;

    let rows: Vec<HistoryRow> = history::recent_entries(&ctx.db, session.user_id, limit)
        .await?
        .into_iter()
        .map(|e| HistoryRow {
            query: e.search_query,
            searched_at: e.search_time,
        })
        .collect();

    print_output(&rows, ctx.format)
}

async fn clear(ctx: &Context) -> Result<()> {
    let session = ctx.require_login()?;

    let removed = history::clear_search_history(&ctx.db, session.user_id).await?;
    print_success(&format!("Cleared {} search entries.", removed), ctx.quiet);
    Ok(())
}
