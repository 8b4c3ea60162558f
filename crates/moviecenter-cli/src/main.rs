//! MovieCenter CLI - accounts, film browsing and search history
//!
//! The command-line rendition of the MovieCenter client: register and log in
//! against the local credential store, browse the film catalog, and keep a
//! per-user search history. A persisted session lets subsequent invocations
//! skip login, like the app-start check in the original flow.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "moviecenter")]
#[command(author, version, about = "MovieCenter - local movie browsing CLI", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format: table (default) or json
    #[arg(long, global = true, default_value = "table")]
    format: output::OutputFormat,

    /// Suppress progress messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Override database path (or set MOVIECENTER_DB_PATH env var)
    #[arg(long, env = "MOVIECENTER_DB_PATH", global = true)]
    db: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new account
    Register {
        /// Full name
        #[arg(long)]
        name: String,

        /// Email address (unique, case-sensitive)
        #[arg(long)]
        email: String,

        /// Password (at least 6 characters)
        #[arg(long)]
        password: String,
    },

    /// Log in and persist the session
    Login {
        /// Email address
        #[arg(long)]
        email: String,

        /// Password
        #[arg(long)]
        password: String,
    },

    /// Clear the persisted session
    Logout,

    /// Show who is logged in
    Status,

    /// Search the film catalog (recorded in history when logged in)
    Search {
        /// Title substring to look for
        query: String,
    },

    /// Browse the film catalog
    Films {
        #[command(subcommand)]
        action: commands::films::FilmsAction,
    },

    /// View and manage search history
    History {
        #[command(subcommand)]
        action: commands::history::HistoryAction,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Set up database path if provided
    if let Some(db_path) = &cli.db {
        let expanded = shellexpand::tilde(db_path).to_string();
        std::env::set_var("MOVIECENTER_DB_PATH", expanded);
    }

    // Initialize database and session store
    let db = moviecenter_core::Database::new().await?;
    let session = moviecenter_core::SessionStore::new()?;
    log::debug!("Store ready (core {})", moviecenter_core::version());

    // Create context for commands
    let ctx = commands::Context {
        db,
        session,
        format: cli.format,
        quiet: cli.quiet,
    };

    // Execute command
    match cli.command {
        Commands::Register { name, email, password } => {
            commands::account::register(&ctx, name, email, password).await
        }
        Commands::Login { email, password } => commands::account::login(&ctx, email, password).await,
        Commands::Logout => commands::account::logout(&ctx),
        Commands::Status => commands::account::status(&ctx),
        Commands::Search { query } => commands::films::search(&ctx, query).await,
        Commands::Films { action } => commands::films::execute(&ctx, action).await,
        Commands::History { action } => commands::history::execute(&ctx, action).await,
    }
}
