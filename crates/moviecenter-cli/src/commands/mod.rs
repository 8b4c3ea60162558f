//! CLI commands module
//!
//! One module per screen of the original flow: account (register/login),
//! films (browse/search), history.

pub mod account;
pub mod films;
pub mod history;

use crate::output::OutputFormat;
use moviecenter_core::{Database, Session, SessionStore};

/// Shared context for all commands
pub struct Context {
    pub db: Database,
    pub session: SessionStore,
    pub format: OutputFormat,
    pub quiet: bool,
}

impl Context {
    /// The persisted session, or an error telling the user to log in
    pub fn require_login(&self) -> anyhow::Result<Session> {
        self.session
            .load()
            .ok_or_else(|| anyhow::anyhow!("Not logged in. Run `moviecenter login` first."))
    }
}
