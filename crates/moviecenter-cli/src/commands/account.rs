//! Account commands
//!
//! Register, login, logout and status - the CLI rendition of the original
//! registration and login screens plus the app-start session check.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use super::Context;
use crate::output::{print_error, print_info, print_single, print_success};
use moviecenter_core::{auth, Error, Session};

/// Status row for table display
#[derive(Debug, Serialize, Tabled)]
pub struct StatusRow {
    #[tabled(rename = "User ID")]
    pub user_id: i64,
    #[tabled(rename = "Name")]
    pub full_name: String,
    #[tabled(rename = "Email")]
    pub email: String,
}

pub async fn register(ctx: &Context, name: String, email: String, password: String) -> Result<()> {
    match auth::register(&ctx.db, &name, &email, &password).await {
        Ok(user) => {
            print_success("Registration successful!", ctx.quiet);
            print_info(
                &format!("Log in with: moviecenter login --email {} --password <...>", user.email),
                ctx.quiet,
            );
            Ok(())
        }
        Err(Error::EmailExists) => {
            print_error("Registration failed. Email already exists.");
            std::process::exit(1);
        }
        Err(Error::Validation(msg)) => {
            print_error(&msg);
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn login(ctx: &Context, email: String, password: String) -> Result<()> {
    match auth::login(&ctx.db, &email, &password).await {
        Ok(user) => {
            ctx.session.save(&Session::from(&user))?;
            print_success(&format!("Login successful! Welcome, {}.", user.full_name), ctx.quiet);
            Ok(())
        }
        Err(Error::InvalidCredentials) => {
            print_error("Invalid email or password");
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}

pub fn logout(ctx: &Context) -> Result<()> {
    if !ctx.session.is_logged_in() {
        print_info("Not logged in.", ctx.quiet);
        return Ok(());
    }

    ctx.session.clear()?;
    print_success("Logged out.", ctx.quiet);
    Ok(())
}

pub fn status(ctx: &Context) -> Result<()> {
    match ctx.session.load() {
        Some(session) => print_single(
            &StatusRow {
                user_id: session.user_id,
                full_name: session.full_name,
                email: session.email,
            },
            ctx.format,
        ),
        None => {
            print_info("Not logged in.", ctx.quiet);
            Ok(())
        }
    }
}
