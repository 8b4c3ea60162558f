//! Film commands - the list/detail browsing flow and catalog search

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;
use tabled::Tabled;

use super::Context;
use crate::output::{print_error, print_info, print_output, print_single};
use moviecenter_core::{services, Film, PosterCache};

#[derive(Subcommand)]
pub enum FilmsAction {
    /// List every film in the catalog
    List,

    /// Show one film's details
    Show {
        /// Film title (case-insensitive)
        title: String,

        /// Download the poster into the local cache and print its path
        #[arg(long)]
        fetch_poster: bool,
    },
}

/// Film row for the list view
#[derive(Debug, Serialize, Tabled)]
pub struct FilmRow {
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Year")]
    pub year: u16,
    #[tabled(rename = "Genre")]
    pub genre: String,
    #[tabled(rename = "Rating")]
    pub rating: f32,
}

impl From<&Film> for FilmRow {
    fn from(f: &Film) -> Self {
        Self {
            title: f.title.clone(),
            year: f.year,
            genre: f.genre.clone(),
            rating: f.rating,
        }
    }
}

/// Film detail for the show view
#[derive(Debug, Serialize, Tabled)]
pub struct FilmDetail {
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Year")]
    pub year: u16,
    #[tabled(rename = "Genre")]
    pub genre: String,
    #[tabled(rename = "Rating")]
    pub rating: f32,
    #[tabled(rename = "Poster")]
    pub poster_url: String,
    #[tabled(rename = "Description")]
    pub description: String,
}

pub async fn execute(ctx: &Context, action: FilmsAction) -> Result<()> {
    match action {
        FilmsAction::List => list(ctx),
        FilmsAction::Show { title, fetch_poster } => show(ctx, title, fetch_poster).await,
    }
}

fn list(ctx: &Context) -> Result<()> {
    let rows: Vec<FilmRow> = services::all_films().iter().map(FilmRow::from).collect();
    print_output(&rows, ctx.format)
}

async fn show(ctx: &Context, title: String, fetch_poster: bool) -> Result<()> {
    let Some(film) = services::find_film(&title) else {
        print_error(&format!("No film titled {:?} in the catalog", title));
        std::process::exit(1);
    };

    print_single(
        &FilmDetail {
            title: film.title.clone(),
            year: film.year,
            genre: film.genre.clone(),
            rating: film.rating,
            poster_url: film.poster_url.clone(),
            description: film.description.clone(),
        },
        ctx.format,
    )?;

    if fetch_poster {
        let cache = PosterCache::new()?;
        let path = cache.fetch(&film.poster_url).await?;
        print_info(&format!("Poster cached at {}", path.display()), ctx.quiet);
    }

    Ok(())
}

/// Catalog search; records a history entry when a user is logged in
pub async fn search(ctx: &Context, query: String) -> Result<()> {
    let hits: Vec<FilmRow> = services::search_films(&query)
        .into_iter()
        .map(FilmRow::from)
        .collect();

    if let Some(session) = ctx.session.load() {
        services::insert_search_entry(&ctx.db, session.user_id, &query).await?;
    }

    print_output(&hits, ctx.format)
}
