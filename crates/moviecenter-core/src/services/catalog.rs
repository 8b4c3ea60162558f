//! Film catalog - the titles the browsing flow lists and searches
//!
//! The catalog is bundled with the app; there is no movie API behind it.

use std::sync::OnceLock;

use crate::models::Film;

fn film(
    title: &str,
    poster_url: &str,
    year: u16,
    genre: &str,
    rating: f32,
    description: &str,
) -> Film {
    Film {
        title: title.to_string(),
        poster_url: poster_url.to_string(),
        year,
        genre: genre.to_string(),
        rating,
        description: description.to_string(),
    }
}

/// Every film in the bundled catalog
pub fn all_films() -> &'static [Film] {
    static CATALOG: OnceLock<Vec<Film>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        vec![
            film(
                "Inception",
                "https://image.tmdb.org/t/p/w500/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg",
                2010,
                "Sci-Fi",
                8.8,
                "A thief who steals corporate secrets through dream-sharing technology is given an inverse task: plant an idea.",
            ),
            film(
                "The Dark Knight",
                "https://image.tmdb.org/t/p/w500/qJ2tW6WMUDux911r6m7haRef0WH.jpg",
                2008,
                "Action",
                9.0,
                "Batman faces the Joker, a criminal mastermind bent on plunging Gotham into anarchy.",
            ),
            film(
                "Interstellar",
                "https://image.tmdb.org/t/p/w500/gEU2QniE6E77NI6lCU6MxlNBvIx.jpg",
                2014,
                "Sci-Fi",
                8.6,
                "A team of explorers travel through a wormhole in space in an attempt to ensure humanity's survival.",
            ),
            film(
                "Parasite",
                "https://image.tmdb.org/t/p/w500/7IiTTgloJzvGI1TAYymCfbfl3vT.jpg",
                2019,
                "Thriller",
                8.5,
                "Greed and class discrimination threaten the symbiotic relationship between two families.",
            ),
            film(
                "The Matrix",
                "https://image.tmdb.org/t/p/w500/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg",
                1999,
                "Sci-Fi",
                8.7,
                "A computer hacker learns the true nature of his reality and his role in the war against its controllers.",
            ),
            film(
                "Spirited Away",
                "https://image.tmdb.org/t/p/w500/39wmItIWsg5sZMyRUHLkWBcuVCM.jpg",
                2001,
                "Animation",
                8.6,
                "A girl wanders into a world ruled by gods and witches, where humans are changed into beasts.",
            ),
            film(
                "Pulp Fiction",
                "https://image.tmdb.org/t/p/w500/d5iIlFn5s0ImszYzBPb8JPIfbXD.jpg",
                1994,
                "Crime",
                8.9,
                "The lives of two mob hitmen, a boxer and a pair of diner bandits intertwine in four tales of violence.",
            ),
            film(
                "Alien",
                "https://image.tmdb.org/t/p/w500/vfrQk5IPloGg1v9Rzbh2Eg3VGyM.jpg",
                1979,
                "Horror",
                8.5,
                "The crew of a commercial spacecraft encounter a deadly lifeform after investigating an unknown transmission.",
            ),
        ]
    })
}

/// Exact title lookup, case-insensitive
pub fn find_film(title: &str) -> Option<&'static Film> {
    all_films()
        .iter()
        .find(|f| f.title.eq_ignore_ascii_case(title))
}

/// Case-insensitive substring search over titles
pub fn search_films(query: &str) -> Vec<&'static Film> {
    let needle = query.to_lowercase();
    all_films()
        .iter()
        .filter(|f| f.title.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_not_empty() {
        assert!(!all_films().is_empty());
        for f in all_films() {
            assert!(!f.title.is_empty());
            assert!(f.poster_url.starts_with("https://"));
            assert!((0.0..=10.0).contains(&f.rating));
        }
    }

    #[test]
    fn test_find_film_ignores_case() {
        assert!(find_film("inception").is_some());
        assert!(find_film("INCEPTION").is_some());
        assert!(find_film("Incepshun").is_none());
    }

    #[test]
    fn test_search_films_substring() {
        let hits = search_films("the");
        assert!(hits.iter().any(|f| f.title == "The Dark Knight"));
        assert!(hits.iter().any(|f| f.title == "The Matrix"));

        assert!(search_films("zzzz").is_empty());
    }
}
