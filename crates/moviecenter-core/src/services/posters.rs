//! Poster fetching - downloads film posters and caches them on disk
//!
//! Cache entries are keyed by the SHA-256 of the poster URL, so a repeat
//! fetch for the same URL is served from disk without touching the network.
//! Display transforms (the app's rounded-corner crop) are a UI concern and
//! are not applied here.

use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub struct PosterCache {
    client: reqwest::Client,
    cache_dir: PathBuf,
}

impl PosterCache {
    /// Create a cache under the default app data directory
    pub fn new() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("com", "moviecenter", "MovieCenter")
            .ok_or_else(|| Error::config("Could not determine project directories"))?;
        Ok(Self::at(dirs.cache_dir().join("posters")))
    }

    /// Create a cache rooted at a specific directory
    pub fn at(cache_dir: PathBuf) -> Self {
        Self {
            client: reqwest::Client::new(),
            cache_dir,
        }
    }

    /// On-disk location for a poster URL
    pub fn path_for(&self, url: &str) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(url.as_bytes());
        self.cache_dir.join(format!("{}.img", hex::encode(hasher.finalize())))
    }

    /// True when the poster is already cached
    pub fn is_cached(&self, url: &str) -> bool {
        self.path_for(url).exists()
    }

    /// Fetch a poster, returning the cached file path
    pub async fn fetch(&self, url: &str) -> Result<PathBuf> {
        let path = self.path_for(url);
        if path.exists() {
            log::debug!("Poster cache hit for {}", url);
            return Ok(path);
        }

        log::info!("Downloading poster {}", url);
        let bytes = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        write_atomic(&path, &bytes)?;
        Ok(path)
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("img.tmp");
    std::fs::write(&tmp, bytes)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_for_is_stable_and_distinct() {
        let dir = tempfile::tempdir().unwrap();
        let cache = PosterCache::at(dir.path().to_path_buf());

        let a = cache.path_for("https://example.com/a.jpg");
        let b = cache.path_for("https://example.com/b.jpg");
        assert_eq!(a, cache.path_for("https://example.com/a.jpg"));
        assert_ne!(a, b);
        assert!(a.extension().is_some_and(|e| e == "img"));
    }

    #[tokio::test]
    async fn test_fetch_serves_cached_file_without_network() {
        let dir = tempfile::tempdir().unwrap();
        let cache = PosterCache::at(dir.path().to_path_buf());

        let url = "https://posters.invalid/unreachable.jpg";
        let path = cache.path_for(url);
        write_atomic(&path, b"poster-bytes").unwrap();

        // The host does not resolve; a hit proves no request was made
        assert!(cache.is_cached(url));
        let served = cache.fetch(url).await.unwrap();
        assert_eq!(served, path);
        assert_eq!(std::fs::read(served).unwrap(), b"poster-bytes");
    }
}
