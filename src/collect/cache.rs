//! On-disk caching of collected participant maps.
//!
//! One JSON file per repository under the platform cache directory. A file
//! older than [`MAX_CACHE_AGE_SECS`] triggers a fresh collection run; a
//! corrupt or unreadable file is treated as absent, never as an error.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::types::ParticipantMap;

/// Collected data becomes stale one hour after it was written.
pub const MAX_CACHE_AGE_SECS: i64 = 3600;

/// One cached collection run for a single repository.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CachedCollection {
    /// Unix timestamp of the collection run
    pub update_time: i64,
    /// Unix timestamp of the most recent item seen, if any
    #[serde(default)]
    pub latest_created_at: Option<i64>,
    /// The collected participant map, before exclusions
    pub participants: ParticipantMap,
}

/// Manages the per-repository cache files.
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    /// Open the cache under the platform cache directory, e.g.
    /// `~/.cache/reposcore` on Linux.
    pub fn open_default() -> Result<Self> {
        let dir = dirs::cache_dir()
            .context("no cache directory on this platform")?
            .join("reposcore");
        Self::open(dir)
    }

    /// Open the cache under an explicit directory, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create cache directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    fn path_for(&self, repo: &str) -> PathBuf {
        self.dir.join(format!("{}.json", repo.replace('/', "_")))
    }

    /// Load the cached collection for `repo`. Unreadable or corrupt files
    /// count as a cache miss.
    pub fn load(&self, repo: &str) -> Option<CachedCollection> {
        let path = self.path_for(repo);
        let raw = fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(cached) => Some(cached),
            Err(err) => {
                warn!("discarding corrupt cache file {}: {err}", path.display());
                None
            }
        }
    }

    /// Persist one collection run for `repo`.
    pub fn store(&self, repo: &str, cached: &CachedCollection) -> Result<()> {
        let path = self.path_for(repo);
        let body = serde_json::to_string_pretty(cached)?;
        fs::write(&path, body)
            .with_context(|| format!("failed to write cache file {}", path.display()))?;
        debug!(
            "cached {} participant(s) for {repo}",
            cached.participants.len()
        );
        Ok(())
    }

    /// Whether `repo` needs a fresh collection run.
    pub fn is_update_required(&self, repo: &str) -> bool {
        match self.load(repo) {
            Some(cached) => Utc::now().timestamp() - cached.update_time > MAX_CACHE_AGE_SECS,
            None => true,
        }
    }
}
