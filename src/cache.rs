//! On-disk cache for API responses.
//!
//! Entries are keyed by the SHA-256 of the full request URL and stored
//! as small JSON files carrying the response body and a storage
//! timestamp. An entry older than the TTL is treated as absent.
//! The process is single-threaded and short-lived, so no locking.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

pub struct HttpCache {
    dir: PathBuf,
    ttl: Duration,
}

#[derive(Serialize, Deserialize)]
struct CacheEntry {
    stored_at: DateTime<Utc>,
    body: String,
}

impl HttpCache {
    /// Open (creating if needed) a cache rooted at `dir`.
    pub fn open(dir: PathBuf, ttl: Duration) -> io::Result<Self> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir, ttl })
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let digest = Sha256::digest(key.as_bytes());
        self.dir.join(format!("{}.json", hex::encode(digest)))
    }

    /// Fetch a cached body if a fresh entry exists for `key`.
    ///
    /// Stale or unreadable entries are removed on the way out.
    pub fn lookup(&self, key: &str) -> Option<String> {
        let path = self.entry_path(key);
        let entry = match read_entry(&path) {
            Some(entry) => entry,
            None => return None,
        };
        if Utc::now() - entry.stored_at > self.ttl {
            debug!(%key, "cache entry expired");
            let _ = fs::remove_file(&path);
            return None;
        }
        debug!(%key, "cache hit");
        Some(entry.body)
    }

    /// Store a response body under `key`, stamped with the current time.
    pub fn store(&self, key: &str, body: &str) -> io::Result<()> {
        let entry = CacheEntry {
            stored_at: Utc::now(),
            body: body.to_string(),
        };
        let serialized = serde_json::to_string(&entry)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(self.entry_path(key), serialized)
    }

    /// Delete every expired entry. Returns the number removed.
    pub fn purge_expired(&self) -> io::Result<usize> {
        let mut removed = 0;
        for dir_entry in fs::read_dir(&self.dir)? {
            let path = dir_entry?.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            let stale = match read_entry(&path) {
                Some(entry) => Utc::now() - entry.stored_at > self.ttl,
                // Unparseable entries are garbage; collect them too.
                None => true,
            };
            if stale {
                fs::remove_file(&path)?;
                removed += 1;
            }
        }
        if removed > 0 {
            debug!(removed, "purged expired cache entries");
        }
        Ok(removed)
    }
}

fn read_entry(path: &Path) -> Option<CacheEntry> {
    let raw = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&raw) {
        Ok(entry) => Some(entry),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "discarding unreadable cache entry");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const KEY: &str = "https://api.example.com/v7.0/news/search?q=election";

    #[test]
    fn test_lookup_returns_stored_body_within_ttl() {
        let dir = tempdir().unwrap();
        let cache = HttpCache::open(dir.path().to_path_buf(), Duration::seconds(300)).unwrap();

        assert!(cache.lookup(KEY).is_none());
        cache.store(KEY, r#"{"value": []}"#).unwrap();
        assert_eq!(cache.lookup(KEY).as_deref(), Some(r#"{"value": []}"#));
    }

    #[test]
    fn test_lookup_misses_after_expiry() {
        let dir = tempdir().unwrap();
        let cache = HttpCache::open(dir.path().to_path_buf(), Duration::seconds(-1)).unwrap();

        cache.store(KEY, "body").unwrap();
        assert!(cache.lookup(KEY).is_none());
        // The stale file is dropped, not left behind.
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_keys_do_not_collide() {
        let dir = tempdir().unwrap();
        let cache = HttpCache::open(dir.path().to_path_buf(), Duration::seconds(300)).unwrap();

        cache.store("https://a.example.com/", "a").unwrap();
        cache.store("https://b.example.com/", "b").unwrap();
        assert_eq!(cache.lookup("https://a.example.com/").as_deref(), Some("a"));
        assert_eq!(cache.lookup("https://b.example.com/").as_deref(), Some("b"));
    }

    #[test]
    fn test_purge_removes_only_stale_entries() {
        let dir = tempdir().unwrap();

        let stale = HttpCache::open(dir.path().to_path_buf(), Duration::seconds(300)).unwrap();
        stale.store("old", "old body").unwrap();

        // Reopen with a TTL that makes the first entry stale.
        let cache = HttpCache::open(dir.path().to_path_buf(), Duration::seconds(-1)).unwrap();
        assert_eq!(cache.purge_expired().unwrap(), 1);

        let cache = HttpCache::open(dir.path().to_path_buf(), Duration::seconds(300)).unwrap();
        cache.store("fresh", "fresh body").unwrap();
        assert_eq!(cache.purge_expired().unwrap(), 0);
        assert_eq!(cache.lookup("fresh").as_deref(), Some("fresh body"));
    }

    #[test]
    fn test_purge_collects_unparseable_files() {
        let dir = tempdir().unwrap();
        let cache = HttpCache::open(dir.path().to_path_buf(), Duration::seconds(300)).unwrap();
        fs::write(dir.path().join("deadbeef.json"), "not json").unwrap();
        assert_eq!(cache.purge_expired().unwrap(), 1);
    }
}
