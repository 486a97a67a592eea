//! Time-bounded reuse of fetched posts.
//!
//! Entries older than the TTL are not served as fresh but are kept so a
//! failed refetch can fall back to them.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use crate::date::Month;
use crate::github::DiscussionKind;
use crate::posts::JobPost;

pub type CacheKey = (DiscussionKind, Month);

#[derive(Debug, Clone)]
struct CachedPosts {
    posts: Arc<Vec<JobPost>>,
    cached_at: Instant,
}

/// Posts per discussion month, with a TTL.
#[derive(Debug)]
pub struct PostsCache {
    entries: RwLock<HashMap<CacheKey, CachedPosts>>,
    ttl: Duration,
}

impl PostsCache {
    /// Create a new posts cache with the given TTL.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Posts cached less than the TTL ago.
    pub fn fresh(&self, key: &CacheKey) -> Option<Arc<Vec<JobPost>>> {
        let entries = self.entries.read().ok()?;
        entries
            .get(key)
            .filter(|entry| entry.cached_at.elapsed() < self.ttl)
            .map(|entry| entry.posts.clone())
    }

    /// Posts cached at any point, however old.
    pub fn stale(&self, key: &CacheKey) -> Option<Arc<Vec<JobPost>>> {
        let entries = self.entries.read().ok()?;
        entries.get(key).map(|entry| entry.posts.clone())
    }

    pub fn insert(&self, key: CacheKey, posts: Arc<Vec<JobPost>>) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(
                key,
                CachedPosts {
                    posts,
                    cached_at: Instant::now(),
                },
            );
        }
    }
}
