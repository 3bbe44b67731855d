use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use sha3::{Digest, Sha3_256};
use tokio::sync::RwLock;
use tokio::time::Instant;

/// Stable key for a request signature.
pub fn cache_key(namespace: &str, signature: &impl Serialize) -> crate::Result<String> {
    let mut hasher = Sha3_256::new();
    hasher.update(namespace.as_bytes());
    hasher.update([0]);
    hasher.update(serde_json::to_vec(signature)?);

    Ok(format!("{:x}", hasher.finalize()))
}

struct Entry<V> {
    value: V,
    expires_at: Instant,
}

/// In-process memoization with per-entry expiry.
///
/// Entries are never invalidated, only replaced once expired. The lock is not
/// held while a value is computed, so two identical concurrent misses both
/// compute and the last one wins.
pub struct TtlCache<V> {
    entries: RwLock<HashMap<String, Entry<V>>>,
}

impl<V: Clone> TtlCache<V> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get(&self, key: &str) -> Option<V> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;

        (entry.expires_at > Instant::now()).then(|| entry.value.clone())
    }

    pub async fn insert(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| entry.expires_at > now);
        entries.insert(
            key.into(),
            Entry {
                value,
                expires_at: now + ttl,
            },
        );
    }

    /// Returns the cached value or computes, stores and returns a fresh one.
    /// Errors are returned as is and never cached.
    pub async fn get_or_compute<F, Fut, E>(&self, key: &str, ttl: Duration, compute: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(key).await {
            tracing::debug!(key, "Cache hit");
            return Ok(value);
        }

        let value = compute().await?;
        self.insert(key, value.clone(), ttl).await;

        Ok(value)
    }

    /// Number of entries still alive.
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .await
            .values()
            .filter(|entry| entry.expires_at > now)
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
