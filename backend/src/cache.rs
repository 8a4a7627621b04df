use std::{
    future::Future,
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use tokio::{
    sync::{Mutex, RwLock},
    time::Instant,
};

struct CacheEntry<T> {
    value: T,
    stored_at: Instant,
}

/// Single-value cache with a time-to-live and manual invalidation.
///
/// Only successful loads are stored. A zero TTL turns caching off.
/// Concurrent misses share one load: the first caller loads while the rest
/// wait and then read its result.
pub struct TtlCache<T> {
    ttl: Duration,
    entry: RwLock<Option<CacheEntry<T>>>,
    load_lock: Mutex<()>,
    /// Bumped by `invalidate`; a load that started before the bump is not stored.
    generation: AtomicU64,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: RwLock::new(None),
            load_lock: Mutex::new(()),
            generation: AtomicU64::new(0),
        }
    }

    /// The cached value if it has not expired yet.
    pub async fn get(&self) -> Option<T> {
        let entry = self.entry.read().await;
        entry
            .as_ref()
            .filter(|entry| entry.stored_at.elapsed() < self.ttl)
            .map(|entry| entry.value.clone())
    }

    /// Returns the fresh cached value or runs `load` and caches its success.
    pub async fn get_or_try_load<F, Fut, E>(&self, load: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.get().await {
            tracing::debug!("content cache hit");
            return Ok(value);
        }

        if self.ttl.is_zero() {
            return load().await;
        }

        let _loading = self.load_lock.lock().await;
        if let Some(value) = self.get().await {
            tracing::debug!("content cache filled while waiting");
            return Ok(value);
        }

        let generation = self.generation.load(Ordering::Acquire);
        let value = load().await?;
        let mut entry = self.entry.write().await;
        if self.generation.load(Ordering::Acquire) == generation {
            *entry = Some(CacheEntry {
                value: value.clone(),
                stored_at: Instant::now(),
            });
        }
        Ok(value)
    }

    pub async fn invalidate(&self) {
        let mut entry = self.entry.write().await;
        *entry = None;
        self.generation.fetch_add(1, Ordering::AcqRel);
    }
}
