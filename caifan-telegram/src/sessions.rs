//! Per-chat session store with TTL eviction.
//!
//! One [`SessionEntry`] per chat, behind its own mutex: the handler holds the
//! lock across mutate-then-deliver, so at most one `/start` or pick is in
//! flight per chat at a time. A background sweeper evicts sessions idle
//! longer than the TTL.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use caifan_core::Session;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

/// A chat's bracket session plus its last-activity timestamp.
pub struct SessionEntry {
    pub session: Session,
    last_seen: Instant,
}

impl SessionEntry {
    fn new() -> Self {
        Self {
            session: Session::new(),
            last_seen: Instant::now(),
        }
    }

    /// Marks the session as active now. Call while holding the entry lock.
    pub fn touch(&mut self) {
        self.last_seen = Instant::now();
    }
}

/// All live sessions, keyed by chat id.
pub struct SessionStore {
    inner: RwLock<HashMap<i64, Arc<Mutex<SessionEntry>>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Returns the chat's session entry, creating an idle one if absent.
    pub async fn entry(&self, chat_id: i64) -> Arc<Mutex<SessionEntry>> {
        if let Some(entry) = self.inner.read().await.get(&chat_id) {
            return entry.clone();
        }
        let mut map = self.inner.write().await;
        map.entry(chat_id)
            .or_insert_with(|| {
                debug!(chat_id, "creating session");
                Arc::new(Mutex::new(SessionEntry::new()))
            })
            .clone()
    }

    /// Removes sessions idle longer than the TTL. Entries whose lock is held
    /// are in the middle of an update and are skipped. Returns the number evicted.
    pub async fn evict_idle(&self) -> usize {
        let mut map = self.inner.write().await;
        let before = map.len();
        let ttl = self.ttl;
        map.retain(|_, entry| match entry.try_lock() {
            Ok(guard) => guard.last_seen.elapsed() < ttl,
            Err(_) => true,
        });
        before - map.len()
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

/// Runs [`SessionStore::evict_idle`] on a fixed interval.
pub fn spawn_sweeper(store: Arc<SessionStore>, period: Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            let evicted = store.evict_idle().await;
            if evicted > 0 {
                info!(evicted, "evicted idle sessions");
            }
        }
    })
}
