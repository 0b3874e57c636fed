//! Integration tests for [`caifan_telegram::SessionStore`].
//!
//! Covers: one shared entry per chat, TTL eviction of idle sessions,
//! locked (in-flight) sessions surviving a sweep, and touch extending life.

use std::sync::Arc;
use std::time::Duration;

use caifan_telegram::SessionStore;

/// **Test: entry returns the same session for the same chat, distinct per chat.**
///
/// **Setup:** Empty store.
/// **Action:** `entry(1)` twice and `entry(2)` once.
/// **Expected:** The two chat-1 handles are the same Arc; chat 2 gets its own; len is 2.
#[tokio::test]
async fn test_entry_is_per_chat() {
    let store = SessionStore::new(Duration::from_secs(3600));

    let first = store.entry(1).await;
    let again = store.entry(1).await;
    let other = store.entry(2).await;

    assert!(Arc::ptr_eq(&first, &again));
    assert!(!Arc::ptr_eq(&first, &other));
    assert_eq!(store.len().await, 2);
}

/// **Test: sessions idle past the TTL are evicted; fresh ones stay.**
///
/// **Setup:** Store with zero TTL and one with a long TTL, one session each.
/// **Action:** `evict_idle` on both.
/// **Expected:** The zero-TTL store drops its session; the long-TTL store keeps it.
#[tokio::test]
async fn test_evict_idle_respects_ttl() {
    let expired = SessionStore::new(Duration::ZERO);
    let _ = expired.entry(1).await;
    assert_eq!(expired.evict_idle().await, 1);
    assert_eq!(expired.len().await, 0);

    let fresh = SessionStore::new(Duration::from_secs(3600));
    let _ = fresh.entry(1).await;
    assert_eq!(fresh.evict_idle().await, 0);
    assert_eq!(fresh.len().await, 1);
}

/// **Test: a session whose lock is held is never evicted.**
///
/// **Setup:** Zero-TTL store; the entry's mutex is held across the sweep.
/// **Action:** `evict_idle` while locked, then again after release.
/// **Expected:** Zero evictions while locked; evicted after the guard drops.
#[tokio::test]
async fn test_evict_skips_in_flight_sessions() {
    let store = SessionStore::new(Duration::ZERO);
    let entry = store.entry(1).await;

    let guard = entry.lock().await;
    assert_eq!(store.evict_idle().await, 0);
    assert_eq!(store.len().await, 1);
    drop(guard);

    assert_eq!(store.evict_idle().await, 1);
    assert_eq!(store.len().await, 0);
}

/// **Test: touch keeps a session alive across a sweep.**
///
/// **Setup:** Store with a short but nonzero TTL.
/// **Action:** Touch the entry, then sweep immediately.
/// **Expected:** The session survives.
#[tokio::test]
async fn test_touch_extends_session_life() {
    let store = SessionStore::new(Duration::from_millis(200));
    let entry = store.entry(1).await;

    entry.lock().await.touch();
    assert_eq!(store.evict_idle().await, 0);
    assert_eq!(store.len().await, 1);
}
