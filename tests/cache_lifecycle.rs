use std::sync::Arc;
use std::thread;
use std::time::Duration as StdDuration;

use chrono::Duration;
use docprep_core::cache::{fingerprint, CacheKey, ResponseCache};

fn key(tag: &str) -> CacheKey {
    fingerprint(tag, &[])
}

#[test]
fn test_round_trip() {
    let cache = ResponseCache::new();
    cache.set(key("q1"), "an answer".to_string());

    assert_eq!(cache.get(&key("q1")), Some("an answer".to_string()));
}

#[test]
fn test_absent_key_is_none() {
    let cache: ResponseCache<String> = ResponseCache::new();
    assert_eq!(cache.get(&key("never set")), None);
}

#[test]
fn invariant_expired_entry_reads_absent_before_sweep() {
    let cache = ResponseCache::new();
    cache.set_with_ttl(key("q1"), "stale soon".to_string(), Duration::milliseconds(40));

    assert_eq!(cache.get(&key("q1")), Some("stale soon".to_string()));

    thread::sleep(StdDuration::from_millis(80));

    // No sweep has run: the entry is still in the map but must read as
    // absent.
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get(&key("q1")), None);

    assert_eq!(cache.cleanup(), 1);
    assert!(cache.is_empty());
}

#[test]
fn test_delete() {
    let cache = ResponseCache::new();
    cache.set(key("q1"), 42u64);

    assert!(cache.delete(&key("q1")));
    assert_eq!(cache.get(&key("q1")), None);
    assert!(!cache.delete(&key("q1")));
}

#[test]
fn test_cleanup_removes_only_expired_entries() {
    let cache = ResponseCache::new();
    cache.set_with_ttl(key("short a"), 1u32, Duration::milliseconds(40));
    cache.set(key("long"), 2u32);
    cache.set_with_ttl(key("short b"), 3u32, Duration::milliseconds(40));

    thread::sleep(StdDuration::from_millis(80));

    assert_eq!(cache.cleanup(), 2);
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get(&key("long")), Some(2));
}

#[test]
fn test_set_overwrites_existing_entry() {
    let cache = ResponseCache::new();
    cache.set(key("q1"), "first".to_string());
    cache.set(key("q1"), "second".to_string());

    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get(&key("q1")), Some("second".to_string()));
}

#[test]
fn test_default_ttl_keeps_entry_alive() {
    // Default TTL is one hour; a short wait must not expire anything.
    let cache = ResponseCache::new();
    cache.set(key("q1"), "durable".to_string());

    thread::sleep(StdDuration::from_millis(20));

    assert_eq!(cache.get(&key("q1")), Some("durable".to_string()));
    assert_eq!(cache.cleanup(), 0);
}

#[test]
fn test_custom_default_ttl() {
    let cache = ResponseCache::with_default_ttl(Duration::milliseconds(40));
    cache.set(key("q1"), "short-lived".to_string());

    thread::sleep(StdDuration::from_millis(80));

    assert_eq!(cache.get(&key("q1")), None);
}

#[test]
fn invariant_concurrent_access_is_safe() {
    let cache: Arc<ResponseCache<String>> = Arc::new(ResponseCache::new());

    let writers: Vec<_> = (0..8)
        .map(|i| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                let tag = format!("question {i}");
                cache.set(key(&tag), format!("answer {i}"));
                cache.cleanup();
                cache.get(&key(&tag))
            })
        })
        .collect();

    for (i, handle) in writers.into_iter().enumerate() {
        let seen = handle.join().expect("writer thread panicked");
        assert_eq!(seen, Some(format!("answer {i}")));
    }

    assert_eq!(cache.len(), 8);
}
