use std::{sync::Arc, time::Duration};

use toptracks::management::StateStore;

const TTL: Duration = Duration::from_secs(600);

#[tokio::test]
async fn test_take_issued_state() {
    let store = StateStore::new(TTL, 16);
    store.insert("abc".to_string(), None).await;

    let entry = store.take("abc").await;
    assert!(entry.is_some());
    assert!(entry.unwrap().code_verifier.is_none());
}

#[tokio::test]
async fn test_take_unknown_state() {
    let store = StateStore::new(TTL, 16);
    store.insert("abc".to_string(), None).await;

    assert!(store.take("abd").await.is_none());
    assert!(store.take("").await.is_none());
    // Comparison is exact
    assert!(store.take("ABC").await.is_none());
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_state_is_single_use() {
    let store = StateStore::new(TTL, 16);
    store.insert("abc".to_string(), Some("verifier".to_string())).await;

    let entry = store.take("abc").await.unwrap();
    assert_eq!(entry.code_verifier.as_deref(), Some("verifier"));

    assert!(store.take("abc").await.is_none());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_expired_state_is_rejected() {
    let store = StateStore::new(Duration::ZERO, 16);
    store.insert("abc".to_string(), None).await;

    assert!(store.take("abc").await.is_none());
    // Expired entries are dropped, not kept around
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_insert_prunes_expired_entries() {
    let store = StateStore::new(Duration::from_millis(20), 16);
    store.insert("old".to_string(), None).await;
    tokio::time::sleep(Duration::from_millis(50)).await;

    store.insert("new".to_string(), None).await;
    assert_eq!(store.len().await, 1);
    assert!(store.take("new").await.is_some());
}

#[tokio::test]
async fn test_capacity_evicts_oldest() {
    let store = StateStore::new(TTL, 3);
    for state in ["s1", "s2", "s3", "s4"] {
        store.insert(state.to_string(), None).await;
        // Distinct issue instants
        tokio::time::sleep(Duration::from_millis(2)).await;
    }

    assert_eq!(store.len().await, 3);
    assert!(store.take("s1").await.is_none());
    assert!(store.take("s2").await.is_some());
    assert!(store.take("s4").await.is_some());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_take_succeeds_once() {
    let store = Arc::new(StateStore::new(TTL, 16));
    store.insert("shared".to_string(), None).await;

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.take("shared").await.is_some() })
        })
        .collect();

    let mut winners = 0;
    for handle in handles {
        if handle.await.unwrap() {
            winners += 1;
        }
    }
    assert_eq!(winners, 1);
}
