use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use tokio::sync::Mutex;

/// A state token that was handed out by `/login` and not yet redeemed.
#[derive(Debug, Clone)]
pub struct PendingState {
    pub issued_at: Instant,
    pub code_verifier: Option<String>,
}

/// Registry of outstanding OAuth state tokens.
///
/// Tokens are single-use and expire after `ttl`. The registry never holds
/// more than `capacity` entries: expired entries are pruned on every insert
/// and the oldest entry is evicted when it is still full.
pub struct StateStore {
    entries: Mutex<HashMap<String, PendingState>>,
    ttl: Duration,
    capacity: usize,
}

impl StateStore {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
            capacity: capacity.max(1),
        }
    }

    pub async fn insert(&self, state: String, code_verifier: Option<String>) {
        let mut entries = self.entries.lock().await;

        let ttl = self.ttl;
        entries.retain(|_, entry| entry.issued_at.elapsed() < ttl);

        while entries.len() >= self.capacity {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.issued_at)
                .map(|(key, _)| key.clone());
            match oldest {
                Some(key) => entries.remove(&key),
                None => break,
            };
        }

        entries.insert(
            state,
            PendingState {
                issued_at: Instant::now(),
                code_verifier,
            },
        );
    }

    /// Removes `state` and returns its entry if it was issued and has not
    /// expired. A token can only ever be taken once.
    pub async fn take(&self, state: &str) -> Option<PendingState> {
        let entry = self.entries.lock().await.remove(state)?;

        if entry.issued_at.elapsed() >= self.ttl {
            return None;
        }

        Some(entry)
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
