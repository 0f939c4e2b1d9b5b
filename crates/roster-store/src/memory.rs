// crates/roster-store/src/memory.rs
//
// In-memory user record store.
//
// One instance is shared by every in-flight RPC call and gateway request,
// so every read and write goes through the RwLock. Keys are unique by
// construction: put() on an existing username overwrites.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use roster_core::{RosterError, UserRecord, UserStore};

/// Process-lifetime map from username to record, guarded by an async
/// RwLock. No persistence, no eviction.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    records: RwLock<HashMap<String, UserRecord>>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Number of records currently held. Test and diagnostics helper.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn put(&self, record: UserRecord) -> Result<(), RosterError> {
        let mut records = self.records.write().await;
        records.insert(record.username.clone(), record);
        Ok(())
    }

    async fn get(&self, username: &str) -> Result<Option<UserRecord>, RosterError> {
        let records = self.records.read().await;
        Ok(records.get(username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn test_put_then_get() {
        let store = MemoryUserStore::new();
        store
            .put(UserRecord::new("alice", "engineer"))
            .await
            .unwrap();

        let found = store.get("alice").await.unwrap();
        assert_eq!(found, Some(UserRecord::new("alice", "engineer")));
    }

    #[tokio::test]
    async fn test_get_absent_returns_none() {
        let store = MemoryUserStore::new();
        assert_eq!(store.get("nobody").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let store = MemoryUserStore::new();
        store.put(UserRecord::new("alice", "engineer")).await.unwrap();
        store.put(UserRecord::new("alice", "manager")).await.unwrap();

        let found = store.get("alice").await.unwrap().unwrap();
        assert_eq!(found.role, "manager");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_concurrent_puts_no_lost_updates() {
        let store = Arc::new(MemoryUserStore::new());

        let mut handles = Vec::new();
        for i in 0..64 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .put(UserRecord::new(format!("user-{}", i), format!("role-{}", i)))
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.len().await, 64);
        for i in 0..64 {
            let found = store.get(&format!("user-{}", i)).await.unwrap().unwrap();
            assert_eq!(found.role, format!("role-{}", i));
        }
    }
}
