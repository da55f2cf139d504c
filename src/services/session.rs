// src/services/session.rs
use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

/// Key-value persistence scoped to one conversation session.
///
/// The validation core only writes (`set`); `get` and `delete` exist for the
/// prompt state, which reads the pending continuation record on its next turn
/// and clears it once the entity has been supplied.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn delete(&self, key: &str) -> Result<()>;
}

/// Process-local session store backed by a concurrent map.
///
/// Suitable for tests and single-process deployments; production setups
/// usually bind a redis- or database-backed implementation instead.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    entries: DashMap<String, String>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        // Overwrites any previous value under the key; at most one pending
        // prompt per session, last write wins.
        if self.entries.insert(key.to_string(), value.to_string()).is_some() {
            debug!("Session key '{}' overwritten", key);
        }
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
