//! In-memory collaborator doubles for unit tests.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

use super::queue::{JobQueue, QueueError};
use super::storage::{ObjectStore, StorageError};

/// Object store backed by a set of existing keys. Flip `failing` to
/// simulate a backend fault on every call.
#[derive(Default)]
pub struct MemoryStore {
    pub objects: Mutex<HashSet<String>>,
    pub failing: bool,
}

impl MemoryStore {
    pub fn with_objects(keys: &[&str]) -> Self {
        Self {
            objects: Mutex::new(keys.iter().map(|k| k.to_string()).collect()),
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            objects: Mutex::new(HashSet::new()),
            failing: true,
        }
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn head(&self, key: &str) -> Result<bool, StorageError> {
        if self.failing {
            return Err(StorageError::Backend("simulated store outage".into()));
        }
        Ok(self.objects.lock().unwrap().contains(key))
    }

    async fn presign_get(&self, key: &str, ttl_secs: u64) -> Result<String, StorageError> {
        if self.failing {
            return Err(StorageError::Backend("simulated store outage".into()));
        }
        Ok(format!("https://store.test/get/{key}?ttl={ttl_secs}"))
    }

    async fn presign_put(
        &self,
        key: &str,
        ttl_secs: u64,
        content_type: &str,
    ) -> Result<String, StorageError> {
        if self.failing {
            return Err(StorageError::Backend("simulated store outage".into()));
        }
        Ok(format!(
            "https://store.test/put/{key}?ttl={ttl_secs}&ct={content_type}"
        ))
    }
}

/// Queue that records every published body.
#[derive(Default)]
pub struct MemoryQueue {
    pub sent: Mutex<Vec<Vec<u8>>>,
    pub failing: bool,
}

impl MemoryQueue {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing: true,
        }
    }

    pub fn bodies(&self) -> Vec<serde_json::Value> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|b| serde_json::from_slice(b).unwrap())
            .collect()
    }
}

#[async_trait]
impl JobQueue for MemoryQueue {
    async fn send(&self, body: &[u8]) -> Result<String, QueueError> {
        if self.failing {
            return Err(QueueError::Publish("simulated broker outage".into()));
        }
        self.sent.lock().unwrap().push(body.to_vec());
        Ok(uuid::Uuid::new_v4().to_string())
    }
}
