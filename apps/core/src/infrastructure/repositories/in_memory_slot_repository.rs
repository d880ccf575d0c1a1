use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

use crate::domain::repositories::SlotRepository;

/// In-memory implementation of SlotRepository
///
/// Values live as long as the repository. Share one instance between two
/// stores to simulate a restart.
#[derive(Default)]
pub struct InMemorySlotRepository {
    slots: Mutex<HashMap<String, String>>,
}

impl InMemorySlotRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SlotRepository for InMemorySlotRepository {
    async fn read(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.slots.lock().await.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), String> {
        self.slots
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), String> {
        self.slots.lock().await.remove(key);
        Ok(())
    }
}
