pub mod memory_service;
pub mod redis_service;

use crate::models::{InventoryItem, UpdateInventoryItem};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

pub use memory_service::MemoryInventoryStore;
pub use redis_service::RedisInventoryStore;

pub type SharedInventoryStore = Arc<dyn InventoryStore>;

/// Failures of the storage backend itself. Missing records are not errors;
/// they are reported as `Ok(None)`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("failed to (de)serialize item: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[async_trait]
pub trait InventoryStore: Send + Sync {
    async fn list(&self, filter: Option<&str>) -> Result<Vec<InventoryItem>, StoreError>;

    async fn insert(&self, item: InventoryItem) -> Result<InventoryItem, StoreError>;

    async fn get(&self, id: Uuid) -> Result<Option<InventoryItem>, StoreError>;

    /// Applies `changes` to the stored item and returns the result, or `None` if absent.
    async fn update(
        &self,
        id: Uuid,
        changes: UpdateInventoryItem,
    ) -> Result<Option<InventoryItem>, StoreError>;

    /// Removes the item and returns it, or `None` if absent.
    async fn remove(&self, id: Uuid) -> Result<Option<InventoryItem>, StoreError>;
}

/// An empty filter selects everything, same as no filter.
pub(crate) fn effective_filter(filter: Option<&str>) -> Option<&str> {
    filter.filter(|f| !f.is_empty())
}
