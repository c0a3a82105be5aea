use crate::models::{InventoryItem, UpdateInventoryItem};
use crate::services::{effective_filter, InventoryStore, StoreError};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Process-local store. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryInventoryStore {
    items: RwLock<HashMap<Uuid, InventoryItem>>,
}

impl MemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InventoryStore for MemoryInventoryStore {
    async fn list(&self, filter: Option<&str>) -> Result<Vec<InventoryItem>, StoreError> {
        let items = self.items.read().await;
        let filter = effective_filter(filter);

        Ok(items
            .values()
            .filter(|item| filter.map_or(true, |f| item.matches(f)))
            .cloned()
            .collect())
    }

    async fn insert(&self, item: InventoryItem) -> Result<InventoryItem, StoreError> {
        self.items.write().await.insert(item.id, item.clone());
        Ok(item)
    }

    async fn get(&self, id: Uuid) -> Result<Option<InventoryItem>, StoreError> {
        Ok(self.items.read().await.get(&id).cloned())
    }

    async fn update(
        &self,
        id: Uuid,
        changes: UpdateInventoryItem,
    ) -> Result<Option<InventoryItem>, StoreError> {
        let mut items = self.items.write().await;

        Ok(items.get_mut(&id).map(|item| {
            item.apply(changes);
            item.clone()
        }))
    }

    async fn remove(&self, id: Uuid) -> Result<Option<InventoryItem>, StoreError> {
        Ok(self.items.write().await.remove(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewInventoryItem;

    fn new_item(name: &str, description: &str) -> InventoryItem {
        InventoryItem::create(NewInventoryItem {
            name: Some(name.to_owned()),
            description: Some(description.to_owned()),
            quantity: Some(1),
            price: Some(1.0),
        })
    }

    #[tokio::test]
    async fn list_filters_by_name_or_description() {
        let store = MemoryInventoryStore::new();
        let hammer = store.insert(new_item("Hammer", "steel head")).await.unwrap();
        let nails = store.insert(new_item("Nails", "for the hammer")).await.unwrap();
        store.insert(new_item("Saw", "wood")).await.unwrap();

        assert_eq!(store.list(None).await.unwrap().len(), 3);
        assert_eq!(store.list(Some("")).await.unwrap().len(), 3);

        let found = store.list(Some("ammer")).await.unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.contains(&hammer));
        assert!(found.contains(&nails));

        let found = store.list(Some("Hammer")).await.unwrap();
        assert_eq!(found, vec![hammer]);
    }

    #[tokio::test]
    async fn get_returns_inserted_item() {
        let store = MemoryInventoryStore::new();
        let item = store.insert(new_item("Drill", "cordless")).await.unwrap();

        assert_eq!(store.get(item.id).await.unwrap(), Some(item));
        assert_eq!(store.get(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_changes_only_given_fields() {
        let store = MemoryInventoryStore::new();
        let item = store.insert(new_item("Drill", "cordless")).await.unwrap();

        let changes = UpdateInventoryItem {
            quantity: Some(9),
            ..Default::default()
        };
        let updated = store.update(item.id, changes).await.unwrap().unwrap();

        assert_eq!(updated.quantity, 9);
        assert_eq!(updated.name, item.name);
        assert_eq!(updated.price, item.price);
        assert_eq!(store.get(item.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn update_and_remove_report_missing_ids() {
        let store = MemoryInventoryStore::new();
        let missing = Uuid::new_v4();

        let updated = store
            .update(missing, UpdateInventoryItem::default())
            .await
            .unwrap();
        assert!(updated.is_none());
        assert!(store.remove(missing).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn remove_deletes_item() {
        let store = MemoryInventoryStore::new();
        let item = store.insert(new_item("Drill", "cordless")).await.unwrap();

        assert_eq!(store.remove(item.id).await.unwrap(), Some(item.clone()));
        assert_eq!(store.get(item.id).await.unwrap(), None);
        assert!(store.remove(item.id).await.unwrap().is_none());
    }
}
