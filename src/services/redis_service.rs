use crate::models::{InventoryItem, UpdateInventoryItem};
use crate::services::{effective_filter, InventoryStore, StoreError};
use async_trait::async_trait;
use redis::aio::Connection;
use redis::{AsyncCommands, AsyncIter, Client, RedisResult};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Stores each item as a JSON document under `<base_key>:<id>`.
#[derive(Debug, Clone)]
pub struct RedisInventoryStore {
    client: Client,
    base_key: String,
}

impl RedisInventoryStore {
    pub fn new<S: Into<String>>(client: Client, key: S) -> Self {
        let base_key = key.into();
        Self { client, base_key }
    }

    pub fn open<S: Into<String>>(url: &str, key: S) -> RedisResult<Self> {
        let client = Client::open(url)?;
        Ok(Self::new(client, key))
    }

    fn key(&self, id: Uuid) -> String {
        format!("{}:{}", self.base_key, id)
    }

    fn pattern(&self) -> String {
        format!("{}:*", self.base_key)
    }

    async fn write(&self, con: &mut Connection, item: &InventoryItem) -> Result<(), StoreError> {
        let json = serde_json::to_string(item)?;
        con.set::<_, _, ()>(self.key(item.id), json).await?;
        Ok(())
    }

    async fn read(&self, con: &mut Connection, id: Uuid) -> Result<Option<InventoryItem>, StoreError> {
        let json: Option<String> = con.get(self.key(id)).await?;

        match json {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn connection(&self) -> RedisResult<Connection> {
        self.client.get_async_connection().await
    }
}

#[async_trait]
impl InventoryStore for RedisInventoryStore {
    async fn list(&self, filter: Option<&str>) -> Result<Vec<InventoryItem>, StoreError> {
        let mut con = self.connection().await?;

        // SCAN may yield a key more than once.
        let keys = {
            let mut iter: AsyncIter<String> = con.scan_match(self.pattern()).await?;
            let mut keys = BTreeSet::new();
            while let Some(key) = iter.next_item().await {
                keys.insert(key);
            }
            keys
        };

        let filter = effective_filter(filter);
        let mut items = Vec::with_capacity(keys.len());

        for key in keys {
            // The key may have been deleted between SCAN and GET.
            let json: Option<String> = con.get(&key).await?;
            let Some(json) = json else { continue };

            let item: InventoryItem = serde_json::from_str(&json)?;
            if filter.map_or(true, |f| item.matches(f)) {
                items.push(item);
            }
        }

        log::debug!("Listed {} item(s) from redis", items.len());
        Ok(items)
    }

    async fn insert(&self, item: InventoryItem) -> Result<InventoryItem, StoreError> {
        let mut con = self.connection().await?;
        self.write(&mut con, &item).await?;
        Ok(item)
    }

    async fn get(&self, id: Uuid) -> Result<Option<InventoryItem>, StoreError> {
        let mut con = self.connection().await?;
        self.read(&mut con, id).await
    }

    async fn update(
        &self,
        id: Uuid,
        changes: UpdateInventoryItem,
    ) -> Result<Option<InventoryItem>, StoreError> {
        let mut con = self.connection().await?;

        let mut item = match self.read(&mut con, id).await? {
            Some(item) => item,
            None => return Ok(None),
        };

        item.apply(changes);
        self.write(&mut con, &item).await?;
        Ok(Some(item))
    }

    async fn remove(&self, id: Uuid) -> Result<Option<InventoryItem>, StoreError> {
        let mut con = self.connection().await?;

        let item = self.read(&mut con, id).await?;
        if item.is_some() {
            con.del::<_, ()>(self.key(id)).await?;
        }

        Ok(item)
    }
}
