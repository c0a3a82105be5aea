use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single inventory record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub quantity: i64,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl InventoryItem {
    /// Builds a new record from the given fields, assigning a fresh id and creation time.
    ///
    /// Absent fields are stored as the empty value of their type.
    pub fn create(fields: NewInventoryItem) -> Self {
        InventoryItem {
            id: Uuid::new_v4(),
            name: fields.name.unwrap_or_default(),
            description: fields.description.unwrap_or_default(),
            quantity: fields.quantity.unwrap_or_default(),
            price: fields.price.unwrap_or_default(),
            created_at: Utc::now(),
        }
    }

    /// Replaces the fields present in `changes`, leaving the rest untouched.
    pub fn apply(&mut self, changes: UpdateInventoryItem) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(quantity) = changes.quantity {
            self.quantity = quantity;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
    }

    /// Case-sensitive substring match on name or description.
    pub fn matches(&self, filter: &str) -> bool {
        self.name.contains(filter) || self.description.contains(filter)
    }

    pub fn value(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}

/// Fields accepted when creating an item.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewInventoryItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Fields accepted when updating an item. Only the present ones are replaced.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateInventoryItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl UpdateInventoryItem {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.quantity.is_none()
            && self.price.is_none()
    }
}

impl From<&InventoryItem> for UpdateInventoryItem {
    fn from(item: &InventoryItem) -> Self {
        UpdateInventoryItem {
            name: Some(item.name.clone()),
            description: Some(item.description.clone()),
            quantity: Some(item.quantity),
            price: Some(item.price),
        }
    }
}
