pub mod inventory_item;

pub use inventory_item::{InventoryItem, NewInventoryItem, UpdateInventoryItem};
