pub mod aggregates;
pub mod export;
pub mod render;
pub mod state;

pub use aggregates::{top_items, total_value, TopItem, TOP_ITEMS};
pub use state::{InventoryView, Notification, NotificationKind};
