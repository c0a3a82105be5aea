pub mod get_item;
pub mod list_items;

pub use get_item::*;
pub use list_items::*;
