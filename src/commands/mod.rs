pub mod create_item;
pub mod delete_item;
pub mod update_item;

pub use create_item::*;
pub use delete_item::*;
pub use update_item::*;
