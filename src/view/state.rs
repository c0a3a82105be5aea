use crate::client::{ClientError, InventoryApi};
use crate::models::{InventoryItem, NewInventoryItem, UpdateInventoryItem};
use crate::view::aggregates::{self, TopItem, TOP_ITEMS};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success<S: Into<String>>(message: S) -> Self {
        Notification {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error<S: Into<String>>(message: S) -> Self {
        Notification {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// Client-side state of the inventory screen.
///
/// Every action talks to the server and then refetches the list; nothing is
/// changed locally ahead of the server. A failed action leaves the state as it
/// was and queues an error notification.
pub struct InventoryView<A> {
    api: A,
    items: Vec<InventoryItem>,
    search: String,
    new_item: NewInventoryItem,
    editing: Option<InventoryItem>,
    notifications: Vec<Notification>,
}

impl<A: InventoryApi> InventoryView<A> {
    pub fn new(api: A) -> Self {
        InventoryView {
            api,
            items: Vec::new(),
            search: String::new(),
            new_item: NewInventoryItem::default(),
            editing: None,
            notifications: Vec::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub async fn refresh(&mut self) -> bool {
        let filter = Some(self.search.as_str()).filter(|s| !s.is_empty());

        match self.api.list(filter).await {
            Ok(items) => {
                self.items = items;
                true
            }
            Err(err) => {
                self.fail("Could not load items", &err);
                false
            }
        }
    }

    pub async fn set_search<S: Into<String>>(&mut self, search: S) -> bool {
        self.search = search.into();
        self.refresh().await
    }

    pub fn new_item(&self) -> &NewInventoryItem {
        &self.new_item
    }

    pub fn new_item_mut(&mut self) -> &mut NewInventoryItem {
        &mut self.new_item
    }

    /// Creates an item from the draft. The draft is cleared on success.
    pub async fn create(&mut self) -> Option<InventoryItem> {
        match self.api.create(&self.new_item).await {
            Ok(item) => {
                self.new_item = NewInventoryItem::default();
                self.notify(Notification::success("Item added successfully!"));
                self.refresh().await;
                Some(item)
            }
            Err(err) => {
                self.fail("Could not add item", &err);
                None
            }
        }
    }

    pub fn begin_edit(&mut self, item: InventoryItem) {
        self.editing = Some(item);
    }

    /// Opens the edit draft for a listed item. Returns `false` if it is not listed.
    pub fn begin_edit_by_id(&mut self, id: Uuid) -> bool {
        match self.items.iter().find(|item| item.id == id) {
            Some(item) => {
                self.editing = Some(item.clone());
                true
            }
            None => false,
        }
    }

    pub fn editing(&self) -> Option<&InventoryItem> {
        self.editing.as_ref()
    }

    pub fn editing_mut(&mut self) -> Option<&mut InventoryItem> {
        self.editing.as_mut()
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Sends the edit draft. The draft is closed on success and kept on failure.
    pub async fn save_edit(&mut self) -> Option<InventoryItem> {
        let draft = self.editing.as_ref()?;
        let changes = UpdateInventoryItem::from(draft);

        match self.api.update(draft.id, &changes).await {
            Ok(item) => {
                self.editing = None;
                self.notify(Notification::success("Item updated successfully!"));
                self.refresh().await;
                Some(item)
            }
            Err(err) => {
                self.fail("Could not update item", &err);
                None
            }
        }
    }

    pub async fn delete(&mut self, id: Uuid) -> bool {
        match self.api.delete(id).await {
            Ok(()) => {
                self.notify(Notification::success("Item deleted successfully!"));
                self.refresh().await;
                true
            }
            Err(err) => {
                self.fail("Could not delete item", &err);
                false
            }
        }
    }

    pub fn total_value(&self) -> f64 {
        aggregates::total_value(&self.items)
    }

    pub fn top_items(&self) -> Vec<TopItem> {
        aggregates::top_items(&self.items, TOP_ITEMS)
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    fn fail(&mut self, action: &str, err: &ClientError) {
        log::warn!("{}: {}", action, err);
        self.notify(Notification::error(format!("{}: {}", action, err)));
    }
}
