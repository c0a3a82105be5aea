use crate::models::InventoryItem;
use crate::services::{SharedInventoryStore, StoreError};
use mediator::{AsyncRequestHandler, Request};

#[derive(Debug, Clone, Default)]
pub struct ListItemsQuery {
    pub search: Option<String>,
}

impl Request<Result<Vec<InventoryItem>, StoreError>> for ListItemsQuery {}

pub struct ListItemsRequestHandler(pub SharedInventoryStore);

#[mediator::async_trait]
impl AsyncRequestHandler<ListItemsQuery, Result<Vec<InventoryItem>, StoreError>>
    for ListItemsRequestHandler
{
    async fn handle(&mut self, query: ListItemsQuery) -> Result<Vec<InventoryItem>, StoreError> {
        self.0.list(query.search.as_deref()).await
    }
}
