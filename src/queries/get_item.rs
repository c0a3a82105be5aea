use crate::models::InventoryItem;
use crate::services::{SharedInventoryStore, StoreError};
use mediator::{AsyncRequestHandler, Request};
use uuid::Uuid;

#[derive(Debug, Clone, Copy)]
pub struct GetItemQuery(pub Uuid);

impl Request<Result<Option<InventoryItem>, StoreError>> for GetItemQuery {}

pub struct GetItemRequestHandler(pub SharedInventoryStore);

#[mediator::async_trait]
impl AsyncRequestHandler<GetItemQuery, Result<Option<InventoryItem>, StoreError>>
    for GetItemRequestHandler
{
    async fn handle(&mut self, query: GetItemQuery) -> Result<Option<InventoryItem>, StoreError> {
        self.0.get(query.0).await
    }
}
