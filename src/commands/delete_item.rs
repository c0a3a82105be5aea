use crate::events::ItemDeletedEvent;
use crate::models::InventoryItem;
use crate::services::{SharedInventoryStore, StoreError};
use mediator::{AsyncMediator, AsyncRequestHandler, DefaultAsyncMediator, Request};
use uuid::Uuid;

#[derive(Debug, Clone, Copy)]
pub struct DeleteItemCommand(pub Uuid);

impl Request<Result<Option<InventoryItem>, StoreError>> for DeleteItemCommand {}

pub struct DeleteItemRequestHandler(pub SharedInventoryStore, pub DefaultAsyncMediator);

#[mediator::async_trait]
impl AsyncRequestHandler<DeleteItemCommand, Result<Option<InventoryItem>, StoreError>>
    for DeleteItemRequestHandler
{
    async fn handle(
        &mut self,
        command: DeleteItemCommand,
    ) -> Result<Option<InventoryItem>, StoreError> {
        let deleted = self.0.remove(command.0).await?;

        if let Some(item) = deleted.clone() {
            if let Err(err) = self.1.publish(ItemDeletedEvent(item)).await {
                log::warn!("Could not publish deleted event for {}: {}", command.0, err);
            }
        }

        Ok(deleted)
    }
}
