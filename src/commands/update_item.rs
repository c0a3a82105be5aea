use crate::events::ItemUpdatedEvent;
use crate::models::{InventoryItem, UpdateInventoryItem};
use crate::services::{SharedInventoryStore, StoreError};
use mediator::{AsyncMediator, AsyncRequestHandler, DefaultAsyncMediator, Request};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct UpdateItemCommand {
    pub id: Uuid,
    pub changes: UpdateInventoryItem,
}

impl Request<Result<Option<InventoryItem>, StoreError>> for UpdateItemCommand {}

pub struct UpdateItemRequestHandler(pub SharedInventoryStore, pub DefaultAsyncMediator);

#[mediator::async_trait]
impl AsyncRequestHandler<UpdateItemCommand, Result<Option<InventoryItem>, StoreError>>
    for UpdateItemRequestHandler
{
    async fn handle(
        &mut self,
        command: UpdateItemCommand,
    ) -> Result<Option<InventoryItem>, StoreError> {
        let updated = self.0.update(command.id, command.changes).await?;

        if let Some(item) = updated.clone() {
            if let Err(err) = self.1.publish(ItemUpdatedEvent(item)).await {
                log::warn!("Could not publish updated event for {}: {}", command.id, err);
            }
        }

        Ok(updated)
    }
}
