use crate::events::ItemCreatedEvent;
use crate::models::{InventoryItem, NewInventoryItem};
use crate::services::{SharedInventoryStore, StoreError};
use mediator::{AsyncMediator, AsyncRequestHandler, DefaultAsyncMediator, Request};

#[derive(Debug, Clone)]
pub struct CreateItemCommand(pub NewInventoryItem);

impl Request<Result<InventoryItem, StoreError>> for CreateItemCommand {}

pub struct CreateItemRequestHandler(pub SharedInventoryStore, pub DefaultAsyncMediator);

#[mediator::async_trait]
impl AsyncRequestHandler<CreateItemCommand, Result<InventoryItem, StoreError>>
    for CreateItemRequestHandler
{
    async fn handle(&mut self, command: CreateItemCommand) -> Result<InventoryItem, StoreError> {
        let item = self.0.insert(InventoryItem::create(command.0)).await?;

        if let Err(err) = self.1.publish(ItemCreatedEvent(item.clone())).await {
            log::warn!("Could not publish created event for {}: {}", item.id, err);
        }

        Ok(item)
    }
}
