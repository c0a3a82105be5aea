use crate::models::InventoryItem;
use mediator::Event;

#[derive(Debug, Clone)]
pub struct ItemCreatedEvent(pub InventoryItem);
impl Event for ItemCreatedEvent {}

#[derive(Debug, Clone)]
pub struct ItemUpdatedEvent(pub InventoryItem);
impl Event for ItemUpdatedEvent {}

#[derive(Debug, Clone)]
pub struct ItemDeletedEvent(pub InventoryItem);
impl Event for ItemDeletedEvent {}
