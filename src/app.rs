use crate::config::{Settings, StorageBackend};
use crate::endpoints::ApiError;
use crate::services::{MemoryInventoryStore, RedisInventoryStore, SharedInventoryStore};
use crate::SharedMediator;
use actix_web::web::{self, JsonConfig, PathConfig, QueryConfig};
use mediator::DefaultAsyncMediator;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Opens the backend selected in `settings`.
pub fn create_store(settings: &Settings) -> redis::RedisResult<SharedInventoryStore> {
    let store: SharedInventoryStore = match settings.storage {
        StorageBackend::Redis => Arc::new(RedisInventoryStore::open(
            &settings.redis_url,
            settings.redis_key.clone(),
        )?),
        StorageBackend::Memory => Arc::new(MemoryInventoryStore::new()),
    };

    log::info!("Using {} storage", settings.storage);
    Ok(store)
}

/// Registers every request handler and event subscriber.
///
/// Must be called from within a multi-threaded tokio runtime.
pub fn create_mediator_service(store: &SharedInventoryStore) -> SharedMediator {
    use crate::commands::*;
    use crate::events::*;
    use crate::queries::*;

    let mediator = DefaultAsyncMediator::builder()
        // Requests
        .add_handler(GetItemRequestHandler(store.clone()))
        .add_handler(ListItemsRequestHandler(store.clone()))
        .add_handler_deferred(|m| CreateItemRequestHandler(store.clone(), m))
        .add_handler_deferred(|m| UpdateItemRequestHandler(store.clone(), m))
        .add_handler_deferred(|m| DeleteItemRequestHandler(store.clone(), m))
        // Events
        .subscribe_fn(|event: ItemCreatedEvent| async move {
            log::info!("Added: {} - {}", event.0.name, event.0.id);
        })
        .subscribe_fn(|event: ItemUpdatedEvent| async move {
            log::info!("Updated: {} - {}", event.0.name, event.0.id);
        })
        .subscribe_fn(|event: ItemDeletedEvent| async move {
            log::info!("Deleted: {} - {}", event.0.name, event.0.id);
        })
        .build();

    Arc::new(Mutex::new(mediator))
}

/// Mounts the inventory routes. A malformed id is reported like a missing one,
/// and every extractor failure answers with a JSON message.
pub fn configure(cfg: &mut web::ServiceConfig) {
    use crate::endpoints::inventory;

    cfg.app_data(PathConfig::default().error_handler(|_, _| ApiError::NotFound.into()))
        .app_data(
            JsonConfig::default()
                .error_handler(|err, _| ApiError::BadRequest(err.to_string()).into()),
        )
        .app_data(
            QueryConfig::default()
                .error_handler(|err, _| ApiError::BadRequest(err.to_string()).into()),
        )
        .service(
            web::resource("/api/inventory")
                .route(web::get().to(inventory::get_all))
                .route(web::post().to(inventory::create))
                .default_service(web::to(inventory::method_not_allowed)),
        )
        .service(
            web::resource("/api/inventory/{id}")
                .route(web::get().to(inventory::get))
                .route(web::put().to(inventory::update))
                .route(web::delete().to(inventory::delete))
                .default_service(web::to(inventory::method_not_allowed)),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{CreateItemCommand, DeleteItemCommand, UpdateItemCommand};
    use crate::models::{NewInventoryItem, UpdateInventoryItem};
    use crate::queries::{GetItemQuery, ListItemsQuery};
    use mediator::AsyncMediator;
    use uuid::Uuid;

    fn memory_mediator() -> SharedMediator {
        let store: SharedInventoryStore = Arc::new(MemoryInventoryStore::new());
        create_mediator_service(&store)
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn dispatches_crud_requests() {
        let mediator = memory_mediator();
        let mut mediator = mediator.lock().await;

        let created = mediator
            .send(CreateItemCommand(NewInventoryItem {
                name: Some("Widget".to_owned()),
                description: Some("A widget".to_owned()),
                quantity: Some(10),
                price: Some(2.5),
            }))
            .await
            .unwrap()
            .unwrap();

        let fetched = mediator.send(GetItemQuery(created.id)).await.unwrap().unwrap();
        assert_eq!(fetched, Some(created.clone()));

        let changes = UpdateInventoryItem {
            quantity: Some(9),
            ..Default::default()
        };
        let updated = mediator
            .send(UpdateItemCommand { id: created.id, changes })
            .await
            .unwrap()
            .unwrap()
            .unwrap();
        assert_eq!(updated.quantity, 9);
        assert_eq!(updated.name, "Widget");

        let listed = mediator
            .send(ListItemsQuery { search: Some("widget".to_owned()) })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(listed, vec![updated.clone()]);

        let deleted = mediator.send(DeleteItemCommand(created.id)).await.unwrap().unwrap();
        assert_eq!(deleted, Some(updated));

        let fetched = mediator.send(GetItemQuery(created.id)).await.unwrap().unwrap();
        assert_eq!(fetched, None);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn missing_ids_resolve_to_none() {
        let mediator = memory_mediator();
        let mut mediator = mediator.lock().await;
        let id = Uuid::new_v4();

        let updated = mediator
            .send(UpdateItemCommand {
                id,
                changes: UpdateInventoryItem::default(),
            })
            .await
            .unwrap()
            .unwrap();
        assert!(updated.is_none());

        let deleted = mediator.send(DeleteItemCommand(id)).await.unwrap().unwrap();
        assert!(deleted.is_none());
    }

    #[test]
    fn memory_settings_open_memory_store() {
        let settings = Settings {
            storage: StorageBackend::Memory,
            ..Settings::default()
        };
        assert!(create_store(&settings).is_ok());
    }
}
