use crate::commands::{CreateItemCommand, DeleteItemCommand, UpdateItemCommand};
use crate::endpoints::{ApiError, MessageResponse};
use crate::models::{NewInventoryItem, UpdateInventoryItem};
use crate::queries::{GetItemQuery, ListItemsQuery};
use crate::SharedMediator;
use actix_web::web::{Data, Json, Path, Query};
use actix_web::HttpResponse;
use mediator::AsyncMediator;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

pub async fn get_all(
    mediator: Data<SharedMediator>,
    params: Query<SearchParams>,
) -> Result<HttpResponse, ApiError> {
    let query = ListItemsQuery {
        search: params.into_inner().search,
    };

    let mut mediator = mediator.lock().await;
    let items = mediator.send(query).await.map_err(ApiError::dispatch)??;

    Ok(HttpResponse::Ok().json(items))
}

pub async fn create(
    mediator: Data<SharedMediator>,
    body: Json<NewInventoryItem>,
) -> Result<HttpResponse, ApiError> {
    let mut mediator = mediator.lock().await;
    let item = mediator
        .send(CreateItemCommand(body.into_inner()))
        .await
        .map_err(ApiError::dispatch)??;

    Ok(HttpResponse::Created()
        .insert_header(("Location", format!("/api/inventory/{}", item.id)))
        .json(item))
}

pub async fn get(path: Path<Uuid>, mediator: Data<SharedMediator>) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let mut mediator = mediator.lock().await;

    match mediator.send(GetItemQuery(id)).await.map_err(ApiError::dispatch)?? {
        Some(item) => Ok(HttpResponse::Ok().json(item)),
        None => Err(ApiError::NotFound),
    }
}

pub async fn update(
    path: Path<Uuid>,
    mediator: Data<SharedMediator>,
    body: Json<UpdateInventoryItem>,
) -> Result<HttpResponse, ApiError> {
    let command = UpdateItemCommand {
        id: path.into_inner(),
        changes: body.into_inner(),
    };

    let mut mediator = mediator.lock().await;

    match mediator.send(command).await.map_err(ApiError::dispatch)?? {
        Some(item) => Ok(HttpResponse::Ok().json(item)),
        None => Err(ApiError::NotFound),
    }
}

pub async fn delete(path: Path<Uuid>, mediator: Data<SharedMediator>) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let mut mediator = mediator.lock().await;

    match mediator.send(DeleteItemCommand(id)).await.map_err(ApiError::dispatch)?? {
        Some(_) => Ok(HttpResponse::Ok().json(MessageResponse::new("Item deleted"))),
        None => Err(ApiError::NotFound),
    }
}

pub async fn method_not_allowed() -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed)
}
