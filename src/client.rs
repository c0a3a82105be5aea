use crate::endpoints::MessageResponse;
use crate::models::{InventoryItem, NewInventoryItem, UpdateInventoryItem};
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Item not found")]
    NotFound,

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server responded with {status}: {message}")]
    Status { status: StatusCode, message: String },
}

/// The inventory operations as seen from the client side.
#[async_trait]
pub trait InventoryApi: Send + Sync {
    async fn list(&self, filter: Option<&str>) -> Result<Vec<InventoryItem>, ClientError>;

    async fn create(&self, item: &NewInventoryItem) -> Result<InventoryItem, ClientError>;

    async fn get(&self, id: Uuid) -> Result<InventoryItem, ClientError>;

    async fn update(
        &self,
        id: Uuid,
        changes: &UpdateInventoryItem,
    ) -> Result<InventoryItem, ClientError>;

    async fn delete(&self, id: Uuid) -> Result<(), ClientError>;
}

/// Talks to the inventory service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpInventoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpInventoryClient {
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        HttpInventoryClient {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/api/inventory", self.base_url)
    }

    fn item_url(&self, id: Uuid) -> String {
        format!("{}/api/inventory/{}", self.base_url, id)
    }
}

/// Turns a non-2xx response into an error, keeping the server's message if it sent one.
async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::NOT_FOUND {
        return Err(ClientError::NotFound);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<MessageResponse>(&body)
        .map(|m| m.message)
        .unwrap_or(body);

    Err(ClientError::Status { status, message })
}

#[async_trait]
impl InventoryApi for HttpInventoryClient {
    async fn list(&self, filter: Option<&str>) -> Result<Vec<InventoryItem>, ClientError> {
        let mut request = self.http.get(self.collection_url());
        if let Some(filter) = filter.filter(|f| !f.is_empty()) {
            request = request.query(&[("search", filter)]);
        }

        let response = check(request.send().await?).await?;
        Ok(response.json().await?)
    }

    async fn create(&self, item: &NewInventoryItem) -> Result<InventoryItem, ClientError> {
        let response = self.http.post(self.collection_url()).json(item).send().await?;
        let response = check(response).await?;
        Ok(response.json().await?)
    }

    async fn get(&self, id: Uuid) -> Result<InventoryItem, ClientError> {
        let response = check(self.http.get(self.item_url(id)).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &UpdateInventoryItem,
    ) -> Result<InventoryItem, ClientError> {
        let response = self.http.put(self.item_url(id)).json(changes).send().await?;
        let response = check(response).await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ClientError> {
        check(self.http.delete(self.item_url(id)).send().await?).await?;
        Ok(())
    }
}
