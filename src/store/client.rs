use reqwest::{Client, Response, Url};

use crate::catalog::{CatalogItem, ItemDraft, ItemId};
use crate::store::error::StoreError;

/// HTTP client for the single item resource endpoint.
///
/// Every call is one request: no retries, no timeouts, no caching.
#[derive(Clone)]
pub struct ItemStoreClient {
    client: Client,
    url: Url,
}

impl ItemStoreClient {
    pub fn new(base_url: &str) -> Result<Self, StoreError> {
        let url = Url::parse(base_url).map_err(|e| StoreError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            client: Client::new(),
            url,
        })
    }

    /// Full item list in server order.
    pub async fn list(&self) -> Result<Vec<CatalogItem>, StoreError> {
        let response = self.send(self.client.get(self.url.clone())).await?;
        let items = response
            .json::<Vec<CatalogItem>>()
            .await
            .map_err(|source| StoreError::Decode { source })?;
        tracing::debug!(count = items.len(), "Fetched item list");
        Ok(items)
    }

    pub async fn create(&self, draft: &ItemDraft) -> Result<(), StoreError> {
        self.send(self.client.post(self.url.clone()).json(draft))
            .await?;
        tracing::debug!(name = %draft.name, "Created item");
        Ok(())
    }

    /// Sends the full record; the server matches on `id`.
    pub async fn update(&self, item: &CatalogItem) -> Result<(), StoreError> {
        self.send(self.client.put(self.url.clone()).json(item))
            .await?;
        tracing::debug!(id = item.id, "Updated item");
        Ok(())
    }

    pub async fn delete(&self, id: ItemId) -> Result<(), StoreError> {
        let mut url = self.url.clone();
        url.query_pairs_mut().append_pair("id", &id.to_string());
        self.send(self.client.delete(url)).await?;
        tracing::debug!(id, "Deleted item");
        Ok(())
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, StoreError> {
        let response = request.send().await.map_err(|source| {
            tracing::warn!(error = %source, "Item store request failed");
            StoreError::Network { source }
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Item store rejected request");
            return Err(StoreError::Status {
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}
