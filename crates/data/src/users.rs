//! Adapter for the users namespace.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use brandkit_client::AdminClient;
use brandkit_core::{AdminResult, Filter, Pagination, ResourceName, search_value};

use crate::provider::{DataProvider, ListResult, collection_path, item_path, page_query,
    parse_list_envelope};

/// Plain adapter against `/admin/{resource}`; honors the `search` filter on
/// list requests. Also serves as the router's default adapter.
pub struct UserProvider {
    client: Arc<AdminClient>,
    api_url: String,
}

impl UserProvider {
    pub fn new(client: Arc<AdminClient>) -> Self {
        let api_url = client.base_url().to_string();
        Self { client, api_url }
    }
}

#[async_trait]
impl DataProvider for UserProvider {
    async fn list(
        &self,
        resource: &ResourceName,
        pagination: Pagination,
        filters: &[Filter],
    ) -> AdminResult<ListResult> {
        let mut query = page_query(pagination);
        if let Some(term) = search_value(filters) {
            query.push(("search", term.to_string()));
        }

        let body = self.client.get(&collection_path(resource), &query).await?;
        parse_list_envelope(body)
    }

    async fn get_one(&self, resource: &ResourceName, id: &str) -> AdminResult<Value> {
        self.client.get(&item_path(resource, id), &[]).await
    }

    async fn create(&self, resource: &ResourceName, payload: Value) -> AdminResult<Value> {
        self.client.post(&collection_path(resource), &payload).await
    }

    async fn update(
        &self,
        resource: &ResourceName,
        id: &str,
        payload: Value,
    ) -> AdminResult<Value> {
        self.client.patch(&item_path(resource, id), &payload).await
    }

    async fn delete_one(&self, resource: &ResourceName, id: &str) -> AdminResult<Value> {
        self.client.delete(&item_path(resource, id)).await
    }

    fn api_url(&self) -> &str {
        &self.api_url
    }
}
