//! Adapter for the plans namespace.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use brandkit_client::AdminClient;
use brandkit_core::{AdminError, AdminResult, Filter, Pagination, ResourceName};

use crate::notify::Notifier;
use crate::provider::{DataProvider, ListResult, collection_path, item_path, page_query,
    parse_list_envelope};

/// Adapter for subscription plans.
///
/// Mutations additionally emit a user-facing notification through the
/// injected [`Notifier`]; the operation's own result is unchanged by it,
/// and failures still propagate to the caller. List requests ignore
/// filters; the plans view has no search box.
pub struct PlanProvider {
    client: Arc<AdminClient>,
    notifier: Arc<dyn Notifier>,
    api_url: String,
}

impl PlanProvider {
    pub fn new(client: Arc<AdminClient>, notifier: Arc<dyn Notifier>) -> Self {
        let api_url = client.base_url().to_string();
        Self {
            client,
            notifier,
            api_url,
        }
    }

    fn notify(&self, result: &AdminResult<Value>, success: &str, fallback: &str) {
        match result {
            Ok(_) => self.notifier.success(success),
            Err(err) => {
                let copy = failure_copy(err, fallback);
                self.notifier.error(&copy);
            }
        }
    }
}

/// Prefer the backend's own message when it sent one.
fn failure_copy(err: &AdminError, fallback: &str) -> String {
    err.server_message()
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}

#[async_trait]
impl DataProvider for PlanProvider {
    async fn list(
        &self,
        resource: &ResourceName,
        pagination: Pagination,
        _filters: &[Filter],
    ) -> AdminResult<ListResult> {
        let body = self
            .client
            .get(&collection_path(resource), &page_query(pagination))
            .await?;
        parse_list_envelope(body)
    }

    async fn get_one(&self, resource: &ResourceName, id: &str) -> AdminResult<Value> {
        self.client.get(&item_path(resource, id), &[]).await
    }

    async fn create(&self, resource: &ResourceName, payload: Value) -> AdminResult<Value> {
        let result = self.client.post(&collection_path(resource), &payload).await;
        self.notify(&result, "Plan created successfully", "Failed to create plan");
        result
    }

    async fn update(
        &self,
        resource: &ResourceName,
        id: &str,
        payload: Value,
    ) -> AdminResult<Value> {
        let result = self.client.patch(&item_path(resource, id), &payload).await;
        self.notify(&result, "Plan updated successfully", "Failed to update plan");
        result
    }

    async fn delete_one(&self, resource: &ResourceName, id: &str) -> AdminResult<Value> {
        let result = self.client.delete(&item_path(resource, id)).await;
        self.notify(&result, "Plan deleted successfully", "Failed to delete plan");
        result
    }

    fn api_url(&self) -> &str {
        &self.api_url
    }
}
