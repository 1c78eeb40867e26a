//! The uniform CRUD contract every resource adapter implements.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use brandkit_core::{AdminError, AdminResult, Filter, Pagination, ResourceName};

/// Result of a list operation: the raw items plus the backend's total count.
#[derive(Debug, Clone, PartialEq)]
pub struct ListResult {
    pub items: Vec<Value>,
    pub total: u64,
}

/// One adapter per backend namespace, all exposing the same five
/// asynchronous operations. Operations are independent; no ordering is
/// guaranteed between concurrently issued calls.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// GET `/admin/{resource}` with `page`/`limit` (and adapter-specific
    /// filter parameters).
    async fn list(
        &self,
        resource: &ResourceName,
        pagination: Pagination,
        filters: &[Filter],
    ) -> AdminResult<ListResult>;

    /// GET `/admin/{resource}/{id}`; absence surfaces as
    /// [`AdminError::NotFound`].
    async fn get_one(&self, resource: &ResourceName, id: &str) -> AdminResult<Value>;

    /// POST `/admin/{resource}`.
    async fn create(&self, resource: &ResourceName, payload: Value) -> AdminResult<Value>;

    /// PATCH `/admin/{resource}/{id}` with partial-update semantics.
    async fn update(&self, resource: &ResourceName, id: &str, payload: Value)
    -> AdminResult<Value>;

    /// DELETE `/admin/{resource}/{id}`. Idempotency is the backend's
    /// responsibility; this layer never retries.
    async fn delete_one(&self, resource: &ResourceName, id: &str) -> AdminResult<Value>;

    /// Base URL this adapter talks to.
    fn api_url(&self) -> &str;
}

pub(crate) fn collection_path(resource: &ResourceName) -> String {
    format!("/admin/{resource}")
}

pub(crate) fn item_path(resource: &ResourceName, id: &str) -> String {
    format!("/admin/{resource}/{id}")
}

pub(crate) fn page_query(pagination: Pagination) -> Vec<(&'static str, String)> {
    vec![
        ("page", pagination.page.to_string()),
        ("limit", pagination.page_size.to_string()),
    ]
}

/// Parse the backend's `{data, meta: {total}}` list envelope.
///
/// Only `meta.total` is required here; the richer typed envelope lives in
/// [`crate::model::ListResponse`].
pub(crate) fn parse_list_envelope(body: Value) -> AdminResult<ListResult> {
    #[derive(Deserialize)]
    struct Meta {
        total: u64,
    }

    #[derive(Deserialize)]
    struct Envelope {
        data: Vec<Value>,
        meta: Meta,
    }

    let envelope: Envelope = serde_json::from_value(body)
        .map_err(|err| AdminError::network(format!("malformed list envelope: {err}")))?;

    Ok(ListResult {
        items: envelope.data,
        total: envelope.meta.total,
    })
}
