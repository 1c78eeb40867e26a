//! Request primitives: pagination, filters and the per-call context.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ResourceName;

/// Page-based pagination, as the backend expects it (`page`/`limit`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
        }
    }
}

impl Pagination {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }
}

/// A single filter predicate sent along with a list request.
///
/// The backend currently understands only the `search` field; other fields
/// are carried through untouched for adapters that may use them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub field: String,
    pub value: String,
}

impl Filter {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn search(value: impl Into<String>) -> Self {
        Self::new("search", value)
    }
}

/// Extract the `search` filter value, if one is present.
pub fn search_value(filters: &[Filter]) -> Option<&str> {
    filters
        .iter()
        .find(|f| f.field == "search")
        .map(|f| f.value.as_str())
}

/// The five uniform operations every adapter implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    List,
    GetOne,
    Create,
    Update,
    DeleteOne,
}

/// Everything one outgoing data operation carries.
///
/// Ephemeral: built per call, dropped once the call resolves. Each in-flight
/// operation owns its own context, so concurrent operations share nothing.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub resource: ResourceName,
    pub operation: OperationKind,
    pub pagination: Pagination,
    pub filters: Vec<Filter>,
    pub id: Option<String>,
    pub payload: Option<Value>,
}

impl RequestContext {
    fn base(resource: ResourceName, operation: OperationKind) -> Self {
        Self {
            resource,
            operation,
            pagination: Pagination::default(),
            filters: Vec::new(),
            id: None,
            payload: None,
        }
    }

    pub fn list(resource: ResourceName) -> Self {
        Self::base(resource, OperationKind::List)
    }

    pub fn get_one(resource: ResourceName, id: impl Into<String>) -> Self {
        let mut ctx = Self::base(resource, OperationKind::GetOne);
        ctx.id = Some(id.into());
        ctx
    }

    pub fn create(resource: ResourceName, payload: Value) -> Self {
        let mut ctx = Self::base(resource, OperationKind::Create);
        ctx.payload = Some(payload);
        ctx
    }

    pub fn update(resource: ResourceName, id: impl Into<String>, payload: Value) -> Self {
        let mut ctx = Self::base(resource, OperationKind::Update);
        ctx.id = Some(id.into());
        ctx.payload = Some(payload);
        ctx
    }

    pub fn delete_one(resource: ResourceName, id: impl Into<String>) -> Self {
        let mut ctx = Self::base(resource, OperationKind::DeleteOne);
        ctx.id = Some(id.into());
        ctx
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }
}
