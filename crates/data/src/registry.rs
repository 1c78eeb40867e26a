//! Resource name → adapter routing.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use brandkit_client::AdminClient;
use brandkit_core::{AdminError, AdminResult, OperationKind, RequestContext, ResourceName};

use crate::notify::Notifier;
use crate::plans::PlanProvider;
use crate::provider::{DataProvider, ListResult};
use crate::users::UserProvider;

/// What one dispatched operation produced.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationOutcome {
    List(ListResult),
    Item(Value),
}

/// Registry mapping resource names to adapters, built once at startup.
///
/// A default adapter is mandatory, so resolution never fails: unbound
/// names fall back to it rather than erroring at call time.
pub struct ProviderRegistry {
    bindings: HashMap<String, Arc<dyn DataProvider>>,
    default: Arc<dyn DataProvider>,
}

impl ProviderRegistry {
    pub fn new(default: Arc<dyn DataProvider>) -> Self {
        Self {
            bindings: HashMap::new(),
            default,
        }
    }

    /// The standard mapping of this deployment: `users` and `plans` bound
    /// explicitly, users doubling as the default.
    pub fn standard(client: Arc<AdminClient>, notifier: Arc<dyn Notifier>) -> Self {
        let users = Arc::new(UserProvider::new(client.clone()));
        let plans = Arc::new(PlanProvider::new(client, notifier));

        Self::new(users.clone())
            .bind(ResourceName::USERS, users)
            .bind(ResourceName::PLANS, plans)
    }

    pub fn bind(mut self, resource: ResourceName, provider: Arc<dyn DataProvider>) -> Self {
        self.bindings.insert(resource.as_str().to_string(), provider);
        self
    }

    /// Pure lookup; unbound names resolve to the default adapter.
    pub fn resolve(&self, resource: &str) -> &Arc<dyn DataProvider> {
        self.bindings.get(resource).unwrap_or(&self.default)
    }

    /// Explicit request/response cycle: resolve the adapter once and
    /// dispatch the context's operation. Contexts missing the id or
    /// payload their operation needs are rejected before any request is
    /// made.
    pub async fn execute(&self, ctx: RequestContext) -> AdminResult<OperationOutcome> {
        let provider = self.resolve(ctx.resource.as_str());

        match ctx.operation {
            OperationKind::List => provider
                .list(&ctx.resource, ctx.pagination, &ctx.filters)
                .await
                .map(OperationOutcome::List),
            OperationKind::GetOne => {
                let id = require_id(&ctx, "getOne")?;
                provider
                    .get_one(&ctx.resource, id)
                    .await
                    .map(OperationOutcome::Item)
            }
            OperationKind::Create => {
                let payload = require_payload(&ctx, "create")?;
                provider
                    .create(&ctx.resource, payload)
                    .await
                    .map(OperationOutcome::Item)
            }
            OperationKind::Update => {
                let id = require_id(&ctx, "update")?.to_string();
                let payload = require_payload(&ctx, "update")?;
                provider
                    .update(&ctx.resource, &id, payload)
                    .await
                    .map(OperationOutcome::Item)
            }
            OperationKind::DeleteOne => {
                let id = require_id(&ctx, "deleteOne")?;
                provider
                    .delete_one(&ctx.resource, id)
                    .await
                    .map(OperationOutcome::Item)
            }
        }
    }
}

fn require_id<'a>(ctx: &'a RequestContext, operation: &str) -> AdminResult<&'a str> {
    ctx.id
        .as_deref()
        .ok_or_else(|| AdminError::server(400, Some(format!("{operation} requires an id"))))
}

fn require_payload(ctx: &RequestContext, operation: &str) -> AdminResult<Value> {
    ctx.payload
        .clone()
        .ok_or_else(|| AdminError::server(400, Some(format!("{operation} requires a payload"))))
}
