//! `brandkit-data` — resource-scoped data access.
//!
//! One [`DataProvider`] adapter per backend namespace, all speaking the
//! same CRUD contract, routed by resource name through the
//! [`ProviderRegistry`].

pub mod model;
pub mod notify;
pub mod plans;
pub mod provider;
pub mod registry;
pub mod users;

pub use model::{
    AiFlags, Brand, BrandOwner, Invoice, ListMeta, ListResponse, Plan, Subscription, User,
    UserDetail, UserStats,
};
pub use notify::{LogNotifier, Notifier};
pub use plans::PlanProvider;
pub use provider::{DataProvider, ListResult};
pub use registry::{OperationOutcome, ProviderRegistry};
pub use users::UserProvider;
