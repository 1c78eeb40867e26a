//! `brandkit-core` — shared foundation for the admin core.
//!
//! This crate contains the error taxonomy, resource naming, request
//! primitives and startup configuration. No IO happens here.

pub mod config;
pub mod error;
pub mod request;
pub mod resource;

pub use config::{AdminConfig, ConfigError};
pub use error::{AdminError, AdminResult};
pub use request::{Filter, OperationKind, Pagination, RequestContext, search_value};
pub use resource::ResourceName;
