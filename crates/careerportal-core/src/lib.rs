//! Career Portal Core Library
//!
//! Shared functionality for the Career Portal client:
//! - Session store: credential persistence and role derivation
//! - Route guard: per-role access decisions for every view
//! - Typed REST API client for the portal backend
//! - Client-side form validation and candidate reporting

pub mod api;
pub mod config;
pub mod error;
pub mod guard;
pub mod report;
pub mod session;
pub mod tracing_init;
pub mod validation;

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use guard::{Access, GuardState, Navigation, Route, RouteGuard};
pub use session::{Role, SessionStore};
