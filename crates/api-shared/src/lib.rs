//! # API Shared
//!
//! Shared definitions for the clinic directory APIs.
//!
//! Contains:
//! - Request/response types with OpenAPI schemas (`dto` module)
//! - Conversions from `clinic-core` domain values
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the `clinic-run` binary.

pub mod dto;
pub mod health;

pub use dto::*;
pub use health::HealthService;
