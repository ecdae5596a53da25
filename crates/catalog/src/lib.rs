//! Clinic catalog wire/boundary support.
//!
//! This crate provides the **wire model** and **translation helpers** for clinic catalogs
//! stored as YAML files:
//! - strict parsing with path-aware error messages
//! - rendering of domain records back to YAML
//! - translation between validated domain primitives and wire structs
//!
//! It has no knowledge of filtering, booking or any HTTP concern; those live in `clinic-core`
//! and `api-rest`.

pub mod clinic;

pub use clinic::{ClinicCatalogFile, ClinicRecord};

/// Errors returned by the `catalog` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("translation error: {0}")]
    Translation(String),
}

/// Type alias for Results that can fail with a [`CatalogError`].
pub type CatalogResult<T> = Result<T, CatalogError>;
