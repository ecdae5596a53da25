//! Read-only clinic data sources.
//!
//! Filtering, booking and rendering only ever see a [`ClinicCatalog`]. The built-in catalog and
//! YAML-file catalogs are both served by [`StaticCatalog`]; a backend-backed source can be added
//! by implementing the trait.

use crate::config::CoreConfig;
use crate::ClinicResult;
use catalog::{ClinicCatalogFile, ClinicRecord};
use clinic_types::ClinicId;
use std::borrow::Cow;
use std::path::Path;

/// Catalog embedded into the binary.
const BUILTIN_CATALOG_YAML: &str = include_str!("../data/clinics.yaml");

/// A read-only source of clinic records.
pub trait ClinicCatalog: Send + Sync {
    /// Every clinic, in display order.
    fn list(&self) -> Cow<'_, [ClinicRecord]>;

    /// Looks up a single clinic by identifier.
    fn find(&self, id: ClinicId) -> Option<ClinicRecord> {
        self.list().iter().find(|c| c.id == id).cloned()
    }
}

/// In-memory catalog fixed for the lifetime of the process.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    records: Vec<ClinicRecord>,
}

impl StaticCatalog {
    pub fn from_records(records: Vec<ClinicRecord>) -> Self {
        Self { records }
    }

    /// The five-clinic catalog shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded catalog fails to parse.
    pub fn builtin() -> ClinicResult<Self> {
        Ok(Self::from_records(ClinicCatalogFile::parse(
            BUILTIN_CATALOG_YAML,
        )?))
    }

    /// Loads a catalog from a YAML file.
    pub fn load(path: &Path) -> ClinicResult<Self> {
        let records = ClinicCatalogFile::load(path)?;
        tracing::info!(
            "loaded {} clinics from {}",
            records.len(),
            path.display()
        );
        Ok(Self::from_records(records))
    }

    /// The configured catalog file if one is set, otherwise the built-in catalog.
    pub fn from_config(cfg: &CoreConfig) -> ClinicResult<Self> {
        match cfg.catalog_file() {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }
}

impl ClinicCatalog for StaticCatalog {
    fn list(&self) -> Cow<'_, [ClinicRecord]> {
        Cow::Borrowed(&self.records)
    }
}
