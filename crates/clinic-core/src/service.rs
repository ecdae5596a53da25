//! Directory service shared by the REST API and the CLI.

use crate::booking::{self, BookingOutcome, BookingSelection};
use crate::config::CoreConfig;
use crate::directory::{ClinicCatalog, StaticCatalog};
use crate::emergency::{self, EmergencyCall};
use crate::filter::{filter_clinics, FilterState};
use crate::session::ViewSession;
use crate::specialty::catalog_specialties;
use crate::ClinicResult;
use catalog::ClinicRecord;
use clinic_types::ClinicId;
use std::sync::Arc;

/// Entry point to directory operations over an injected catalog.
#[derive(Clone)]
pub struct DirectoryService {
    cfg: Arc<CoreConfig>,
    catalog: Arc<dyn ClinicCatalog>,
}

impl DirectoryService {
    pub fn new(cfg: Arc<CoreConfig>, catalog: Arc<dyn ClinicCatalog>) -> Self {
        Self { cfg, catalog }
    }

    /// Builds the service over the catalog named by `cfg` (or the built-in one).
    pub fn from_config(cfg: Arc<CoreConfig>) -> ClinicResult<Self> {
        let catalog = StaticCatalog::from_config(&cfg)?;
        Ok(Self::new(cfg, Arc::new(catalog)))
    }

    pub fn config(&self) -> &CoreConfig {
        &self.cfg
    }

    pub fn catalog(&self) -> &dyn ClinicCatalog {
        self.catalog.as_ref()
    }

    /// Clinics matching `filter`, in catalog order.
    pub fn search(&self, filter: &FilterState) -> Vec<ClinicRecord> {
        let all = self.catalog.list();
        let clinics: Vec<ClinicRecord> = filter_clinics(&all, filter)
            .into_iter()
            .cloned()
            .collect();
        tracing::debug!(
            "filter matched {} of {} clinics",
            clinics.len(),
            all.len()
        );
        clinics
    }

    pub fn clinic(&self, id: ClinicId) -> Option<ClinicRecord> {
        self.catalog.find(id)
    }

    /// Distinct specialties across the whole catalog.
    pub fn specialties(&self) -> Vec<String> {
        catalog_specialties(&self.catalog.list())
    }

    pub fn book(&self, clinic_id: ClinicId, selection: &BookingSelection) -> BookingOutcome {
        booking::book(self.catalog.as_ref(), clinic_id, selection)
    }

    pub fn emergency_call(&self) -> EmergencyCall {
        emergency::initiate_call(&self.cfg)
    }

    /// A fresh session using the configured selection scope.
    pub fn new_session(&self) -> ViewSession {
        ViewSession::new(self.cfg.selection_scope())
    }
}
