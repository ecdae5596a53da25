//! Per-user view session.
//!
//! A session owns the filter and booking selections of one user of the directory view. It is
//! mutated only in response to that user's input.

use crate::booking::{self, BookingOutcome, BookingSelection, BookingSelections, SelectionScope};
use crate::directory::ClinicCatalog;
use crate::filter::{filter_clinics, FilterState};
use catalog::ClinicRecord;
use clinic_types::ClinicId;

#[derive(Clone, Debug, PartialEq)]
pub struct ViewSession {
    filter: FilterState,
    selections: BookingSelections,
}

impl ViewSession {
    pub fn new(scope: SelectionScope) -> Self {
        Self {
            filter: FilterState::default(),
            selections: BookingSelections::new(scope),
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn selections(&self) -> &BookingSelections {
        &self.selections
    }

    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
    }

    pub fn toggle_specialty(&mut self, specialty: &str) {
        self.filter.toggle_specialty(specialty);
    }

    pub fn select_date(&mut self, clinic_id: ClinicId, date: Option<String>) {
        self.selections.select_date(clinic_id, date);
    }

    pub fn select_time(&mut self, clinic_id: ClinicId, time: Option<String>) {
        self.selections.select_time(clinic_id, time);
    }

    pub fn selection_for(&self, clinic_id: ClinicId) -> BookingSelection {
        self.selections.get(clinic_id)
    }

    /// Clinics visible under the current filter.
    pub fn visible_clinics(&self, catalog: &dyn ClinicCatalog) -> Vec<ClinicRecord> {
        let all = catalog.list();
        filter_clinics(&all, &self.filter)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Books `clinic_id` with the selection that applies to it. Selections are kept either way.
    pub fn book(&self, catalog: &dyn ClinicCatalog, clinic_id: ClinicId) -> BookingOutcome {
        booking::book(catalog, clinic_id, &self.selection_for(clinic_id))
    }
}
