//! Catalog filtering.
//!
//! A [`FilterState`] narrows the catalog with five conjunctive predicates. The result keeps
//! catalog order and is recomputed from scratch on every call.

use crate::constants::{DEFAULT_MAX_DISTANCE_KM, DEFAULT_MAX_PRICE, DEFAULT_MIN_RATING};
use catalog::ClinicRecord;

/// User-adjustable criteria narrowing the displayed clinic list.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterState {
    /// Free-text query matched case-insensitively against names and specialties.
    pub search_text: String,
    pub min_rating: f64,
    pub max_price: f64,
    pub max_distance_km: f64,
    /// Specialty tag that must appear verbatim in a clinic's specialties.
    pub selected_specialty: Option<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            min_rating: DEFAULT_MIN_RATING,
            max_price: DEFAULT_MAX_PRICE,
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
            selected_specialty: None,
        }
    }
}

impl FilterState {
    /// Returns true when `clinic` satisfies every predicate of this filter.
    pub fn matches(&self, clinic: &ClinicRecord) -> bool {
        clinic.rating.value() >= self.min_rating
            && clinic.consultation_fee.value() <= self.max_price
            && clinic.distance_km.value() <= self.max_distance_km
            && self.matches_search(clinic)
            && self.matches_specialty(clinic)
    }

    fn matches_search(&self, clinic: &ClinicRecord) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();
        clinic.name.as_str().to_lowercase().contains(&needle)
            || clinic
                .specialties
                .iter()
                .any(|s| s.as_str().to_lowercase().contains(&needle))
    }

    fn matches_specialty(&self, clinic: &ClinicRecord) -> bool {
        match self.selected_specialty.as_deref() {
            None | Some("") => true,
            Some(specialty) => clinic.has_specialty(specialty),
        }
    }

    /// Selects `specialty`, or clears the selection if it was already selected.
    pub fn toggle_specialty(&mut self, specialty: &str) {
        if self.selected_specialty.as_deref() == Some(specialty) {
            self.selected_specialty = None;
        } else {
            self.selected_specialty = Some(specialty.to_owned());
        }
    }

    /// Returns a copy of this filter with `specialty` toggled.
    pub fn with_toggled_specialty(&self, specialty: &str) -> Self {
        let mut next = self.clone();
        next.toggle_specialty(specialty);
        next
    }

    pub fn is_specialty_selected(&self, specialty: &str) -> bool {
        self.selected_specialty.as_deref() == Some(specialty)
    }
}

/// Returns the clinics matching `filter`, in catalog order.
pub fn filter_clinics<'a>(clinics: &'a [ClinicRecord], filter: &FilterState) -> Vec<&'a ClinicRecord> {
    clinics.iter().filter(|c| filter.matches(c)).collect()
}
