//! Specialty selector options.

use crate::constants::POPULAR_SPECIALTIES;
use crate::filter::FilterState;
use catalog::ClinicRecord;

/// One tag of the specialty selector grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpecialtyOption {
    pub name: String,
    pub selected: bool,
}

/// The fixed selector tags, marked against the current filter.
pub fn specialty_options(filter: &FilterState) -> Vec<SpecialtyOption> {
    POPULAR_SPECIALTIES
        .iter()
        .map(|name| SpecialtyOption {
            name: (*name).to_owned(),
            selected: filter.is_specialty_selected(name),
        })
        .collect()
}

/// Distinct specialties offered across `clinics`, in first-seen order.
pub fn catalog_specialties(clinics: &[ClinicRecord]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for specialty in clinics.iter().flat_map(|c| c.specialties.iter()) {
        if !seen.iter().any(|s| s == specialty.as_str()) {
            seen.push(specialty.to_string());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{ClinicCatalog, StaticCatalog};

    #[test]
    fn options_mark_exactly_the_selected_tag() {
        let mut filter = FilterState::default();
        assert!(specialty_options(&filter).iter().all(|o| !o.selected));

        filter.toggle_specialty("Oncology");
        let selected: Vec<_> = specialty_options(&filter)
            .into_iter()
            .filter(|o| o.selected)
            .map(|o| o.name)
            .collect();
        assert_eq!(selected, vec!["Oncology".to_string()]);
    }

    #[test]
    fn catalog_specialties_are_distinct_in_first_seen_order() {
        let catalog = StaticCatalog::builtin().expect("builtin catalog parses");
        let specialties = catalog_specialties(&catalog.list());

        assert_eq!(&specialties[..3], ["Cardiology", "Neurology", "Orthopedics"]);
        assert_eq!(
            specialties.iter().filter(|s| *s == "Pediatrics").count(),
            1
        );
        assert_eq!(specialties.last().map(String::as_str), Some("Physiotherapy"));
    }
}
