//! Clinic catalog wire models and translation helpers.
//!
//! Responsibilities:
//! - Define the public domain-level clinic record
//! - Define a strict wire model for serialisation/deserialisation
//! - Provide translation helpers between domain primitives and the wire model
//! - Reject catalogs with duplicate clinic identifiers
//!
//! Notes:
//! - Catalog files are read-only for the lifetime of the process
//! - Record order in the file is the display order of the directory

use crate::{CatalogError, CatalogResult};
use clinic_types::{ClinicId, DistanceKm, Fee, NonEmptyText, Rating};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Value of `resourceType` expected at the root of every catalog file.
const RESOURCE_TYPE: &str = "ClinicCatalog";

// ============================================================================
// Public domain-level types
// ============================================================================

/// A single facility listed in the directory.
#[derive(Clone, Debug, PartialEq)]
pub struct ClinicRecord {
    /// Unique identifier within the catalog.
    pub id: ClinicId,

    /// Display name of the clinic.
    pub name: NonEmptyText,

    /// Human-readable location (district, campus, etc.).
    pub location: NonEmptyText,

    /// Specialties in display order. Duplicates are kept as given.
    pub specialties: Vec<NonEmptyText>,

    pub rating: Rating,

    pub consultation_fee: Fee,

    pub distance_km: DistanceKm,

    /// External image shown on the clinic card.
    pub image_url: String,

    /// Whether the clinic dispenses medicines. `None` when the catalog does not say.
    pub offers_medicines: Option<bool>,
}

impl ClinicRecord {
    /// Returns true when `specialty` is one of this clinic's specialties (exact match).
    pub fn has_specialty(&self, specialty: &str) -> bool {
        self.specialties.iter().any(|s| s.as_str() == specialty)
    }
}

// ============================================================================
// Public catalog file operations
// ============================================================================

/// Catalog file operations.
///
/// This is a zero-sized type used for namespacing catalog-related operations.
pub struct ClinicCatalogFile;

impl ClinicCatalogFile {
    /// Parse a clinic catalog from YAML text.
    ///
    /// This uses `serde_path_to_error` to surface the path (e.g. `clinics.2.rating`) of the
    /// failing field when the YAML does not match the wire schema.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if:
    /// - the YAML does not match the wire schema or contains unknown keys,
    /// - `resourceType` is not `ClinicCatalog`,
    /// - any field fails domain validation (blank text, rating out of range, negative fee),
    /// - two clinics share an identifier.
    pub fn parse(yaml_text: &str) -> CatalogResult<Vec<ClinicRecord>> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml_text);

        let wire = match serde_path_to_error::deserialize::<_, CatalogWire>(deserializer) {
            Ok(parsed) => parsed,
            Err(err) => {
                let path = err.path().to_string();
                let source = err.into_inner();
                let path = if path.is_empty() {
                    "<root>"
                } else {
                    path.as_str()
                };
                return Err(CatalogError::Translation(format!(
                    "ClinicCatalog schema mismatch at {path}: {source}"
                )));
            }
        };

        if wire.resource_type != RESOURCE_TYPE {
            return Err(CatalogError::InvalidInput(format!(
                "Expected resourceType '{RESOURCE_TYPE}', got '{}'",
                wire.resource_type
            )));
        }

        let records = wire
            .clinics
            .into_iter()
            .enumerate()
            .map(|(index, clinic)| wire_to_domain(index, clinic))
            .collect::<CatalogResult<Vec<_>>>()?;

        ensure_unique_ids(&records)?;
        Ok(records)
    }

    /// Read and parse a catalog file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, otherwise the errors of
    /// [`ClinicCatalogFile::parse`].
    pub fn load(path: &Path) -> CatalogResult<Vec<ClinicRecord>> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Render clinic records as catalog YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if serialisation fails.
    pub fn render(records: &[ClinicRecord]) -> CatalogResult<String> {
        let wire = CatalogWire {
            resource_type: RESOURCE_TYPE.to_string(),
            clinics: records.iter().map(domain_to_wire).collect(),
        };
        serde_yaml::to_string(&wire)
            .map_err(|e| CatalogError::Translation(format!("Failed to serialise catalog: {e}")))
    }
}

// ============================================================================
// Wire types (internal)
// ============================================================================

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
struct CatalogWire {
    #[serde(rename = "resourceType")]
    pub resource_type: String,

    #[serde(default)]
    pub clinics: Vec<ClinicWire>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct ClinicWire {
    pub id: u32,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub rating: f64,
    pub consultation_fee: f64,
    pub distance_km: f64,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offers_medicines: Option<bool>,
}

// ============================================================================
// Helper functions (internal)
// ============================================================================

fn wire_to_domain(index: usize, wire: ClinicWire) -> CatalogResult<ClinicRecord> {
    let invalid = |field: &str, err: &dyn std::fmt::Display| {
        CatalogError::Translation(format!("clinics.{index}.{field}: {err}"))
    };

    let name = NonEmptyText::new(&wire.name).map_err(|e| invalid("name", &e))?;
    let location = NonEmptyText::new(&wire.location).map_err(|e| invalid("location", &e))?;
    let specialties = wire
        .specialties
        .iter()
        .map(NonEmptyText::new)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| invalid("specialties", &e))?;

    Ok(ClinicRecord {
        id: ClinicId::new(wire.id),
        name,
        location,
        specialties,
        rating: Rating::new(wire.rating).map_err(|e| invalid("rating", &e))?,
        consultation_fee: Fee::new(wire.consultation_fee)
            .map_err(|e| invalid("consultationFee", &e))?,
        distance_km: DistanceKm::new(wire.distance_km).map_err(|e| invalid("distanceKm", &e))?,
        image_url: wire.image_url,
        offers_medicines: wire.offers_medicines,
    })
}

fn domain_to_wire(record: &ClinicRecord) -> ClinicWire {
    ClinicWire {
        id: record.id.get(),
        name: record.name.to_string(),
        location: record.location.to_string(),
        specialties: record.specialties.iter().map(|s| s.to_string()).collect(),
        rating: record.rating.value(),
        consultation_fee: record.consultation_fee.value(),
        distance_km: record.distance_km.value(),
        image_url: record.image_url.clone(),
        offers_medicines: record.offers_medicines,
    }
}

fn ensure_unique_ids(records: &[ClinicRecord]) -> CatalogResult<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id) {
            return Err(CatalogError::InvalidInput(format!(
                "duplicate clinic id {}",
                record.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"resourceType: ClinicCatalog
clinics:
  - id: 1
    name: City General Hospital
    location: Downtown Medical District
    specialties:
      - Cardiology
      - Neurology
    rating: 4.8
    consultationFee: 500
    distanceKm: 2.5
    imageUrl: https://example.org/city.jpg
    offersMedicines: true
  - id: 2
    name: Medicare Plus Center
    location: Westside Healthcare Park
    specialties: [Pediatrics]
    rating: 4.6
    consultationFee: 350
    distanceKm: 5
    imageUrl: https://example.org/medicare.jpg
"#;

    #[test]
    fn parses_sample_catalog_in_file_order() {
        let records = ClinicCatalogFile::parse(SAMPLE).expect("parse catalog");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, ClinicId::new(1));
        assert_eq!(records[0].name.as_str(), "City General Hospital");
        assert!(records[0].has_specialty("Neurology"));
        assert_eq!(records[0].offers_medicines, Some(true));
        assert_eq!(records[1].distance_km.value(), 5.0);
        assert_eq!(records[1].offers_medicines, None);
    }

    #[test]
    fn render_output_parses_back_to_same_records() {
        let records = ClinicCatalogFile::parse(SAMPLE).expect("parse catalog");
        let output = ClinicCatalogFile::render(&records).expect("render catalog");
        assert!(output.contains("resourceType: ClinicCatalog"));
        assert!(!output.contains("offersMedicines: null"));

        let reparsed = ClinicCatalogFile::parse(&output).expect("reparse catalog");
        assert_eq!(records, reparsed);
    }

    #[test]
    fn strict_validation_rejects_unknown_keys() {
        let input = SAMPLE.replace("    rating: 4.6", "    rating: 4.6\n    parking: true");

        let err = ClinicCatalogFile::parse(&input).expect_err("should reject unknown key");
        match err {
            CatalogError::Translation(msg) => {
                assert!(msg.contains("clinics[1]") || msg.contains("clinics.1"), "{msg}");
                assert!(msg.contains("parking"), "{msg}");
            }
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_invalid_resource_type() {
        let input = SAMPLE.replace("resourceType: ClinicCatalog", "resourceType: Pharmacy");

        let err = ClinicCatalogFile::parse(&input).expect_err("should reject resourceType");
        match err {
            CatalogError::InvalidInput(msg) => assert!(msg.contains("Pharmacy")),
            other => panic!("expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_out_of_range_rating_with_field_path() {
        let input = SAMPLE.replace("rating: 4.8", "rating: 6.0");

        let err = ClinicCatalogFile::parse(&input).expect_err("should reject rating");
        match err {
            CatalogError::Translation(msg) => assert!(msg.contains("clinics.0.rating"), "{msg}"),
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_blank_specialty() {
        let input = SAMPLE.replace("specialties: [Pediatrics]", "specialties: [\"  \"]");

        let err = ClinicCatalogFile::parse(&input).expect_err("should reject blank specialty");
        assert!(matches!(err, CatalogError::Translation(msg) if msg.contains("specialties")));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let input = SAMPLE.replace("  - id: 2", "  - id: 1");

        let err = ClinicCatalogFile::parse(&input).expect_err("should reject duplicate id");
        assert!(matches!(err, CatalogError::InvalidInput(msg) if msg.contains("duplicate clinic id 1")));
    }

    #[test]
    fn empty_catalog_is_valid() {
        let records =
            ClinicCatalogFile::parse("resourceType: ClinicCatalog\nclinics: []\n").expect("parse");
        assert!(records.is_empty());
    }

    #[test]
    fn load_reports_missing_file_as_io_error() {
        let err = ClinicCatalogFile::load(Path::new("/definitely/not/here/clinics.yaml"))
            .expect_err("missing file");
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
