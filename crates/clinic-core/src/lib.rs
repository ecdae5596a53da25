//! # Clinic Core
//!
//! Core logic of the clinic directory:
//! - a read-only clinic catalog behind the [`ClinicCatalog`] capability
//! - filtering by text, rating, price, distance and specialty
//! - mock booking and emergency-call actions that return outcome values
//! - per-user view sessions holding filter and booking selections
//!
//! **No API concerns**: HTTP servers, HTML rendering and command-line parsing belong in
//! `api-rest`, `api-shared` and `clinic-cli`.

pub mod booking;
pub mod config;
pub mod constants;
pub mod directory;
pub mod emergency;
pub mod error;
pub mod filter;
pub mod notification;
pub mod service;
pub mod session;
pub mod specialty;

pub use booking::{
    BookingOutcome, BookingRejection, BookingSelection, BookingSelections, SelectionScope,
};
pub use catalog::{ClinicCatalogFile, ClinicRecord};
pub use clinic_types::{ClinicId, DistanceKm, Fee, NonEmptyText, Rating, TextError};
pub use config::CoreConfig;
pub use directory::{ClinicCatalog, StaticCatalog};
pub use emergency::EmergencyCall;
pub use error::{ClinicError, ClinicResult};
pub use filter::{filter_clinics, FilterState};
pub use notification::{Notification, NotificationKind};
pub use service::DirectoryService;
pub use session::ViewSession;
pub use specialty::{catalog_specialties, specialty_options, SpecialtyOption};
