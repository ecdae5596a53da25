//! Mock appointment booking.
//!
//! Booking never creates a record. It only checks that a date and a time have been chosen
//! and reports the outcome, which callers turn into a notification.
//!
//! Selections can be kept once for every clinic card ([`SelectionScope::Shared`]) or per
//! clinic ([`SelectionScope::PerClinic`]).

use crate::constants::{BOOKING_DATE_FORMAT, BOOKING_TIME_FORMAT};
use crate::directory::ClinicCatalog;
use crate::ClinicError;
use chrono::{NaiveDate, NaiveTime};
use clinic_types::ClinicId;
use std::collections::HashMap;

/// Appointment date and time currently chosen by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingSelection {
    /// ISO date (`YYYY-MM-DD`).
    pub selected_date: Option<String>,
    /// 24-hour time (`HH:MM`).
    pub selected_time: Option<String>,
}

impl BookingSelection {
    pub fn new(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            selected_date: Some(date.into()),
            selected_time: Some(time.into()),
        }
    }

    /// Checks that both parts are present and well formed.
    pub fn validate(&self) -> Result<(NaiveDate, NaiveTime), BookingRejection> {
        let date = non_empty(&self.selected_date);
        let time = non_empty(&self.selected_time);

        let (date, time) = match (date, time) {
            (Some(date), Some(time)) => (date, time),
            (None, None) => return Err(BookingRejection::MissingDateAndTime),
            (None, Some(_)) => return Err(BookingRejection::MissingDate),
            (Some(_), None) => return Err(BookingRejection::MissingTime),
        };

        let date = NaiveDate::parse_from_str(date, BOOKING_DATE_FORMAT)
            .map_err(|_| BookingRejection::InvalidDate(date.to_owned()))?;
        let time = NaiveTime::parse_from_str(time, BOOKING_TIME_FORMAT)
            .map_err(|_| BookingRejection::InvalidTime(time.to_owned()))?;

        Ok((date, time))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Why a booking attempt was refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BookingRejection {
    #[error("Please select both date and time")]
    MissingDateAndTime,
    #[error("Please select a date")]
    MissingDate,
    #[error("Please select a time")]
    MissingTime,
    #[error("'{0}' is not a valid date (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("'{0}' is not a valid time (expected HH:MM)")]
    InvalidTime(String),
}

/// Result of a booking attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BookingOutcome {
    /// The selection was complete. Nothing is stored.
    Confirmed {
        clinic_id: ClinicId,
        clinic_name: String,
        date: NaiveDate,
        time: NaiveTime,
    },
    /// The selection was incomplete or malformed; all state is kept as it was.
    Rejected {
        clinic_id: ClinicId,
        reason: BookingRejection,
    },
    /// The clinic is not part of the catalog.
    NotApplicable { clinic_id: ClinicId },
}

impl BookingOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, BookingOutcome::Confirmed { .. })
    }

    pub fn clinic_id(&self) -> ClinicId {
        match self {
            BookingOutcome::Confirmed { clinic_id, .. }
            | BookingOutcome::Rejected { clinic_id, .. }
            | BookingOutcome::NotApplicable { clinic_id } => *clinic_id,
        }
    }
}

/// Attempts a mock booking of `clinic_id` with `selection`.
pub fn book(
    catalog: &dyn ClinicCatalog,
    clinic_id: ClinicId,
    selection: &BookingSelection,
) -> BookingOutcome {
    let Some(clinic) = catalog.find(clinic_id) else {
        tracing::warn!("booking requested for unknown clinic {}", clinic_id);
        return BookingOutcome::NotApplicable { clinic_id };
    };

    match selection.validate() {
        Ok((date, time)) => {
            tracing::info!(
                "mock booking confirmed for clinic {} on {} at {}",
                clinic_id,
                date,
                time.format(BOOKING_TIME_FORMAT)
            );
            BookingOutcome::Confirmed {
                clinic_id,
                clinic_name: clinic.name.to_string(),
                date,
                time,
            }
        }
        Err(reason) => {
            tracing::info!("booking for clinic {} rejected: {}", clinic_id, reason);
            BookingOutcome::Rejected { clinic_id, reason }
        }
    }
}

/// Whether one booking selection is shared by every clinic card or kept per clinic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionScope {
    /// One selection for all cards.
    Shared,
    /// An independent selection for each clinic.
    #[default]
    PerClinic,
}

impl SelectionScope {
    pub fn as_str(self) -> &'static str {
        match self {
            SelectionScope::Shared => "shared",
            SelectionScope::PerClinic => "per-clinic",
        }
    }
}

impl std::str::FromStr for SelectionScope {
    type Err = ClinicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shared" => Ok(SelectionScope::Shared),
            "per-clinic" | "per_clinic" => Ok(SelectionScope::PerClinic),
            other => Err(ClinicError::UnknownSelectionScope(other.to_owned())),
        }
    }
}

/// Booking selections owned by one view session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingSelections {
    scope: SelectionScope,
    shared: BookingSelection,
    per_clinic: HashMap<ClinicId, BookingSelection>,
}

impl BookingSelections {
    pub fn new(scope: SelectionScope) -> Self {
        Self {
            scope,
            shared: BookingSelection::default(),
            per_clinic: HashMap::new(),
        }
    }

    pub fn scope(&self) -> SelectionScope {
        self.scope
    }

    /// The selection that applies to `clinic_id`.
    pub fn get(&self, clinic_id: ClinicId) -> BookingSelection {
        match self.scope {
            SelectionScope::Shared => self.shared.clone(),
            SelectionScope::PerClinic => self
                .per_clinic
                .get(&clinic_id)
                .cloned()
                .unwrap_or_default(),
        }
    }

    fn entry(&mut self, clinic_id: ClinicId) -> &mut BookingSelection {
        match self.scope {
            SelectionScope::Shared => &mut self.shared,
            SelectionScope::PerClinic => self.per_clinic.entry(clinic_id).or_default(),
        }
    }

    /// Sets the date for `clinic_id`. Under the shared scope this changes every card.
    pub fn select_date(&mut self, clinic_id: ClinicId, date: Option<String>) {
        self.entry(clinic_id).selected_date = date;
    }

    /// Sets the time for `clinic_id`. Under the shared scope this changes every card.
    pub fn select_time(&mut self, clinic_id: ClinicId, time: Option<String>) {
        self.entry(clinic_id).selected_time = time;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::StaticCatalog;

    fn builtin() -> StaticCatalog {
        StaticCatalog::builtin().expect("builtin catalog parses")
    }

    #[test]
    fn complete_selection_confirms_without_touching_catalog() {
        let catalog = builtin();
        let before = catalog.list().into_owned();

        let outcome = book(
            &catalog,
            ClinicId::new(1),
            &BookingSelection::new("2024-02-21", "09:00"),
        );

        assert!(outcome.is_confirmed());
        match outcome {
            BookingOutcome::Confirmed {
                clinic_name,
                date,
                time,
                ..
            } => {
                assert_eq!(clinic_name, "City General Hospital");
                assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 21).expect("date"));
                assert_eq!(time, NaiveTime::from_hms_opt(9, 0, 0).expect("time"));
            }
            other => panic!("expected Confirmed, got {other:?}"),
        }
        assert_eq!(catalog.list().into_owned(), before);
    }

    #[test]
    fn empty_date_is_rejected_for_any_time() {
        let catalog = builtin();
        for time in [None, Some(String::new()), Some("09:00".to_string())] {
            let selection = BookingSelection {
                selected_date: Some(String::new()),
                selected_time: time,
            };
            let outcome = book(&catalog, ClinicId::new(2), &selection);
            assert!(!outcome.is_confirmed());
            assert!(matches!(outcome, BookingOutcome::Rejected { .. }));
        }
    }

    #[test]
    fn rejection_names_the_missing_part() {
        let date_only = BookingSelection {
            selected_date: Some("2024-02-21".into()),
            selected_time: None,
        };
        assert_eq!(date_only.validate(), Err(BookingRejection::MissingTime));

        let time_only = BookingSelection {
            selected_date: None,
            selected_time: Some("10:30".into()),
        };
        assert_eq!(time_only.validate(), Err(BookingRejection::MissingDate));

        assert_eq!(
            BookingSelection::default().validate(),
            Err(BookingRejection::MissingDateAndTime)
        );
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert_eq!(
            BookingSelection::new("21/02/2024", "09:00").validate(),
            Err(BookingRejection::InvalidDate("21/02/2024".into()))
        );
        assert_eq!(
            BookingSelection::new("2024-02-21", "25:00").validate(),
            Err(BookingRejection::InvalidTime("25:00".into()))
        );
    }

    #[test]
    fn unknown_clinic_is_not_applicable() {
        let outcome = book(
            &builtin(),
            ClinicId::new(42),
            &BookingSelection::new("2024-02-21", "09:00"),
        );
        assert_eq!(
            outcome,
            BookingOutcome::NotApplicable {
                clinic_id: ClinicId::new(42)
            }
        );
    }

    #[test]
    fn shared_scope_applies_one_selection_to_every_clinic() {
        let mut selections = BookingSelections::new(SelectionScope::Shared);
        selections.select_date(ClinicId::new(1), Some("2024-02-21".into()));
        selections.select_time(ClinicId::new(3), Some("09:00".into()));

        let expected = BookingSelection::new("2024-02-21", "09:00");
        assert_eq!(selections.get(ClinicId::new(1)), expected);
        assert_eq!(selections.get(ClinicId::new(5)), expected);
    }

    #[test]
    fn per_clinic_scope_keeps_selections_apart() {
        let mut selections = BookingSelections::new(SelectionScope::PerClinic);
        selections.select_date(ClinicId::new(1), Some("2024-02-21".into()));
        selections.select_time(ClinicId::new(3), Some("09:00".into()));

        assert_eq!(
            selections.get(ClinicId::new(1)).validate(),
            Err(BookingRejection::MissingTime)
        );
        assert_eq!(
            selections.get(ClinicId::new(3)).validate(),
            Err(BookingRejection::MissingDate)
        );
        assert_eq!(selections.get(ClinicId::new(2)), BookingSelection::default());
    }

    #[test]
    fn scope_parses_from_text() {
        assert_eq!("shared".parse::<SelectionScope>().ok(), Some(SelectionScope::Shared));
        assert_eq!(
            "PER-CLINIC".parse::<SelectionScope>().ok(),
            Some(SelectionScope::PerClinic)
        );
        assert!("global".parse::<SelectionScope>().is_err());
    }
}
