//! User-facing notifications derived from action outcomes.
//!
//! Core actions return outcome values; this module turns them into the message and kind a
//! front end shows (toast, banner, terminal line).

use crate::booking::BookingOutcome;
use crate::constants::BOOKING_TIME_FORMAT;
use crate::emergency::EmergencyCall;

/// Presentation class of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Info,
    Error,
    Success,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Error => "error",
            NotificationKind::Success => "success",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }
}

impl From<&BookingOutcome> for Notification {
    fn from(outcome: &BookingOutcome) -> Self {
        match outcome {
            BookingOutcome::Confirmed {
                clinic_name,
                date,
                time,
                ..
            } => Notification::success(format!(
                "Appointment booked at {clinic_name} for {date} at {}",
                time.format(BOOKING_TIME_FORMAT)
            )),
            BookingOutcome::Rejected { reason, .. } => Notification::error(reason.to_string()),
            BookingOutcome::NotApplicable { clinic_id } => {
                Notification::error(format!("Clinic {clinic_id} is not in the directory"))
            }
        }
    }
}

impl From<&EmergencyCall> for Notification {
    fn from(call: &EmergencyCall) -> Self {
        Notification::info(format!(
            "Calling emergency services ({})...",
            call.number()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::BookingRejection;
    use chrono::{NaiveDate, NaiveTime};
    use clinic_types::ClinicId;

    #[test]
    fn confirmed_booking_is_a_success() {
        let outcome = BookingOutcome::Confirmed {
            clinic_id: ClinicId::new(1),
            clinic_name: "City General Hospital".into(),
            date: NaiveDate::from_ymd_opt(2024, 2, 21).expect("date"),
            time: NaiveTime::from_hms_opt(9, 0, 0).expect("time"),
        };

        let notification = Notification::from(&outcome);
        assert_eq!(notification.kind, NotificationKind::Success);
        assert_eq!(
            notification.message,
            "Appointment booked at City General Hospital for 2024-02-21 at 09:00"
        );
    }

    #[test]
    fn rejected_booking_is_an_error_with_reason() {
        let outcome = BookingOutcome::Rejected {
            clinic_id: ClinicId::new(2),
            reason: BookingRejection::MissingDateAndTime,
        };

        let notification = Notification::from(&outcome);
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(notification.message, "Please select both date and time");
    }

    #[test]
    fn unknown_clinic_is_an_error() {
        let outcome = BookingOutcome::NotApplicable {
            clinic_id: ClinicId::new(9),
        };
        let notification = Notification::from(&outcome);
        assert_eq!(notification.kind, NotificationKind::Error);
        assert!(notification.message.contains('9'));
    }
}
