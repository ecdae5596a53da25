//! Request and response types of the clinic directory API.

use clinic_core::{
    BookingOutcome, ClinicRecord, EmergencyCall, FilterState, Notification, ViewSession,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Clinic {
    pub id: u32,
    pub name: String,
    pub location: String,
    pub specialties: Vec<String>,
    pub rating: f64,
    pub consultation_fee: f64,
    pub distance_km: f64,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offers_medicines: Option<bool>,
}

impl From<&ClinicRecord> for Clinic {
    fn from(record: &ClinicRecord) -> Self {
        Self {
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
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ListClinicsRes {
    pub clinics: Vec<Clinic>,
}

/// Filter criteria as query parameters. Missing or blank values fall back to the defaults.
#[derive(Clone, Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClinicQuery {
    /// Free-text search over names and specialties
    pub q: Option<String>,
    /// Minimum rating (0-5)
    #[serde(default, deserialize_with = "blank_as_none")]
    pub min_rating: Option<f64>,
    /// Maximum consultation fee
    #[serde(default, deserialize_with = "blank_as_none")]
    pub max_price: Option<f64>,
    /// Maximum distance in kilometres
    #[serde(default, deserialize_with = "blank_as_none")]
    pub max_distance: Option<f64>,
    /// Exact specialty tag
    pub specialty: Option<String>,
}

/// Deserializes an optional number where an empty form value means "not set".
///
/// Browsers submit a cleared number input as `name=`, which must fall back to the default
/// filter value rather than fail the request.
pub fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

impl From<ClinicQuery> for FilterState {
    fn from(query: ClinicQuery) -> Self {
        let defaults = FilterState::default();
        FilterState {
            search_text: query.q.unwrap_or_default(),
            min_rating: query.min_rating.unwrap_or(defaults.min_rating),
            max_price: query.max_price.unwrap_or(defaults.max_price),
            max_distance_km: query.max_distance.unwrap_or(defaults.max_distance_km),
            selected_specialty: query.specialty.filter(|s| !s.is_empty()),
        }
    }
}

impl From<&FilterState> for ClinicQuery {
    fn from(filter: &FilterState) -> Self {
        Self {
            q: Some(filter.search_text.clone()).filter(|q| !q.is_empty()),
            min_rating: Some(filter.min_rating),
            max_price: Some(filter.max_price),
            max_distance: Some(filter.max_distance_km),
            specialty: filter.selected_specialty.clone(),
        }
    }
}

/// Filter state carried in request and response bodies.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(default)]
pub struct Filter {
    pub search_text: String,
    pub min_rating: f64,
    pub max_price: f64,
    pub max_distance_km: f64,
    pub selected_specialty: Option<String>,
}

impl Default for Filter {
    fn default() -> Self {
        Self::from(&FilterState::default())
    }
}

impl From<&FilterState> for Filter {
    fn from(filter: &FilterState) -> Self {
        Self {
            search_text: filter.search_text.clone(),
            min_rating: filter.min_rating,
            max_price: filter.max_price,
            max_distance_km: filter.max_distance_km,
            selected_specialty: filter.selected_specialty.clone(),
        }
    }
}

impl From<Filter> for FilterState {
    fn from(filter: Filter) -> Self {
        FilterState {
            search_text: filter.search_text,
            min_rating: filter.min_rating,
            max_price: filter.max_price,
            max_distance_km: filter.max_distance_km,
            selected_specialty: filter.selected_specialty.filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SpecialtiesRes {
    /// Tags offered by the selector grid
    pub popular: Vec<String>,
    /// Distinct specialties across the catalog
    pub catalog: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct NotificationRes {
    /// One of `info`, `error`, `success`
    pub kind: String,
    pub message: String,
}

impl From<Notification> for NotificationRes {
    fn from(notification: Notification) -> Self {
        Self {
            kind: notification.kind.as_str().to_string(),
            message: notification.message,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct BookingReq {
    /// Appointment date, `YYYY-MM-DD`
    pub date: Option<String>,
    /// Appointment time, `HH:MM`
    pub time: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingRes {
    /// One of `confirmed`, `rejected`, `not_applicable`
    pub outcome: String,
    pub clinic_id: u32,
    pub notification: NotificationRes,
}

impl From<&BookingOutcome> for BookingRes {
    fn from(outcome: &BookingOutcome) -> Self {
        let label = match outcome {
            BookingOutcome::Confirmed { .. } => "confirmed",
            BookingOutcome::Rejected { .. } => "rejected",
            BookingOutcome::NotApplicable { .. } => "not_applicable",
        };
        Self {
            outcome: label.to_string(),
            clinic_id: outcome.clinic_id().get(),
            notification: Notification::from(outcome).into(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct EmergencyRes {
    /// Telephone URI the client should navigate to
    pub tel_uri: String,
    pub notification: NotificationRes,
}

impl From<&EmergencyCall> for EmergencyRes {
    fn from(call: &EmergencyCall) -> Self {
        Self {
            tel_uri: call.tel_uri(),
            notification: call.notification().into(),
        }
    }
}

/// Update of a session's booking selection. Absent fields are left unchanged; an empty
/// string clears the field.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct SelectionReq {
    /// Clinic card the selection belongs to; required for per-clinic sessions
    pub clinic_id: Option<u32>,
    pub date: Option<String>,
    pub time: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SessionRes {
    pub session_id: String,
    /// `shared` or `per-clinic`
    pub selection_scope: String,
    pub filter: Filter,
    pub clinics: Vec<Clinic>,
}

impl SessionRes {
    pub fn new(session_id: String, session: &ViewSession, clinics: &[ClinicRecord]) -> Self {
        Self {
            session_id,
            selection_scope: session.selections().scope().as_str().to_string(),
            filter: Filter::from(session.filter()),
            clinics: clinics.iter().map(Clinic::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_defaults_match_filter_defaults() {
        let filter = FilterState::from(ClinicQuery::default());
        assert_eq!(filter, FilterState::default());
    }

    #[test]
    fn empty_specialty_query_means_no_selection() {
        let filter = FilterState::from(ClinicQuery {
            specialty: Some(String::new()),
            ..ClinicQuery::default()
        });
        assert!(filter.selected_specialty.is_none());
    }

    #[test]
    fn blank_numeric_query_values_fall_back_to_defaults() {
        let query: ClinicQuery =
            serde_urlencoded::from_str("q=&min_rating=&max_price=&max_distance=")
                .expect("blank values deserialise");
        assert_eq!(query.min_rating, None);
        assert_eq!(query.max_price, None);

        let filter = FilterState::from(query);
        assert_eq!(filter, FilterState::default());
    }

    #[test]
    fn numeric_query_values_are_parsed() {
        let query: ClinicQuery = serde_urlencoded::from_str("min_rating=4.6&max_distance=+5")
            .expect("numbers deserialise");
        assert_eq!(query.min_rating, Some(4.6));
        assert_eq!(query.max_distance, Some(5.0));
        assert_eq!(query.max_price, None);
    }

    #[test]
    fn non_numeric_query_value_is_rejected() {
        let err = serde_urlencoded::from_str::<ClinicQuery>("max_price=cheap")
            .expect_err("text is not a price");
        assert!(err.to_string().contains("float"), "unexpected error: {err}");
    }

    #[test]
    fn partial_filter_body_uses_defaults() {
        let filter: Filter =
            serde_json::from_str(r#"{"min_rating": 4.6}"#).expect("deserialise filter");
        let state = FilterState::from(filter);

        assert_eq!(state.min_rating, 4.6);
        assert_eq!(state.max_price, 1000.0);
        assert_eq!(state.max_distance_km, 10.0);
        assert!(state.search_text.is_empty());
    }

    #[test]
    fn rejected_booking_serialises_with_error_notification() {
        let outcome = BookingOutcome::Rejected {
            clinic_id: clinic_core::ClinicId::new(3),
            reason: clinic_core::BookingRejection::MissingDate,
        };
        let res = BookingRes::from(&outcome);

        assert_eq!(res.outcome, "rejected");
        assert_eq!(res.clinic_id, 3);
        assert_eq!(res.notification.kind, "error");
    }
}
