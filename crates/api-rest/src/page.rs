//! Server-rendered directory page.
//!
//! The page is a single document with three anchored sections (`specialties`, `hospitals`,
//! `emergency`). Filter state travels in the query string, so every specialty tag is a plain
//! link to the toggled state and every form re-posts the current filter.

use crate::state::AppState;
use api_shared::ClinicQuery;
use axum::{
    extract::{Form, Path, Query, State},
    response::Html,
};
use clinic_core::{
    specialty_options, BookingSelection, BookingSelections, ClinicId, ClinicRecord, EmergencyCall,
    FilterState, Notification, SelectionScope,
};
use serde::Deserialize;

/// Time slots offered by the booking selector on each card.
const TIME_SLOTS: [&str; 6] = ["09:00", "10:00", "11:00", "14:00", "15:00", "16:00"];

/// Booking form posted from a clinic card. Carries the page filter so it can be re-rendered.
#[derive(Debug, Default, Deserialize)]
pub struct BookingForm {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    pub q: Option<String>,
    #[serde(default, deserialize_with = "api_shared::blank_as_none")]
    pub min_rating: Option<f64>,
    #[serde(default, deserialize_with = "api_shared::blank_as_none")]
    pub max_price: Option<f64>,
    #[serde(default, deserialize_with = "api_shared::blank_as_none")]
    pub max_distance: Option<f64>,
    pub specialty: Option<String>,
}

impl BookingForm {
    fn filter(&self) -> FilterState {
        FilterState::from(ClinicQuery {
            q: self.q.clone(),
            min_rating: self.min_rating,
            max_price: self.max_price,
            max_distance: self.max_distance,
            specialty: self.specialty.clone(),
        })
    }

    /// The posted date and time, held under the configured selection scope.
    fn selections(&self, clinic_id: ClinicId, scope: SelectionScope) -> BookingSelections {
        let mut selections = BookingSelections::new(scope);
        selections.select_date(clinic_id, Some(self.date.clone()).filter(|d| !d.is_empty()));
        selections.select_time(clinic_id, Some(self.time.clone()).filter(|t| !t.is_empty()));
        selections
    }
}

/// `GET /` - the directory page for the filter in the query string.
#[axum::debug_handler]
pub async fn index(State(state): State<AppState>, Query(query): Query<ClinicQuery>) -> Html<String> {
    let filter = FilterState::from(query);
    Html(render_page(&state, &filter, None, None, None))
}

/// `POST /book/{id}` - mock booking from a clinic card.
#[axum::debug_handler]
pub async fn book(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Form(form): Form<BookingForm>,
) -> Html<String> {
    let clinic_id = ClinicId::new(id);
    let filter = form.filter();
    let selections = form.selections(clinic_id, state.directory.config().selection_scope());
    let outcome = state.directory.book(clinic_id, &selections.get(clinic_id));
    let notification = Notification::from(&outcome);
    Html(render_page(
        &state,
        &filter,
        Some(&selections),
        Some(&notification),
        None,
    ))
}

/// `POST /emergency-call` - shows the call notification and hands the `tel:` URI to the browser.
#[axum::debug_handler]
pub async fn emergency_call(
    State(state): State<AppState>,
    Query(query): Query<ClinicQuery>,
) -> Html<String> {
    let filter = FilterState::from(query);
    let call = state.directory.emergency_call();
    let notification = call.notification();
    Html(render_page(&state, &filter, None, Some(&notification), Some(&call)))
}

/// Renders the whole directory page.
///
/// `selections` pre-fills the booking controls of each card; without it every card starts empty.
pub fn render_page(
    state: &AppState,
    filter: &FilterState,
    selections: Option<&BookingSelections>,
    notification: Option<&Notification>,
    call: Option<&EmergencyCall>,
) -> String {
    let clinics = state.directory.search(filter);
    let emergency_number = state.directory.config().emergency_number().to_string();

    let mut output = String::with_capacity(16 * 1024);
    output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    output.push_str("<meta charset=\"utf-8\">\n");
    output.push_str("<title>Find and Book Hospital Appointments</title>\n");
    if let Some(call) = call {
        output.push_str(&format!(
            "<meta http-equiv=\"refresh\" content=\"0;url={}\">\n",
            escape(&call.tel_uri())
        ));
    }
    output.push_str("</head>\n<body>\n");

    output.push_str(
        "<nav>\n<a href=\"#specialties\">Specialties</a>\n\
         <a href=\"#hospitals\">Hospitals</a>\n\
         <a href=\"#emergency\">Emergency</a>\n</nav>\n",
    );

    if let Some(notification) = notification {
        output.push_str(&format!(
            "<div class=\"notification notification-{}\" role=\"status\">{}</div>\n",
            notification.kind.as_str(),
            escape(&notification.message)
        ));
    }

    render_hero(&mut output, filter);
    render_specialties(&mut output, filter);
    render_hospitals(&mut output, filter, selections, &clinics);
    render_emergency(&mut output, filter, &emergency_number);

    output.push_str("</body>\n</html>\n");
    output
}

fn render_hero(output: &mut String, filter: &FilterState) {
    output.push_str("<section id=\"search\" class=\"hero\">\n");
    output.push_str("<h1>Find and Book Hospital Appointments</h1>\n");
    output.push_str("<p>Quick and easy booking for the care you need</p>\n");
    output.push_str("<form method=\"get\" action=\"/\">\n");
    output.push_str(&format!(
        "<input type=\"text\" name=\"q\" placeholder=\"Search hospitals, specialties, or doctors...\" value=\"{}\">\n",
        escape(&filter.search_text)
    ));
    output.push_str(&format!(
        "<label>Minimum rating <input type=\"number\" name=\"min_rating\" min=\"0\" max=\"5\" step=\"0.1\" value=\"{}\"></label>\n",
        filter.min_rating
    ));
    output.push_str(&format!(
        "<label>Max price <input type=\"range\" name=\"max_price\" min=\"0\" max=\"1000\" step=\"50\" value=\"{}\"></label>\n",
        filter.max_price
    ));
    output.push_str(&format!(
        "<label>Max distance (km) <input type=\"range\" name=\"max_distance\" min=\"0\" max=\"10\" step=\"0.5\" value=\"{}\"></label>\n",
        filter.max_distance_km
    ));
    if let Some(specialty) = &filter.selected_specialty {
        output.push_str(&format!(
            "<input type=\"hidden\" name=\"specialty\" value=\"{}\">\n",
            escape(specialty)
        ));
    }
    output.push_str("<button type=\"submit\">Search</button>\n</form>\n</section>\n");
}

fn render_specialties(output: &mut String, filter: &FilterState) {
    output.push_str("<section id=\"specialties\">\n<h2>Popular Specialties</h2>\n");
    output.push_str("<div class=\"specialty-grid\">\n");
    for option in specialty_options(filter) {
        let href = format!("/?{}#hospitals", query_string(&filter.with_toggled_specialty(&option.name)));
        let class = if option.selected {
            "specialty selected"
        } else {
            "specialty"
        };
        output.push_str(&format!(
            "<a class=\"{class}\" href=\"{}\" aria-pressed=\"{}\">{}</a>\n",
            escape(&href),
            option.selected,
            escape(&option.name)
        ));
    }
    output.push_str("</div>\n</section>\n");
}

fn render_hospitals(
    output: &mut String,
    filter: &FilterState,
    selections: Option<&BookingSelections>,
    clinics: &[ClinicRecord],
) {
    output.push_str("<section id=\"hospitals\">\n<h2>Featured Hospitals</h2>\n");
    if clinics.is_empty() {
        output.push_str("<p class=\"no-results\">No clinics match your filters.</p>\n");
    }
    for clinic in clinics {
        let selection = selections.map(|s| s.get(clinic.id)).unwrap_or_default();
        render_card(output, filter, &selection, clinic);
    }
    output.push_str("</section>\n");
}

fn render_card(
    output: &mut String,
    filter: &FilterState,
    selection: &BookingSelection,
    clinic: &ClinicRecord,
) {
    let name = escape(clinic.name.as_str());
    let specialties: Vec<&str> = clinic.specialties.iter().map(|s| s.as_str()).collect();

    output.push_str(&format!(
        "<article class=\"clinic-card\" data-clinic-id=\"{}\">\n",
        clinic.id
    ));
    output.push_str(&format!(
        "<img src=\"{}\" alt=\"{name}\">\n",
        escape(&clinic.image_url)
    ));
    output.push_str(&format!("<h3>{name}</h3>\n"));
    output.push_str(&format!(
        "<p class=\"location\">{}</p>\n",
        escape(clinic.location.as_str())
    ));
    output.push_str(&format!(
        "<p class=\"stats\">Rating {} &middot; Fee {} &middot; {} km away</p>\n",
        clinic.rating, clinic.consultation_fee, clinic.distance_km
    ));
    if clinic.offers_medicines == Some(true) {
        output.push_str("<p class=\"medicines\">Medicines available</p>\n");
    }
    output.push_str("<p class=\"availability\">Next Available: Today</p>\n");
    output.push_str(&format!(
        "<p class=\"specialties\">{}</p>\n",
        escape(&specialties.join(" \u{2022} "))
    ));

    output.push_str(&format!(
        "<form method=\"post\" action=\"/book/{}\">\n",
        clinic.id
    ));
    let date = selection.selected_date.as_deref().unwrap_or_default();
    let time = selection.selected_time.as_deref().unwrap_or_default();
    output.push_str(&format!(
        "<input type=\"date\" name=\"date\" value=\"{}\">\n<select name=\"time\">\n",
        escape(date)
    ));
    output.push_str(&format!(
        "<option value=\"\"{}>Select time</option>\n",
        selected_attr(time.is_empty())
    ));
    for slot in TIME_SLOTS {
        output.push_str(&format!(
            "<option value=\"{slot}\"{}>{slot}</option>\n",
            selected_attr(slot == time)
        ));
    }
    // Keep a posted time that is not one of the offered slots.
    if !time.is_empty() && !TIME_SLOTS.contains(&time) {
        let time = escape(time);
        output.push_str(&format!("<option value=\"{time}\" selected>{time}</option>\n"));
    }
    output.push_str("</select>\n");
    render_filter_fields(output, filter);
    output.push_str("<button type=\"submit\">Book Appointment</button>\n</form>\n</article>\n");
}

fn render_emergency(output: &mut String, filter: &FilterState, number: &str) {
    let number = escape(number);
    output.push_str("<section id=\"emergency\">\n<h2>Need Immediate Care?</h2>\n");
    output.push_str(
        "<p>Our dedicated team is here to help you find the right care at the right time.</p>\n",
    );
    output.push_str(&format!(
        "<form method=\"post\" action=\"/emergency-call?{}\">\n",
        escape(&query_string(filter))
    ));
    output.push_str(&format!(
        "<button type=\"submit\">Call Emergency ({number})</button>\n</form>\n"
    ));
    output.push_str(&format!(
        "<a class=\"emergency-link\" href=\"tel:{number}\">Dial {number}</a>\n</section>\n"
    ));
}

/// Hidden inputs that carry the current filter through a form post.
fn render_filter_fields(output: &mut String, filter: &FilterState) {
    output.push_str(&format!(
        "<input type=\"hidden\" name=\"q\" value=\"{}\">\n",
        escape(&filter.search_text)
    ));
    output.push_str(&format!(
        "<input type=\"hidden\" name=\"min_rating\" value=\"{}\">\n",
        filter.min_rating
    ));
    output.push_str(&format!(
        "<input type=\"hidden\" name=\"max_price\" value=\"{}\">\n",
        filter.max_price
    ));
    output.push_str(&format!(
        "<input type=\"hidden\" name=\"max_distance\" value=\"{}\">\n",
        filter.max_distance_km
    ));
    if let Some(specialty) = &filter.selected_specialty {
        output.push_str(&format!(
            "<input type=\"hidden\" name=\"specialty\" value=\"{}\">\n",
            escape(specialty)
        ));
    }
}

fn selected_attr(selected: bool) -> &'static str {
    if selected {
        " selected"
    } else {
        ""
    }
}

fn query_string(filter: &FilterState) -> String {
    serde_urlencoded::to_string(ClinicQuery::from(filter)).unwrap_or_else(|e| {
        tracing::error!("Failed to encode filter {:?}: {:?}", filter, e);
        String::new()
    })
}

/// Escapes text for use in HTML content and double-quoted attributes.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
