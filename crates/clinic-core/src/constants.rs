//! Constants used throughout the clinic core crate.

/// Upper bound of the price filter. Doubles as the "any price" default.
pub const DEFAULT_MAX_PRICE: f64 = 1000.0;

/// Upper bound of the distance filter, in kilometres. Doubles as the "any distance" default.
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 10.0;

/// Lowest selectable rating.
pub const DEFAULT_MIN_RATING: f64 = 0.0;

/// Emergency number dialled when no override is configured.
pub const DEFAULT_EMERGENCY_NUMBER: &str = "108";

/// Default listen address for the REST server.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Specialties offered by the selector grid, in display order.
pub const POPULAR_SPECIALTIES: [&str; 6] = [
    "Cardiology",
    "Neurology",
    "Orthopedics",
    "Pediatrics",
    "Oncology",
    "Dermatology",
];

/// Wire format of a booking date (`YYYY-MM-DD`).
pub const BOOKING_DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire format of a booking time (`HH:MM`).
pub const BOOKING_TIME_FORMAT: &str = "%H:%M";
