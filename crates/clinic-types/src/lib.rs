//! Validated primitives shared by every clinic directory crate.
//!
//! Values are checked once at construction so the rest of the workspace can rely on them:
//! a [`Rating`] is always within `0..=5`, a [`Fee`] or [`DistanceKm`] is never negative,
//! and a [`NonEmptyText`] always holds at least one non-whitespace character.

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// Errors that can occur when creating validated numeric types.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValueError {
    /// The value was NaN or infinite
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    /// The value fell outside the permitted range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
}

/// A string type that guarantees non-empty content.
///
/// The input is trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `Err(TextError::Empty)` if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// Catalog identifier of a clinic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ClinicId(u32);

impl ClinicId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ClinicId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ClinicId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(Self)
    }
}

/// Declares a finite `f64` newtype bounded to `[min, max]`.
macro_rules! bounded_decimal {
    ($(#[$meta:meta])* $name:ident, $field:literal, $min:expr, $max:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name(f64);

        impl $name {
            pub const MIN: f64 = $min;
            pub const MAX: f64 = $max;

            /// Validates and wraps `value`.
            ///
            /// # Errors
            ///
            /// Returns [`ValueError`] if `value` is not finite or lies outside the range.
            pub fn new(value: f64) -> Result<Self, ValueError> {
                if !value.is_finite() {
                    return Err(ValueError::NotFinite { field: $field });
                }
                if value < Self::MIN || value > Self::MAX {
                    return Err(ValueError::OutOfRange {
                        field: $field,
                        min: Self::MIN,
                        max: Self::MAX,
                        value,
                    });
                }
                Ok(Self(value))
            }

            pub fn value(self) -> f64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_f64(self.0)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = f64::deserialize(deserializer)?;
                $name::new(value).map_err(serde::de::Error::custom)
            }
        }
    };
}

bounded_decimal!(
    /// Patient rating of a clinic on a five-point scale.
    Rating,
    "rating",
    0.0,
    5.0
);

bounded_decimal!(
    /// Consultation fee charged by a clinic.
    Fee,
    "consultation fee",
    0.0,
    f64::MAX
);

bounded_decimal!(
    /// Distance from the user to a clinic, in kilometres.
    DistanceKm,
    "distance",
    0.0,
    f64::MAX
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_text_trims_and_rejects_blank() {
        let text = NonEmptyText::new("  Cardiology ").expect("valid text");
        assert_eq!(text.as_str(), "Cardiology");
        assert!(matches!(NonEmptyText::new("   "), Err(TextError::Empty)));
    }

    #[test]
    fn rating_accepts_bounds_and_rejects_outside() {
        assert_eq!(Rating::new(0.0).expect("zero").value(), 0.0);
        assert_eq!(Rating::new(5.0).expect("five").value(), 5.0);

        let err = Rating::new(5.1).expect_err("above five");
        assert!(matches!(err, ValueError::OutOfRange { field: "rating", .. }));
        assert!(Rating::new(-0.1).is_err());
        assert_eq!(
            Rating::new(f64::NAN),
            Err(ValueError::NotFinite { field: "rating" })
        );
    }

    #[test]
    fn fee_and_distance_reject_negative_values() {
        assert!(Fee::new(0.0).is_ok());
        assert!(Fee::new(-1.0).is_err());
        assert!(DistanceKm::new(12.5).is_ok());
        assert!(DistanceKm::new(-0.5).is_err());
        assert!(DistanceKm::new(f64::INFINITY).is_err());
    }

    #[test]
    fn deserialisation_applies_validation() {
        let rating: Rating = serde_json::from_str("4.7").expect("valid rating");
        assert_eq!(rating.value(), 4.7);

        let err = serde_json::from_str::<Rating>("7").expect_err("rating out of range");
        assert!(err.to_string().contains("rating must be between"));

        let err = serde_json::from_str::<NonEmptyText>("\"  \"").expect_err("blank text");
        assert!(err.to_string().contains("Text cannot be empty"));
    }

    #[test]
    fn clinic_id_parses_from_path_segments() {
        let id: ClinicId = " 42".parse().expect("numeric id");
        assert_eq!(id, ClinicId::new(42));
        assert_eq!(id.to_string(), "42");
        assert!("abc".parse::<ClinicId>().is_err());
    }
}
