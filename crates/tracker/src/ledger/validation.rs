// ---------------------------------------------------------------------------
// ValidationError: rejected submissions at the ledger boundary
// ---------------------------------------------------------------------------

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

/// Submission field that can be reported as missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Category,
    LocationLabel,
    Title,
    Coordinate,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Category => "category",
            Field::LocationLabel => "location label",
            Field::Title => "title",
            Field::Coordinate => "coordinate",
        }
    }
}

/// Errors raised when a waste entry or hotspot report cannot be accepted.
///
/// A submission that fails validation never reaches the progression engine,
/// so no points are awarded for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationError {
    /// A required field was absent or blank.
    MissingField(Field),
    /// The waste category label is not one of the known categories.
    UnknownCategory(String),
    /// Latitude outside [-90, 90], longitude outside [-180, 180], or non-finite.
    CoordinateOutOfRange { latitude: f64, longitude: f64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField(field) => {
                write!(f, "Missing required field: {}", field.name())
            }
            ValidationError::UnknownCategory(label) => {
                write!(f, "Unknown waste category: {label:?}")
            }
            ValidationError::CoordinateOutOfRange {
                latitude,
                longitude,
            } => write!(
                f,
                "Coordinate out of range: ({latitude}, {longitude}) must be within [-90, 90] x [-180, 180]"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Reject a blank (empty or whitespace-only) required text field.
pub(crate) fn require_text(value: &str, field: Field) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// Latitude and longitude must be supplied together.
pub(crate) fn optional_coordinate(
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<Option<Coordinate>, ValidationError> {
    match (latitude, longitude) {
        (None, None) => Ok(None),
        (Some(lat), Some(lng)) => Coordinate::new(lat, lng).map(Some),
        _ => Err(ValidationError::MissingField(Field::Coordinate)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display_missing_field() {
        let err = ValidationError::MissingField(Field::LocationLabel);
        let msg = format!("{err}");
        assert!(msg.contains("location label"), "got: {msg}");
    }

    #[test]
    fn test_validation_error_display_range() {
        let err = ValidationError::CoordinateOutOfRange {
            latitude: 91.0,
            longitude: 10.0,
        };
        let msg = format!("{err}");
        assert!(msg.contains("91"), "got: {msg}");
        assert!(msg.contains("[-90, 90]"), "got: {msg}");
    }

    #[test]
    fn test_require_text_trims_and_rejects_blank() {
        assert_eq!(
            require_text("  Annapurna Circuit ", Field::LocationLabel).unwrap(),
            "Annapurna Circuit"
        );
        assert_eq!(
            require_text("   ", Field::Title),
            Err(ValidationError::MissingField(Field::Title))
        );
    }
}
