//! Geographic primitives shared by the ledger and the map projection.

use std::fmt;

use bitcode::{Decode, Encode};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::ledger::ValidationError;

// =============================================================================
// Coordinate
// =============================================================================

/// A WGS84 position in decimal degrees.
///
/// Deserialization goes through [`Coordinate::new`], so out-of-range input
/// is rejected there too.
#[derive(Debug, Clone, Copy, PartialEq, Encode, Decode, Serialize, Deserialize)]
#[serde(try_from = "LatLng")]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Unchecked wire shape of a [`Coordinate`].
#[derive(Deserialize)]
struct LatLng {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<LatLng> for Coordinate {
    type Error = ValidationError;

    fn try_from(raw: LatLng) -> Result<Self, Self::Error> {
        Coordinate::new(raw.latitude, raw.longitude)
    }
}

impl Coordinate {
    /// Build a coordinate, rejecting non-finite values and anything outside
    /// latitude [-90, 90] / longitude [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        if !Self::in_range(latitude, longitude) {
            return Err(ValidationError::CoordinateOutOfRange {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Returns true if the pair is a plottable WGS84 position.
    pub fn in_range(latitude: f64, longitude: f64) -> bool {
        latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude)
    }

    /// Const constructor for configuration values known to be in range.
    pub(crate) const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

// =============================================================================
// Bounding Box
// =============================================================================

/// Axis-aligned latitude/longitude box.
#[derive(Debug, Clone, Copy, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl BoundingBox {
    /// Degenerate box around a single point.
    pub fn around(point: Coordinate) -> Self {
        Self {
            min_latitude: point.latitude,
            max_latitude: point.latitude,
            min_longitude: point.longitude,
            max_longitude: point.longitude,
        }
    }

    /// Smallest box containing every point, or `None` for an empty input.
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::around(first), |mut bounds, p| {
            bounds.extend(p);
            bounds
        }))
    }

    /// Grow the box so that it contains `point`.
    pub fn extend(&mut self, point: Coordinate) {
        self.min_latitude = self.min_latitude.min(point.latitude);
        self.max_latitude = self.max_latitude.max(point.latitude);
        self.min_longitude = self.min_longitude.min(point.longitude);
        self.max_longitude = self.max_longitude.max(point.longitude);
    }

    pub fn contains(&self, point: Coordinate) -> bool {
        (self.min_latitude..=self.max_latitude).contains(&point.latitude)
            && (self.min_longitude..=self.max_longitude).contains(&point.longitude)
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new_unchecked(
            (self.min_latitude + self.max_latitude) / 2.0,
            (self.min_longitude + self.max_longitude) / 2.0,
        )
    }
}

// =============================================================================
// Entry Date
// =============================================================================

/// Calendar day stored as days since 0001-01-01 (CE) so it encodes as a
/// plain integer in snapshots.
///
/// Serializes as `YYYY-MM-DD` text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct EntryDate(i32);

impl EntryDate {
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date.num_days_from_ce())
    }

    /// `None` for an invalid calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::from_naive)
    }

    pub fn to_naive(self) -> Option<NaiveDate> {
        NaiveDate::from_num_days_from_ce_opt(self.0)
    }

    /// Today in the local time zone.
    pub fn today() -> Self {
        Self::from_naive(chrono::Local::now().date_naive())
    }
}

impl From<NaiveDate> for EntryDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_naive(date)
    }
}

impl TryFrom<String> for EntryDate {
    type Error = chrono::ParseError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map(Self::from_naive)
    }
}

impl From<EntryDate> for String {
    fn from(date: EntryDate) -> Self {
        date.to_string()
    }
}

impl fmt::Display for EntryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_naive() {
            Some(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            None => write!(f, "day {}", self.0),
        }
    }
}
