//! Box record type
//!
//! A [`BoxRecord`] is an axis-aligned rectangle with an id and a category
//! label. Records are immutable after construction.

use crate::building;
use crate::error::RecordError;
use serde::{Deserialize, Serialize};

/// Number of fields in a raw box row: `id, x1, y1, x2, y2, category`
pub const FIELD_COUNT: usize = 6;

/// Coordinate field names, in row order
pub const COORDINATE_FIELDS: [&str; 4] = ["x1", "y1", "x2", "y2"];

/// Rectangular box with corners `(x1, y1)`-`(x2, y2)`
///
/// # Invariants
/// - Coordinates are finite
/// - No ordering between `x1`/`x2` or `y1`/`y2` is assumed, so
///   [`area`](Self::area) is signed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBoxRecord")]
pub struct BoxRecord {
    id: String,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    category: String,
}

/// Unvalidated wire shape of [`BoxRecord`]
#[derive(Deserialize)]
struct RawBoxRecord {
    id: String,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    category: String,
}

impl TryFrom<RawBoxRecord> for BoxRecord {
    type Error = RecordError;

    fn try_from(raw: RawBoxRecord) -> Result<Self, Self::Error> {
        Self::new(raw.id, raw.x1, raw.y1, raw.x2, raw.y2, raw.category)
    }
}

impl BoxRecord {
    /// Create new box record
    ///
    /// # Errors
    /// `RecordError::InvalidCoordinate` if a coordinate is NaN or infinite
    pub fn new(
        id: impl Into<String>,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        category: impl Into<String>,
    ) -> Result<Self, RecordError> {
        for (name, value) in COORDINATE_FIELDS.iter().zip([x1, y1, x2, y2]) {
            if !value.is_finite() {
                return Err(RecordError::invalid_coordinate(*name, value.to_string()));
            }
        }
        Ok(Self {
            id: id.into(),
            x1,
            y1,
            x2,
            y2,
            category: category.into(),
        })
    }

    /// Build a record from raw text fields `[id, x1, y1, x2, y2, category]`
    ///
    /// Fields are trimmed before conversion.
    ///
    /// # Errors
    /// - `RecordError::FieldCount` if there are not exactly six fields
    /// - `RecordError::InvalidCoordinate` if a coordinate is not a finite number
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, RecordError> {
        if fields.len() != FIELD_COUNT {
            return Err(RecordError::FieldCount {
                expected: FIELD_COUNT,
                found: fields.len(),
            });
        }

        let mut coords = [0.0_f64; 4];
        for (slot, (name, raw)) in coords
            .iter_mut()
            .zip(COORDINATE_FIELDS.iter().zip(&fields[1..5]))
        {
            *slot = parse_coordinate(*name, raw.as_ref())?;
        }
        let [x1, y1, x2, y2] = coords;

        Self::new(
            fields[0].as_ref().trim(),
            x1,
            y1,
            x2,
            y2,
            fields[5].as_ref().trim(),
        )
    }

    /// Box identifier
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// First corner x
    #[inline]
    #[must_use]
    pub fn x1(&self) -> f64 {
        self.x1
    }

    /// First corner y
    #[inline]
    #[must_use]
    pub fn y1(&self) -> f64 {
        self.y1
    }

    /// Second corner x
    #[inline]
    #[must_use]
    pub fn x2(&self) -> f64 {
        self.x2
    }

    /// Second corner y
    #[inline]
    #[must_use]
    pub fn y2(&self) -> f64 {
        self.y2
    }

    /// Category label (e.g. `"Deur"` for doors)
    #[inline]
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Signed area `(x2 - x1) * (y2 - y1)`
    ///
    /// Negative when the corners are given in opposite orientation on one
    /// axis. The sign is never normalized.
    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        (self.x2 - self.x1) * (self.y2 - self.y1)
    }

    /// Building this box belongs to
    #[inline]
    #[must_use]
    pub fn building_id(&self) -> &str {
        building::building_id(&self.id)
    }
}

/// Parse a single coordinate, rejecting non-finite values
pub(crate) fn parse_coordinate(field: &'static str, raw: &str) -> Result<f64, RecordError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| RecordError::invalid_coordinate(field, raw))
}
