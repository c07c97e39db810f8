//! Nominatim search API response types.
//!
//! This module provides deserialisation types for the `/search` endpoint in
//! `jsonv2` format with `addressdetails=1`. A successful response is a JSON
//! array of results; a failed one is an object carrying an `error` member.
//!
//! See: <https://nominatim.org/release-docs/latest/api/Search/>

use std::num::ParseFloatError;

use geo::Coord;
use placefinder_core::Place;
use serde::Deserialize;
use thiserror::Error;

/// Reasons a search hit's coordinates cannot be used.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    /// The value is not a decimal number.
    #[error("{axis} {value:?} is not a decimal number: {source}")]
    Malformed {
        /// Coordinate name.
        axis: &'static str,
        /// Raw value from the response.
        value: String,
        /// Parse failure.
        #[source]
        source: ParseFloatError,
    },
    /// The value is NaN, infinite or outside the valid range.
    #[error("{axis} {value} is outside [-{limit}, {limit}]")]
    OutOfRange {
        /// Coordinate name.
        axis: &'static str,
        /// Parsed value.
        value: f64,
        /// Largest absolute value accepted.
        limit: f64,
    },
}

fn parse_coordinate(axis: &'static str, raw: &str, limit: f64) -> Result<f64, CoordinateError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|source| CoordinateError::Malformed {
            axis,
            value: raw.to_owned(),
            source,
        })?;
    if value.is_finite() && value.abs() <= limit {
        Ok(value)
    } else {
        Err(CoordinateError::OutOfRange { axis, value, limit })
    }
}

/// Body of a Nominatim search response.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SearchResponse {
    /// Matching places in relevance order.
    Results(Vec<SearchResult>),
    /// Error reported by the service.
    Failure {
        /// Error details.
        error: ErrorBody,
    },
}

/// Error member of a failed response.
///
/// Older servers report a bare message string; newer ones an object with a
/// numeric code.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ErrorBody {
    /// Structured error.
    Detailed {
        /// Numeric error code, usually mirroring the HTTP status.
        code: u16,
        /// Human-readable description.
        message: String,
    },
    /// Bare message.
    Message(String),
}

impl ErrorBody {
    /// Split into a code (empty when unknown) and a message.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        match self {
            Self::Detailed { code, message } => (code.to_string(), message),
            Self::Message(message) => (String::new(), message),
        }
    }
}

/// One search hit.
///
/// Coordinates arrive as decimal strings.
#[derive(Debug, Deserialize)]
pub struct SearchResult {
    /// Latitude in decimal degrees.
    pub lat: String,
    /// Longitude in decimal degrees.
    pub lon: String,
    /// Name of the matched object; empty for plain addresses.
    #[serde(default)]
    pub name: Option<String>,
    /// Full comma-separated address line.
    #[serde(default)]
    pub display_name: String,
    /// Structured address when `addressdetails=1` was requested.
    #[serde(default)]
    pub address: Option<Address>,
}

/// Structured address details.
#[derive(Debug, Default, Deserialize)]
pub struct Address {
    /// House number.
    pub house_number: Option<String>,
    /// Street name.
    pub road: Option<String>,
    /// City name.
    pub city: Option<String>,
    /// Town name, used when no city is given.
    pub town: Option<String>,
    /// Village name, used when no city or town is given.
    pub village: Option<String>,
    /// Hamlet name, the last locality fallback.
    pub hamlet: Option<String>,
    /// State or province.
    pub state: Option<String>,
}

impl Address {
    /// Most specific settlement name available.
    fn locality(&self) -> Option<&str> {
        [&self.city, &self.town, &self.village, &self.hamlet]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|name| !name.is_empty())
    }
}

impl SearchResult {
    /// Convert into a [`Place`].
    ///
    /// The name falls back to the first segment of `display_name` when the
    /// service gives none.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] when either coordinate is not a finite
    /// decimal number within ±90 (latitude) or ±180 (longitude).
    pub fn into_place(self) -> Result<Place, CoordinateError> {
        let location = Coord {
            x: parse_coordinate("longitude", &self.lon, 180.0)?,
            y: parse_coordinate("latitude", &self.lat, 90.0)?,
        };
        let name = self
            .name
            .filter(|name| !name.is_empty())
            .or_else(|| first_segment(&self.display_name));
        let address = self.address.unwrap_or_default();
        Ok(Place {
            name,
            location,
            city: address.locality().map(str::to_owned),
            street_number: address.house_number,
            street_name: address.road,
            region: address.state,
        })
    }
}

fn first_segment(display_name: &str) -> Option<String> {
    display_name
        .split(',')
        .next()
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
}
