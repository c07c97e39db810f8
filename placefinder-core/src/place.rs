//! Candidate places and their address components.

use geo::Coord;

/// A candidate place returned by a place-search provider.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. Address
/// components mirror the placemark fields a search provider reports; any of
/// them may be absent.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use placefinder_core::Place;
///
/// let place = Place::new(Coord { x: -89.65, y: 39.78 })
///     .with_name("Old State Capitol")
///     .with_street_name("Adams St")
///     .with_city("Springfield");
///
/// assert_eq!(place.name.as_deref(), Some("Old State Capitol"));
/// assert!(place.street_number.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Place {
    /// Display name of the place.
    pub name: Option<String>,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// House or building number.
    pub street_number: Option<String>,
    /// Street or thoroughfare name.
    pub street_name: Option<String>,
    /// City, town or other locality.
    pub city: Option<String>,
    /// State, province or other administrative region.
    pub region: Option<String>,
}

impl Place {
    /// Construct a `Place` at `location` with no name or address.
    #[must_use]
    pub const fn new(location: Coord<f64>) -> Self {
        Self {
            name: None,
            location,
            street_number: None,
            street_name: None,
            city: None,
            region: None,
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the house or building number.
    #[must_use]
    pub fn with_street_number(mut self, street_number: impl Into<String>) -> Self {
        self.street_number = Some(street_number.into());
        self
    }

    /// Set the street name.
    #[must_use]
    pub fn with_street_name(mut self, street_name: impl Into<String>) -> Self {
        self.street_name = Some(street_name.into());
        self
    }

    /// Set the city.
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Set the administrative region.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_place_has_no_address() {
        let place = Place::new(Coord { x: 1.0, y: 2.0 });
        assert_eq!(place.location, Coord { x: 1.0, y: 2.0 });
        assert!(place.name.is_none());
        assert!(place.city.is_none());
        assert!(place.region.is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn place_round_trips_through_json() {
        let place = Place::new(Coord { x: 1.0, y: 2.0 })
            .with_name("Depot")
            .with_region("IL");
        let json = serde_json::to_string(&place).expect("serialise place");
        let decoded: Place = serde_json::from_str(&json).expect("deserialise place");
        assert_eq!(decoded, place);
    }
}
