//! Visible map regions.
//!
//! A [`Viewport`] is a centre coordinate plus a [`Span`] of latitude and
//! longitude deltas. Recentring the map after a location fix or a selection
//! always uses [`Span::FOCUS`].

use geo::{Coord, Rect};

/// Latitude and longitude extent of a viewport, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// North-south extent.
    pub latitude_delta: f64,
    /// East-west extent.
    pub longitude_delta: f64,
}

impl Span {
    /// Span used whenever the map is recentred on a single coordinate.
    pub const FOCUS: Self = Self::new(0.05, 0.05);

    /// Construct a span from latitude and longitude deltas.
    #[must_use]
    pub const fn new(latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude_delta,
            longitude_delta,
        }
    }
}

/// Map region described by a centre coordinate and a span.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use placefinder_core::{Span, Viewport};
///
/// let viewport = Viewport::focused_on(Coord { x: -0.12, y: 51.5 });
/// assert_eq!(viewport.span, Span::FOCUS);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Centre of the region (`x = longitude`, `y = latitude`).
    pub centre: Coord<f64>,
    /// Extent of the region.
    pub span: Span,
}

impl Viewport {
    /// Construct a viewport from a centre and a span.
    #[must_use]
    pub const fn new(centre: Coord<f64>, span: Span) -> Self {
        Self { centre, span }
    }

    /// Construct a viewport centred on `centre` with [`Span::FOCUS`].
    #[must_use]
    pub const fn focused_on(centre: Coord<f64>) -> Self {
        Self::new(centre, Span::FOCUS)
    }

    /// Bounding rectangle covered by the viewport.
    ///
    /// Latitudes are clamped to `[-90, 90]` and longitudes to `[-180, 180]`,
    /// so a viewport straddling the antimeridian is cut at it rather than
    /// wrapped.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "viewport bounds are derived from half-spans around the centre"
    )]
    pub fn bounds(&self) -> Rect<f64> {
        let half_lat = self.span.latitude_delta.abs() / 2.0;
        let half_lon = self.span.longitude_delta.abs() / 2.0;
        let south_west = Coord {
            x: (self.centre.x - half_lon).clamp(-180.0, 180.0),
            y: (self.centre.y - half_lat).clamp(-90.0, 90.0),
        };
        let north_east = Coord {
            x: (self.centre.x + half_lon).clamp(-180.0, 180.0),
            y: (self.centre.y + half_lat).clamp(-90.0, 90.0),
        };
        Rect::new(south_west, north_east)
    }
}
