//! One-line address formatting for search results.
//!
//! Absent and empty components are dropped before joining, so the output
//! never contains placeholder text or stray separators.

use crate::Place;

/// Format `place` as a single display line.
///
/// The street number and street name form the first part, the city and
/// administrative region the second; the two parts are joined with `", "`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use placefinder_core::{Place, format_address};
///
/// let place = Place::new(Coord { x: 0.0, y: 0.0 })
///     .with_street_name("Main St")
///     .with_city("Springfield")
///     .with_region("IL");
/// assert_eq!(format_address(&place), "Main St, Springfield IL");
/// ```
#[must_use]
pub fn format_address(place: &Place) -> String {
    let street = join_present(
        [place.street_number.as_deref(), place.street_name.as_deref()],
        " ",
    );
    let area = locality(place, " ");
    join_present([Some(street.as_str()), Some(area.as_str())], ", ")
}

/// Join the place's city and region with `separator`, skipping absent parts.
#[must_use]
pub fn locality(place: &Place, separator: &str) -> String {
    join_present([place.city.as_deref(), place.region.as_deref()], separator)
}

fn join_present<'a>(parts: impl IntoIterator<Item = Option<&'a str>>, separator: &str) -> String {
    parts
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}
