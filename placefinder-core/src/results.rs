//! Ordered search results exposed to a list presentation by index.

use crate::{Place, format_address};

/// Presentation row derived from a [`Place`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    /// Primary text: the place name, empty when the provider gave none.
    pub title: String,
    /// Secondary text: the formatted one-line address.
    pub detail: String,
}

impl ResultRow {
    /// Build the row shown for `place`.
    #[must_use]
    pub fn for_place(place: &Place) -> Self {
        Self {
            title: place.name.clone().unwrap_or_default(),
            detail: format_address(place),
        }
    }
}

/// The current search results, in provider order.
///
/// The list is only ever replaced wholesale; results from different
/// responses are never merged.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use placefinder_core::{Place, ResultList};
///
/// let mut results = ResultList::new();
/// results.replace(vec![Place::new(Coord { x: 0.0, y: 0.0 }).with_name("Pier")]);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results.row(0).map(|row| row.title), Some("Pier".to_owned()));
/// assert!(results.row(1).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultList {
    places: Vec<Place>,
}

impl ResultList {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { places: Vec::new() }
    }

    /// Replace the whole list with `places`.
    pub fn replace(&mut self, places: Vec<Place>) {
        self.places = places;
    }

    /// Remove every result.
    pub fn clear(&mut self) {
        self.places.clear();
    }

    /// Number of results.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.places.len()
    }

    /// Whether the list holds no results.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Result at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Place> {
        self.places.get(index)
    }

    /// Presentation row for the result at `index`, if any.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<ResultRow> {
        self.get(index).map(ResultRow::for_place)
    }

    /// Iterate over results in provider order.
    pub fn iter(&self) -> std::slice::Iter<'_, Place> {
        self.places.iter()
    }

    /// Results as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Place] {
        &self.places
    }
}

impl<'a> IntoIterator for &'a ResultList {
    type Item = &'a Place;
    type IntoIter = std::slice::Iter<'a, Place>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// List presentation that renders a [`ResultList`].
///
/// `reload` is the refresh signal: it fires every time the list changes.
pub trait ResultsView {
    /// Re-render every row from `results`.
    fn reload(&mut self, results: &ResultList);
}
