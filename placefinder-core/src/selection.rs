//! Pin a chosen place on the map.
//!
//! The map display owns the rendered annotations and the visible region;
//! [`SelectionHandler`] owns the single pinned-place slot and keeps the two
//! in step.

use geo::Coord;

use crate::{Place, ResultList, Viewport, locality};

/// Visual marker placed on the map for a selected place.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Annotation {
    /// Pin position.
    pub location: Coord<f64>,
    /// Callout title: the place name.
    pub title: Option<String>,
    /// Callout subtitle: city and region joined with `", "`.
    pub subtitle: String,
}

impl Annotation {
    /// Build the annotation that represents `place`.
    #[must_use]
    pub fn for_place(place: &Place) -> Self {
        Self {
            location: place.location,
            title: place.name.clone(),
            subtitle: locality(place, ", "),
        }
    }
}

/// Map rendering collaborator.
pub trait MapDisplay {
    /// Region currently shown.
    fn viewport(&self) -> Viewport;
    /// Show `viewport`.
    fn set_viewport(&mut self, viewport: Viewport);
    /// Remove every annotation.
    fn clear_annotations(&mut self);
    /// Add one annotation.
    fn add_annotation(&mut self, annotation: Annotation);
}

/// Owner of the single pinned place.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use placefinder_core::{Place, SelectionHandler};
/// use placefinder_core::test_support::RecordingMap;
///
/// let mut map = RecordingMap::default();
/// let mut selection = SelectionHandler::new();
/// selection.select(Place::new(Coord { x: 1.0, y: 2.0 }).with_name("Quay"), &mut map);
///
/// assert_eq!(map.annotations().len(), 1);
/// assert_eq!(selection.pinned().and_then(|p| p.name.as_deref()), Some("Quay"));
/// ```
#[derive(Debug, Default)]
pub struct SelectionHandler {
    pinned: Option<Place>,
}

impl SelectionHandler {
    /// Create a handler with nothing pinned.
    #[must_use]
    pub const fn new() -> Self {
        Self { pinned: None }
    }

    /// Place currently pinned, if any.
    #[must_use]
    pub const fn pinned(&self) -> Option<&Place> {
        self.pinned.as_ref()
    }

    /// Pin `place`, replacing any previous pin, and recentre the map on it.
    pub fn select(&mut self, place: Place, map: &mut dyn MapDisplay) -> &Place {
        map.clear_annotations();
        map.add_annotation(Annotation::for_place(&place));
        map.set_viewport(Viewport::focused_on(place.location));
        self.pinned.insert(place)
    }

    /// Pin the result at `index` of `results`.
    ///
    /// An index outside the list is ignored and leaves the current pin and
    /// the map untouched.
    pub fn select_row(
        &mut self,
        index: usize,
        results: &ResultList,
        map: &mut dyn MapDisplay,
    ) -> Option<&Place> {
        let Some(place) = results.get(index) else {
            log::debug!(
                "ignoring selection of row {index}; only {} results",
                results.len()
            );
            return None;
        };
        Some(self.select(place.clone(), map))
    }
}
