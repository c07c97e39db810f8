//! Terminal stand-ins for the map, result list and location collaborators.

use geo::Coord;
use placefinder_core::{
    Annotation, LocationError, LocationEvent, LocationServices, MapDisplay, ResultList,
    ResultRow, ResultsView, Span, Viewport,
};

/// Region searched when no location is known.
pub(crate) const WORLD: Viewport = Viewport::new(Coord { x: 0.0, y: 0.0 }, Span::new(180.0, 360.0));

/// Map state kept in memory and printed once the command finishes.
#[derive(Debug, Clone)]
pub(crate) struct TerminalMap {
    viewport: Viewport,
    annotations: Vec<Annotation>,
}

impl Default for TerminalMap {
    fn default() -> Self {
        Self {
            viewport: WORLD,
            annotations: Vec::new(),
        }
    }
}

impl TerminalMap {
    pub(crate) fn annotation(&self) -> Option<&Annotation> {
        self.annotations.last()
    }
}

impl MapDisplay for TerminalMap {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        log::debug!(
            "map centred on {},{}",
            viewport.centre.y, viewport.centre.x
        );
        self.viewport = viewport;
    }

    fn clear_annotations(&mut self) {
        self.annotations.clear();
    }

    fn add_annotation(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }
}

/// Rows captured on every reload of the result list.
#[derive(Debug, Clone, Default)]
pub(crate) struct ListingView {
    rows: Vec<ResultRow>,
}

impl ListingView {
    pub(crate) fn rows(&self) -> &[ResultRow] {
        &self.rows
    }
}

impl ResultsView for ListingView {
    fn reload(&mut self, results: &ResultList) {
        self.rows = results.iter().map(ResultRow::for_place).collect();
    }
}

/// Location services answering with a configured position.
///
/// A terminal has no positioning hardware; the device position is whatever
/// the user passed on the command line, if anything.
#[derive(Debug, Clone, Default)]
pub(crate) struct DeviceLocation {
    position: Option<Coord<f64>>,
    requested: bool,
}

impl DeviceLocation {
    pub(crate) const fn new(position: Option<Coord<f64>>) -> Self {
        Self {
            position,
            requested: false,
        }
    }

    /// Answer an outstanding location request, if any.
    pub(crate) fn answer(&mut self) -> Option<LocationEvent> {
        if !std::mem::take(&mut self.requested) {
            return None;
        }
        Some(self.position.map_or_else(
            || {
                LocationEvent::Failed(LocationError::Unavailable(
                    "no --latitude/--longitude given".to_owned(),
                ))
            },
            |position| LocationEvent::Updated(vec![position]),
        ))
    }
}

impl LocationServices for DeviceLocation {
    fn request_when_in_use_authorization(&mut self) {
        log::debug!("location access is implicit on the command line");
    }

    fn request_location(&mut self) {
        self.requested = true;
    }
}
