//! Recording collaborators and canned providers used by unit and behaviour
//! tests.
//!
//! Each double records the calls it receives so tests can assert on the
//! exact sequence the pipeline produced.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use geo::Coord;

use crate::{
    Annotation, LocationServices, MapDisplay, NavigationRequest, Navigator, Place,
    PlaceSearchProvider, ResultList, ResultsView, SearchError, SearchQuery, Viewport,
};

/// Call received by a [`RecordingMap`].
#[derive(Debug, Clone, PartialEq)]
pub enum MapCall {
    /// `set_viewport` was called.
    SetViewport(Viewport),
    /// `clear_annotations` was called.
    ClearAnnotations,
    /// `add_annotation` was called.
    AddAnnotation(Annotation),
}

/// In-memory [`MapDisplay`] that records every call.
#[derive(Debug, Clone)]
pub struct RecordingMap {
    viewport: Viewport,
    annotations: Vec<Annotation>,
    calls: Vec<MapCall>,
}

impl Default for RecordingMap {
    fn default() -> Self {
        Self::with_viewport(Viewport::focused_on(Coord { x: 0.0, y: 0.0 }))
    }
}

impl RecordingMap {
    /// Create a map showing `viewport`.
    #[must_use]
    pub const fn with_viewport(viewport: Viewport) -> Self {
        Self {
            viewport,
            annotations: Vec::new(),
            calls: Vec::new(),
        }
    }

    /// Annotations currently on the map.
    #[must_use]
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Every call received since creation or the last reset.
    #[must_use]
    pub fn calls(&self) -> &[MapCall] {
        &self.calls
    }

    /// Forget recorded calls, keeping the current map state.
    pub fn reset_calls(&mut self) {
        self.calls.clear();
    }
}

impl MapDisplay for RecordingMap {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.calls.push(MapCall::SetViewport(viewport));
    }

    fn clear_annotations(&mut self) {
        self.annotations.clear();
        self.calls.push(MapCall::ClearAnnotations);
    }

    fn add_annotation(&mut self, annotation: Annotation) {
        self.annotations.push(annotation.clone());
        self.calls.push(MapCall::AddAnnotation(annotation));
    }
}

/// [`Navigator`] that records requests instead of launching anything.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    requests: Vec<NavigationRequest>,
}

impl RecordingNavigator {
    /// Requests received so far.
    #[must_use]
    pub fn requests(&self) -> &[NavigationRequest] {
        &self.requests
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, request: NavigationRequest) {
        self.requests.push(request);
    }
}

/// [`ResultsView`] that keeps a snapshot of the list at every reload.
#[derive(Debug, Clone, Default)]
pub struct RecordingResultsView {
    snapshots: Vec<Vec<Place>>,
}

impl RecordingResultsView {
    /// Number of reloads received.
    #[must_use]
    pub const fn reloads(&self) -> usize {
        self.snapshots.len()
    }

    /// List contents at each reload, oldest first.
    #[must_use]
    pub fn snapshots(&self) -> &[Vec<Place>] {
        &self.snapshots
    }
}

impl ResultsView for RecordingResultsView {
    fn reload(&mut self, results: &ResultList) {
        self.snapshots.push(results.as_slice().to_vec());
    }
}

/// Command received by [`ScriptedLocationServices`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationCall {
    /// When-in-use authorization was requested.
    RequestAuthorization,
    /// A one-shot location fix was requested.
    RequestLocation,
}

/// [`LocationServices`] that records the commands it receives.
#[derive(Debug, Clone, Default)]
pub struct ScriptedLocationServices {
    calls: Vec<LocationCall>,
}

impl ScriptedLocationServices {
    /// Commands received since creation or the last reset.
    #[must_use]
    pub fn calls(&self) -> &[LocationCall] {
        &self.calls
    }

    /// Forget recorded commands.
    pub fn reset_calls(&mut self) {
        self.calls.clear();
    }
}

impl LocationServices for ScriptedLocationServices {
    fn request_when_in_use_authorization(&mut self) {
        self.calls.push(LocationCall::RequestAuthorization);
    }

    fn request_location(&mut self) {
        self.calls.push(LocationCall::RequestLocation);
    }
}

type Answer = Result<Vec<Place>, SearchError>;

/// [`PlaceSearchProvider`] returning canned answers.
///
/// Answers registered for a specific query text take precedence over the
/// default answer. Every query received is recorded.
#[derive(Debug)]
pub struct StaticPlaceSearch {
    default: Answer,
    answers: HashMap<String, Answer>,
    queries: Mutex<Vec<SearchQuery>>,
}

impl StaticPlaceSearch {
    /// Provider answering every query with `places`.
    #[must_use]
    pub fn with_places(places: Vec<Place>) -> Self {
        Self::answering(Ok(places))
    }

    /// Provider failing every query with `error`.
    #[must_use]
    pub fn with_error(error: SearchError) -> Self {
        Self::answering(Err(error))
    }

    /// Answer queries whose text equals `text` with `places`.
    #[must_use]
    pub fn with_answer(mut self, text: impl Into<String>, places: Vec<Place>) -> Self {
        self.answers.insert(text.into(), Ok(places));
        self
    }

    /// Fail queries whose text equals `text` with `error`.
    #[must_use]
    pub fn with_failure(mut self, text: impl Into<String>, error: SearchError) -> Self {
        self.answers.insert(text.into(), Err(error));
        self
    }

    /// Queries received so far.
    #[must_use]
    pub fn queries(&self) -> Vec<SearchQuery> {
        self.queries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn answering(default: Answer) -> Self {
        Self {
            default,
            answers: HashMap::new(),
            queries: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl PlaceSearchProvider for StaticPlaceSearch {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Place>, SearchError> {
        self.queries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(query.clone());
        self.answers
            .get(&query.text)
            .unwrap_or(&self.default)
            .clone()
    }
}
