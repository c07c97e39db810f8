//! Event-driven wiring of the search, selection, navigation and location
//! components for one map screen.

use std::sync::Arc;

use crate::{
    LocationEvent, LocationServices, LocationTracker, MapDisplay, NavigationLauncher, Navigator,
    Place, PlaceSearchProvider, QueryDispatcher, ResultList, ResultsView, SearchCompletion,
    SearchFuture, SearchQuery, SelectionHandler, Viewport,
};

/// One map screen: owns the pipeline state and its collaborators.
///
/// Each method handles one external event and runs to completion. Search is
/// split in two so the caller can run the provider call elsewhere:
/// [`MapSession::query_changed`] returns the detached call and
/// [`MapSession::search_completed`] applies its answer.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use placefinder_core::MapSession;
/// use placefinder_core::test_support::{
///     RecordingMap, RecordingNavigator, RecordingResultsView, ScriptedLocationServices,
///     StaticPlaceSearch,
/// };
/// use placefinder_core::Place;
///
/// let provider = StaticPlaceSearch::with_places(vec![
///     Place::new(Coord { x: 2.35, y: 48.85 }).with_name("Louvre"),
/// ]);
/// let mut session = MapSession::new(
///     provider,
///     RecordingMap::default(),
///     RecordingResultsView::default(),
///     RecordingNavigator::default(),
///     ScriptedLocationServices::default(),
/// );
///
/// let call = session.query_changed("museum");
/// let completion = tokio::runtime::Builder::new_current_thread()
///     .build()
///     .expect("runtime")
///     .block_on(call);
/// assert!(session.search_completed(completion));
/// assert!(session.row_selected(0).is_some());
/// assert!(session.directions_requested());
/// assert_eq!(session.navigator().requests().len(), 1);
/// ```
#[derive(Debug)]
pub struct MapSession<P, M, V, N, L> {
    dispatcher: QueryDispatcher<P>,
    results: ResultList,
    selection: SelectionHandler,
    launcher: NavigationLauncher,
    tracker: LocationTracker,
    map: M,
    view: V,
    navigator: N,
    location: L,
}

impl<P, M, V, N, L> MapSession<P, M, V, N, L>
where
    P: PlaceSearchProvider + 'static,
    M: MapDisplay,
    V: ResultsView,
    N: Navigator,
    L: LocationServices,
{
    /// Assemble a session from its collaborators.
    pub fn new(provider: P, map: M, view: V, navigator: N, location: L) -> Self {
        Self::with_shared_provider(Arc::new(provider), map, view, navigator, location)
    }

    /// Assemble a session around a provider shared with other owners.
    pub const fn with_shared_provider(
        provider: Arc<P>,
        map: M,
        view: V,
        navigator: N,
        location: L,
    ) -> Self {
        Self {
            dispatcher: QueryDispatcher::from_shared(provider),
            results: ResultList::new(),
            selection: SelectionHandler::new(),
            launcher: NavigationLauncher::new(),
            tracker: LocationTracker::new(),
            map,
            view,
            navigator,
            location,
        }
    }

    /// Replace the navigation launcher, e.g. to request another travel mode.
    #[must_use]
    pub const fn with_launcher(mut self, launcher: NavigationLauncher) -> Self {
        self.launcher = launcher;
        self
    }

    /// Screen became visible: request location access and a first fix.
    pub fn start(&mut self) {
        self.tracker.start(&mut self.location);
    }

    /// Search text changed: issue a query scoped to the visible region.
    ///
    /// The returned call must be awaited and fed back through
    /// [`MapSession::search_completed`].
    pub fn query_changed(&mut self, text: impl Into<String>) -> SearchFuture {
        let query = SearchQuery::new(text, self.map.viewport());
        self.dispatcher.dispatch(query)
    }

    /// A search call finished: apply it if it answers the latest query.
    pub fn search_completed(&mut self, completion: SearchCompletion) -> bool {
        self.dispatcher
            .complete(completion, &mut self.results, &mut self.view)
    }

    /// Issue a query and apply its answer in one step.
    pub async fn search(&mut self, text: impl Into<String>) {
        let query = SearchQuery::new(text, self.map.viewport());
        self.dispatcher
            .search(query, &mut self.results, &mut self.view)
            .await;
    }

    /// A result row was tapped.
    pub fn row_selected(&mut self, index: usize) -> Option<&Place> {
        self.selection
            .select_row(index, &self.results, &mut self.map)
    }

    /// A place was chosen directly, e.g. by tapping its annotation.
    pub fn place_selected(&mut self, place: Place) -> &Place {
        self.selection.select(place, &mut self.map)
    }

    /// The directions button was tapped.
    pub fn directions_requested(&mut self) -> bool {
        self.launcher
            .launch(self.selection.pinned(), &mut self.navigator)
    }

    /// The location collaborator pushed an event.
    pub fn location_event(&mut self, event: LocationEvent) -> Option<Viewport> {
        self.tracker
            .handle(event, &mut self.location, &mut self.map)
    }

    /// Current search results.
    #[must_use]
    pub const fn results(&self) -> &ResultList {
        &self.results
    }

    /// Place currently pinned, if any.
    #[must_use]
    pub const fn pinned(&self) -> Option<&Place> {
        self.selection.pinned()
    }

    /// Map collaborator.
    #[must_use]
    pub const fn map(&self) -> &M {
        &self.map
    }

    /// List collaborator.
    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Navigation collaborator.
    #[must_use]
    pub const fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Location collaborator.
    #[must_use]
    pub const fn location(&self) -> &L {
        &self.location
    }

    /// Location collaborator, for hosts that answer requests themselves.
    #[must_use]
    pub const fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }

    /// Location tracker state.
    #[must_use]
    pub const fn tracker(&self) -> &LocationTracker {
        &self.tracker
    }
}
