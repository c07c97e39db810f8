//! Facade crate for the Placefinder place search pipeline.
//!
//! This crate re-exports the core pipeline types and exposes the HTTP
//! adapters behind the `http` feature flag.

#![forbid(unsafe_code)]

pub use placefinder_core::{
    Annotation, AuthorizationStatus, LocationError, LocationEvent, LocationServices,
    LocationTracker, MapDisplay, MapSession, NavigationLauncher, NavigationRequest, Navigator,
    Place, PlaceSearchProvider, QueryDispatcher, ResultList, ResultRow, ResultsView,
    SearchCompletion, SearchError, SearchFuture, SearchQuery, SearchTicket, SelectionHandler,
    Span, TravelMode, Viewport, format_address, locality,
};

#[cfg(feature = "http")]
pub use placefinder_data::{
    navigation::DirectionsLinkNavigator,
    search::{NominatimConfig, NominatimPlaceSearch, ProviderBuildError},
};
