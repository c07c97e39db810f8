//! Core pipeline for searching places and pinning them on a map.
//!
//! The crate turns free-text searches into ordered [`Place`] results,
//! formats each result as a one-line address, pins a chosen place as the
//! single map [`Annotation`], and hands the pinned place to an external
//! [`Navigator`]. Map rendering, location services, list presentation and
//! the search service itself are collaborators reached through the traits
//! [`MapDisplay`], [`LocationServices`], [`ResultsView`] and
//! [`PlaceSearchProvider`].
//!
//! Every handler runs to completion inside a single event-processing
//! context. The only suspension point is the provider call, whose answer is
//! applied only when it belongs to the most recently issued query.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod address;
mod location;
mod navigation;
mod place;
mod results;
pub mod search;
mod selection;
mod session;
#[doc(hidden)]
pub mod test_support;
mod viewport;

pub use address::{format_address, locality};
pub use location::{
    AuthorizationStatus, LocationError, LocationEvent, LocationServices, LocationTracker,
};
pub use navigation::{NavigationLauncher, NavigationRequest, Navigator, TravelMode};
pub use place::Place;
pub use results::{ResultList, ResultRow, ResultsView};
pub use search::{
    PlaceSearchProvider, QueryDispatcher, SearchCompletion, SearchError, SearchFuture,
    SearchQuery, SearchTicket,
};
pub use selection::{Annotation, MapDisplay, SelectionHandler};
pub use session::MapSession;
pub use viewport::{Span, Viewport};
