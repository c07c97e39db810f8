//! Dispatch free-text place searches to an external provider.
//!
//! The [`PlaceSearchProvider`] trait abstracts the external search service.
//! [`QueryDispatcher`] issues queries against a provider and applies only
//! the completion of the most recently issued query to a
//! [`ResultList`](crate::ResultList), so an out-of-order response can never
//! overwrite fresher results.

mod dispatcher;
mod error;
mod provider;

pub use dispatcher::{QueryDispatcher, SearchCompletion, SearchFuture, SearchTicket};
pub use error::SearchError;
pub use provider::{PlaceSearchProvider, SearchQuery};
