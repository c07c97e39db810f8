//! Place-search provider trait and the query it receives.

use async_trait::async_trait;

use crate::{Place, Viewport};

use super::error::SearchError;

/// Free-text search scoped to a map region.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    /// Text typed by the user.
    pub text: String,
    /// Region used as a relevance hint by the provider.
    pub region: Viewport,
}

impl SearchQuery {
    /// Construct a query for `text` around `region`.
    #[must_use]
    pub fn new(text: impl Into<String>, region: Viewport) -> Self {
        Self {
            text: text.into(),
            region,
        }
    }

    /// Whether the query text is empty once surrounding whitespace is removed.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Resolve a [`SearchQuery`] into candidate places.
///
/// Implementers return places in their own relevance order; callers never
/// reorder them. An empty vector is a valid answer.
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use geo::Coord;
/// use placefinder_core::{Place, PlaceSearchProvider, SearchError, SearchQuery};
///
/// struct CentreProvider;
///
/// #[async_trait]
/// impl PlaceSearchProvider for CentreProvider {
///     async fn search(&self, query: &SearchQuery) -> Result<Vec<Place>, SearchError> {
///         Ok(vec![Place::new(query.region.centre).with_name(query.text.clone())])
///     }
/// }
/// ```
#[async_trait]
pub trait PlaceSearchProvider: Send + Sync {
    /// Return the places matching `query`.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Place>, SearchError>;
}
