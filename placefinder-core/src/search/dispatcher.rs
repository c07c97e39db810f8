//! Last-query-wins dispatch of place searches.
//!
//! Every query receives a [`SearchTicket`]. The provider call runs as a
//! detached future that resolves to a [`SearchCompletion`]; the completion is
//! applied to the result list only when its ticket is still the most recently
//! issued one.

use std::future::{self, Future};
use std::pin::Pin;
use std::sync::Arc;

use crate::{Place, ResultList, ResultsView};

use super::error::SearchError;
use super::provider::{PlaceSearchProvider, SearchQuery};

/// Sequence number handed to each issued query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchTicket(u64);

impl SearchTicket {
    /// Position of the ticket in issue order, starting at one.
    #[must_use]
    pub const fn sequence(self) -> u64 {
        self.0
    }
}

/// Outcome of one provider call, tagged with the ticket it answers.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCompletion {
    ticket: SearchTicket,
    outcome: Result<Vec<Place>, SearchError>,
}

impl SearchCompletion {
    /// Pair a provider outcome with the ticket it answers.
    #[must_use]
    pub const fn new(ticket: SearchTicket, outcome: Result<Vec<Place>, SearchError>) -> Self {
        Self { ticket, outcome }
    }

    /// Ticket of the query this completion answers.
    #[must_use]
    pub const fn ticket(&self) -> SearchTicket {
        self.ticket
    }

    /// Places returned by the provider, or the error it reported.
    ///
    /// The error is kept so a presentation layer can distinguish a failed
    /// search from an empty one, although applying the completion treats
    /// both the same way.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`SearchError`] when the search failed.
    pub fn outcome(&self) -> Result<&[Place], &SearchError> {
        self.outcome.as_deref()
    }
}

/// Detached provider call produced by [`QueryDispatcher::fetch`].
pub type SearchFuture = Pin<Box<dyn Future<Output = SearchCompletion> + Send + 'static>>;

/// Issue queries against a [`PlaceSearchProvider`] and apply the newest
/// answer.
///
/// The dispatcher lives in a single event-processing context: issuing and
/// completing take `&mut self`/`&self` and never block. Provider calls are
/// returned as `'static` futures so the caller decides whether to await
/// them inline or spawn them.
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use geo::Coord;
/// use placefinder_core::{
///     Place, PlaceSearchProvider, QueryDispatcher, ResultList, ResultsView, SearchError,
///     SearchQuery, Viewport,
/// };
///
/// struct Echo;
///
/// #[async_trait]
/// impl PlaceSearchProvider for Echo {
///     async fn search(&self, query: &SearchQuery) -> Result<Vec<Place>, SearchError> {
///         Ok(vec![Place::new(query.region.centre).with_name(query.text.clone())])
///     }
/// }
///
/// struct NoView;
///
/// impl ResultsView for NoView {
///     fn reload(&mut self, _results: &ResultList) {}
/// }
///
/// # tokio_test(async {
/// let mut dispatcher = QueryDispatcher::new(Echo);
/// let mut results = ResultList::new();
/// let region = Viewport::focused_on(Coord { x: 0.0, y: 0.0 });
///
/// let stale = dispatcher.dispatch(SearchQuery::new("caf", region));
/// let fresh = dispatcher.dispatch(SearchQuery::new("cafe", region));
///
/// let fresh = fresh.await;
/// let stale = stale.await;
/// assert!(dispatcher.complete(fresh, &mut results, &mut NoView));
/// assert!(!dispatcher.complete(stale, &mut results, &mut NoView));
/// assert_eq!(results.row(0).map(|row| row.title), Some("cafe".to_owned()));
/// # });
/// # fn tokio_test(future: impl std::future::Future<Output = ()>) {
/// #     tokio::runtime::Builder::new_current_thread()
/// #         .build()
/// #         .expect("runtime")
/// #         .block_on(future);
/// # }
/// ```
#[derive(Debug)]
pub struct QueryDispatcher<P> {
    provider: Arc<P>,
    latest: u64,
}

impl<P> QueryDispatcher<P>
where
    P: PlaceSearchProvider + 'static,
{
    /// Create a dispatcher that owns `provider`.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self::from_shared(Arc::new(provider))
    }

    /// Create a dispatcher around a provider shared with other owners.
    #[must_use]
    pub const fn from_shared(provider: Arc<P>) -> Self {
        Self {
            provider,
            latest: 0,
        }
    }

    /// Provider used for every query.
    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Issue a new ticket, superseding every previously issued one.
    pub const fn issue(&mut self) -> SearchTicket {
        self.latest = self.latest.saturating_add(1);
        SearchTicket(self.latest)
    }

    /// Most recently issued ticket, if any query has been issued.
    #[must_use]
    pub const fn latest(&self) -> Option<SearchTicket> {
        if self.latest == 0 {
            None
        } else {
            Some(SearchTicket(self.latest))
        }
    }

    /// Whether `ticket` is the most recently issued one.
    #[must_use]
    pub const fn is_current(&self, ticket: SearchTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Run the provider call for `query` on behalf of `ticket`.
    ///
    /// Blank queries resolve immediately to an empty result without reaching
    /// the provider.
    #[must_use]
    pub fn fetch(&self, ticket: SearchTicket, query: SearchQuery) -> SearchFuture {
        if query.is_blank() {
            log::debug!("skipping provider for blank query (ticket {})", ticket.0);
            return Box::pin(future::ready(SearchCompletion::new(ticket, Ok(Vec::new()))));
        }
        let provider = Arc::clone(&self.provider);
        Box::pin(async move {
            let outcome = provider.search(&query).await;
            SearchCompletion::new(ticket, outcome)
        })
    }

    /// Issue a ticket for `query` and return its provider call.
    pub fn dispatch(&mut self, query: SearchQuery) -> SearchFuture {
        let ticket = self.issue();
        self.fetch(ticket, query)
    }

    /// Apply `completion` if it answers the latest query.
    ///
    /// On success the list is replaced by the provider's places; on failure
    /// it is emptied and the error is logged. Either way `view` is asked to
    /// reload. Stale completions are dropped without touching `results` or
    /// `view`. Returns whether the completion was applied.
    pub fn complete(
        &self,
        completion: SearchCompletion,
        results: &mut ResultList,
        view: &mut dyn ResultsView,
    ) -> bool {
        let SearchCompletion { ticket, outcome } = completion;
        if !self.is_current(ticket) {
            log::debug!(
                "discarding stale search completion (ticket {}, latest {})",
                ticket.0,
                self.latest
            );
            return false;
        }
        match outcome {
            Ok(places) => results.replace(places),
            Err(err) => {
                log::warn!("place search failed: {err}");
                results.clear();
            }
        }
        view.reload(results);
        true
    }

    /// Dispatch `query`, await the provider, and apply the answer.
    ///
    /// No other query can be issued while this call holds the dispatcher, so
    /// the answer is always applied.
    pub async fn search(
        &mut self,
        query: SearchQuery,
        results: &mut ResultList,
        view: &mut dyn ResultsView,
    ) {
        let completion = self.dispatch(query).await;
        self.complete(completion, results, view);
    }
}
