//! HTTP-based place search providers.
//!
//! This module provides [`NominatimPlaceSearch`], an implementation of
//! [`placefinder_core::PlaceSearchProvider`] that queries a Nominatim
//! geocoding service.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use placefinder_data::search::{NominatimConfig, NominatimPlaceSearch};
//!
//! // Create a provider with custom configuration
//! let config = NominatimConfig::new("http://localhost:8080")
//!     .with_timeout(Duration::from_secs(5))
//!     .with_user_agent("my-app/1.0");
//! let provider = NominatimPlaceSearch::with_config(config)?;
//!
//! // Or use the simple constructor
//! let provider = NominatimPlaceSearch::new("http://localhost:8080")?;
//! # let _ = provider;
//! # Ok::<(), placefinder_data::search::ProviderBuildError>(())
//! ```

mod nominatim;
mod provider;

pub use provider::{
    DEFAULT_BASE_URL, DEFAULT_USER_AGENT, NominatimConfig, NominatimPlaceSearch,
    ProviderBuildError,
};
