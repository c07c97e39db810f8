//! HTTP adapters for the Placefinder pipeline.
//!
//! - [`search`] queries a Nominatim geocoding service for places.
//! - [`navigation`] hands selected places to OpenStreetMap's directions
//!   page.

#![forbid(unsafe_code)]

pub mod navigation;
pub mod search;
