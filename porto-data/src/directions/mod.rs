//! HTTP-based directions provider for the Google Directions web service.
//!
//! This module provides [`HttpDirectionsProvider`], an implementation of
//! [`porto_core::DirectionsProvider`] that fetches transit routes over HTTP.
//!
//! # Architecture
//!
//! The provider issues one request per call to the `directions/json`
//! endpoint and converts the first leg of the first route into a
//! [`porto_core::TransitRoute`]. The synchronous [`DirectionsProvider`] trait
//! is implemented by blocking on async HTTP calls internally, keeping the
//! core library embeddable in synchronous contexts. Failures are never
//! retried.
//!
//! # Example
//!
//! ```no_run
//! use porto_data::directions::{HttpDirectionsProvider, HttpDirectionsProviderConfig};
//! use porto_core::{AIRPORT_METRO, DirectionsPanel, DirectionsRequest, LODGING};
//! use std::time::Duration;
//!
//! let config = HttpDirectionsProviderConfig::new("my-api-key")
//!     .with_timeout(Duration::from_secs(10))
//!     .with_user_agent("my-app/1.0");
//! let provider = HttpDirectionsProvider::with_config(config)?;
//!
//! let request = DirectionsRequest::transit(AIRPORT_METRO.location, LODGING.location);
//! let panel = DirectionsPanel::request(&provider, &request);
//! println!("{} steps", panel.steps().len());
//! # Ok::<(), porto_data::directions::ProviderBuildError>(())
//! ```
//!
//! [`DirectionsProvider`]: porto_core::DirectionsProvider

mod google;
mod provider;

pub use provider::{
    DEFAULT_BASE_URL, DEFAULT_USER_AGENT, HttpDirectionsProvider, HttpDirectionsProviderConfig,
    ProviderBuildError,
};
