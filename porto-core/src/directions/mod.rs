//! Transit directions between two fixed points.
//!
//! A [`DirectionsProvider`] answers one [`DirectionsRequest`] with either a
//! [`TransitRoute`] or a terminal [`DirectionsError`]. The
//! [`DirectionsPanel`] turns that outcome into the sidebar state: a failed
//! request leaves nothing to show and is never retried.

mod error;
mod panel;
mod provider;
mod route;

pub use error::DirectionsError;
pub use panel::DirectionsPanel;
pub use provider::{DirectionsProvider, DirectionsRequest, TravelMode};
pub use route::{RouteStep, TransitLine, TransitRoute};
