//! Core domain types for the Porto travel guide.
//!
//! Responsibilities:
//! - Model venues and the immutable collections they are loaded into.
//! - Classify venues into display categories with ordered keyword rules.
//! - Drive the filterable venue list and the selection cursor it shares
//!   with the map.
//! - Describe transit directions and the provider contract that fetches them.
//!
//! Boundaries:
//! - No I/O. Dataset loading and HTTP adapters live in `porto-data`.
//! - The map itself is an external collaborator reached through
//!   [`MapViewport`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod browser;
pub mod category;
pub mod classifier;
mod collate;
pub mod collection;
pub mod directions;
pub mod domain;
pub mod links;
pub mod map;
pub mod registry;
#[doc(hidden)]
pub mod test_support;
pub mod venue;

pub use browser::{Filter, ListedVenue, ParseFilterError, VenueBrowser};
pub use category::CategoryTag;
pub use classifier::{Classifier, KeywordRule, MatchField, RuleSet};
pub use collection::{VenueCollection, VenueId};
pub use directions::{
    DirectionsError, DirectionsPanel, DirectionsProvider, DirectionsRequest, RouteStep,
    TransitLine, TransitRoute, TravelMode,
};
pub use domain::{AIRPORT_METRO, Domain, LODGING, Landmark};
pub use links::{directions_link, search_link};
pub use map::{INITIAL_ZOOM, MapMarker, MapViewport, SELECTED_ZOOM, Viewport};
pub use registry::{CategoryRegistry, DisplayAttributes};
pub use venue::Venue;
