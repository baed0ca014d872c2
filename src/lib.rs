//! Facade crate for the Porto travel guide.
//!
//! This crate re-exports the core domain types and exposes the dataset
//! loader, the HTTP directions provider and the crawler filter behind the
//! `http` feature.

#![forbid(unsafe_code)]

pub use porto_core::{
    AIRPORT_METRO, CategoryRegistry, CategoryTag, Classifier, DirectionsError, DirectionsPanel,
    DirectionsProvider, DirectionsRequest, DisplayAttributes, Domain, Filter, INITIAL_ZOOM,
    KeywordRule, LODGING, Landmark, ListedVenue, MapMarker, MapViewport, MatchField,
    ParseFilterError, RouteStep, RuleSet, SELECTED_ZOOM, TransitLine, TransitRoute, TravelMode,
    Venue, VenueBrowser, VenueCollection, VenueId, Viewport, directions_link, search_link,
};

#[cfg(feature = "http")]
pub use porto_data::{
    DatasetError, EdgeResponse, HttpDirectionsProvider, HttpDirectionsProviderConfig,
    ProviderBuildError, SocialPreview, load_venues, parse_venues, rewrite_for_crawler,
};
