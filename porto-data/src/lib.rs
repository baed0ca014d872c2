//! Adapters connecting the Porto guide to files and web services.
//!
//! Responsibilities:
//! - Load venue datasets from JSON files on disk.
//! - Fetch transit routes from the Google Directions web service.
//! - Rewrite pages for social-media crawlers at the edge.
//!
//! Boundaries:
//! - Do not encode classification or selection rules (live in `porto-core`).
//! - Surface failures as typed errors; never retry.
//!
//! Invariants:
//! - No global mutable state.

#![forbid(unsafe_code)]

pub mod dataset;
pub mod directions;
pub mod edge;
pub mod fs;

pub use dataset::{DatasetError, load_venues, parse_venues};
pub use directions::{
    DEFAULT_BASE_URL, DEFAULT_USER_AGENT, HttpDirectionsProvider, HttpDirectionsProviderConfig,
    ProviderBuildError,
};
pub use edge::{EdgeResponse, SocialPreview, is_social_crawler, rewrite_for_crawler};
