//! Map boundary: viewports and marker projection.
//!
//! Rendering belongs to an external map provider. The core only emits
//! [`MapMarker`] values and issues recentring commands through
//! [`MapViewport`].

use geo::Coord;

use crate::{CategoryTag, DisplayAttributes, VenueId};

/// Zoom level every guide map opens at.
pub const INITIAL_ZOOM: u8 = 13;

/// Zoom level used when a venue is picked from the list.
pub const SELECTED_ZOOM: u8 = 16;

/// Map centre and zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Centre with `x = longitude`, `y = latitude`.
    pub centre: Coord<f64>,
    pub zoom: u8,
}

impl Viewport {
    pub const fn new(centre: Coord<f64>, zoom: u8) -> Self {
        Self { centre, zoom }
    }
}

/// Receiver of recentring commands.
///
/// The [`VenueBrowser`](crate::VenueBrowser) calls this when a list
/// selection should pan and zoom the map. Implementations forward the
/// command to whatever renders the map.
pub trait MapViewport {
    /// Pan and zoom to `viewport`.
    fn recentre(&mut self, viewport: Viewport);
}

/// A bare [`Viewport`] simply adopts every command.
impl MapViewport for Viewport {
    fn recentre(&mut self, viewport: Viewport) {
        *self = viewport;
    }
}

/// Everything a map provider needs to draw one venue.
///
/// Clicking the marker should call
/// [`VenueBrowser::select_marker`](crate::VenueBrowser::select_marker) with
/// [`MapMarker::venue`], which lands on the same cursor a list selection uses.
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker<'a> {
    pub venue: VenueId,
    pub position: Coord<f64>,
    pub title: &'a str,
    pub category: CategoryTag,
    pub icon: &'a DisplayAttributes,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn viewport_adopts_recentre_commands() {
        let mut viewport = Viewport::new(Coord { x: -8.6291, y: 41.1579 }, INITIAL_ZOOM);
        let target = Viewport::new(Coord { x: -8.6146, y: 41.1457 }, SELECTED_ZOOM);
        viewport.recentre(target);
        assert_eq!(viewport, target);
    }
}
