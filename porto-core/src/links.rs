//! Deep links into the external map provider.

use url::form_urlencoded;

use crate::{DirectionsRequest, Venue};

const SEARCH_ENDPOINT: &str = "https://www.google.com/maps/search/";
const DIRECTIONS_ENDPOINT: &str = "https://www.google.com/maps/dir/";

fn lat_lng(location: geo::Coord<f64>) -> String {
    format!("{},{}", location.y, location.x)
}

/// Link that searches the map provider for `venue`.
///
/// The query is the venue name followed by a space and the address, with a
/// missing address treated as empty.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use porto_core::{Venue, search_link};
///
/// let venue = Venue::new("Majestic Café", "café", Coord { x: -8.6069, y: 41.1472 })
///     .with_address("R. de Santa Catarina 112");
/// assert_eq!(
///     search_link(&venue),
///     "https://www.google.com/maps/search/?api=1&query=Majestic+Caf%C3%A9+R.+de+Santa+Catarina+112",
/// );
/// ```
pub fn search_link(venue: &Venue) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("api", "1")
        .append_pair("query", &venue.search_query())
        .finish();
    format!("{SEARCH_ENDPOINT}?{query}")
}

/// Link that opens the map provider's route planner for `request`.
pub fn directions_link(request: &DirectionsRequest) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("api", "1")
        .append_pair("origin", &lat_lng(request.origin))
        .append_pair("destination", &lat_lng(request.destination))
        .append_pair("travelmode", request.mode.as_str())
        .finish();
    format!("{DIRECTIONS_ENDPOINT}?{query}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TravelMode;
    use geo::Coord;
    use rstest::rstest;

    #[rstest]
    fn search_link_keeps_trailing_space_for_missing_address() {
        let venue = Venue::new("Foz", "area", Coord { x: -8.68, y: 41.15 });
        assert_eq!(
            search_link(&venue),
            "https://www.google.com/maps/search/?api=1&query=Foz+"
        );
    }

    #[rstest]
    fn search_link_escapes_reserved_characters() {
        let venue = Venue::new("Taylor's & Co", "bar", Coord { x: -8.61, y: 41.13 });
        let link = search_link(&venue);
        assert!(link.ends_with("query=Taylor%27s+%26+Co+"), "{link}");
    }

    #[rstest]
    fn directions_link_uses_lat_lng_order() {
        let request = DirectionsRequest::new(
            Coord { x: -8.67, y: 41.23 },
            Coord { x: -8.60, y: 41.14 },
            TravelMode::Walking,
        );
        assert_eq!(
            directions_link(&request),
            "https://www.google.com/maps/dir/?api=1&origin=41.23%2C-8.67&destination=41.14%2C-8.6&travelmode=walking"
        );
    }
}
