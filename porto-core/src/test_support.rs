//! Test doubles and sample data shared by unit and behaviour tests.

use std::cell::Cell;

use geo::Coord;

use crate::{
    DirectionsError, DirectionsProvider, DirectionsRequest, MapViewport, RouteStep, TransitLine,
    TransitRoute, Venue, VenueCollection, Viewport,
};

/// `MapViewport` that records every recentring command.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingViewport {
    /// Commands in the order they were issued.
    pub moves: Vec<Viewport>,
}

impl RecordingViewport {
    /// The most recent command, if any.
    pub fn last(&self) -> Option<&Viewport> {
        self.moves.last()
    }
}

impl MapViewport for RecordingViewport {
    fn recentre(&mut self, viewport: Viewport) {
        self.moves.push(viewport);
    }
}

/// `DirectionsProvider` returning a canned outcome and counting calls.
#[derive(Debug, Clone)]
pub struct StubDirectionsProvider {
    outcome: Result<TransitRoute, DirectionsError>,
    calls: Cell<usize>,
}

impl StubDirectionsProvider {
    /// Answer every request with `route`.
    #[must_use]
    pub const fn with_route(route: TransitRoute) -> Self {
        Self {
            outcome: Ok(route),
            calls: Cell::new(0),
        }
    }

    /// Fail every request with `error`.
    #[must_use]
    pub const fn with_error(error: DirectionsError) -> Self {
        Self {
            outcome: Err(error),
            calls: Cell::new(0),
        }
    }

    /// Number of requests answered so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl DirectionsProvider for StubDirectionsProvider {
    fn route(&self, _request: &DirectionsRequest) -> Result<TransitRoute, DirectionsError> {
        self.calls.set(self.calls.get().saturating_add(1));
        self.outcome.clone()
    }
}

/// Airport-to-lodging route in the shape the transit service returns it.
pub fn airport_route() -> TransitRoute {
    TransitRoute::new(vec![
        RouteStep::new("Walk to <b>Aeroporto</b>", "2 mins"),
        RouteStep::new("Metro towards Estádio do Dragão", "29 mins").with_transit(TransitLine {
            short_name: Some("E".to_owned()),
            name: Some("Aeroporto - Estádio do Dragão".to_owned()),
            vehicle: Some("Metro".to_owned()),
        }),
        RouteStep::new("Walk to R. Formosa, 414", "6 mins"),
    ])
}

fn at(latitude: f64, longitude: f64) -> Coord<f64> {
    Coord {
        x: longitude,
        y: latitude,
    }
}

/// A handful of Porto points of interest.
pub fn sight_venues() -> VenueCollection {
    VenueCollection::new(vec![
        Venue::new("Torre dos Clérigos tower", "landmark", at(41.1457, -8.6146)),
        Venue::new("Serralves Museum", "museum", at(41.1596, -8.6598)),
        Venue::new("Livraria Lello", "bookshop", at(41.1469, -8.6149)),
        Venue::new("Ribeira", "area", at(41.1405, -8.6130)),
        Venue::new("Jardim do Morro", "park", at(41.1373, -8.6094)),
        Venue::new("Casa da Guitarra fado", "music", at(41.1422, -8.6118)),
    ])
}

/// Restaurants, bars and cafés.
pub fn food_venues() -> VenueCollection {
    VenueCollection::new(vec![
        Venue::new("Majestic Café", "café", at(41.1472, -8.6069))
            .with_address("R. de Santa Catarina 112"),
        Venue::new("Aduela", "Wine Bar", at(41.1489, -8.6159)),
        Venue::new("Zé Bota", "restaurant", at(41.1467, -8.6154)).with_price("€€"),
        Venue::new("Café Santiago", "café", at(41.1466, -8.6063))
            .with_address("R. de Passos Manuel 226")
            .with_specialties(["Francesinha"]),
        Venue::new("Cantinho do Avillez", "Restaurant", at(41.1449, -8.6112)),
    ])
}

/// Shops near the lodging.
pub fn essential_venues() -> VenueCollection {
    VenueCollection::new(vec![
        Venue::new("Pingo Doce", "Supermarket", at(41.1487, -8.6076)),
        Venue::new("Farmácia Estácio", "Pharmacy", at(41.1481, -8.6098)),
        Venue::new("Garrafeira do Carmo", "off-license", at(41.1477, -8.6163)),
    ])
}
