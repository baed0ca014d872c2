//! Directions request and provider trait.

use geo::Coord;

use super::{DirectionsError, TransitRoute};

/// How the traveller moves between the two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TravelMode {
    #[default]
    Transit,
    Walking,
    Driving,
    Bicycling,
}

impl TravelMode {
    /// Lowercase name understood by the map provider.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transit => "transit",
            Self::Walking => "walking",
            Self::Driving => "driving",
            Self::Bicycling => "bicycling",
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TravelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "transit" => Ok(Self::Transit),
            "walking" => Ok(Self::Walking),
            "driving" => Ok(Self::Driving),
            "bicycling" => Ok(Self::Bicycling),
            _ => Err(format!("unknown travel mode '{s}'")),
        }
    }
}

/// Origin, destination and travel mode of a directions query.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionsRequest {
    pub origin: Coord<f64>,
    pub destination: Coord<f64>,
    pub mode: TravelMode,
}

impl DirectionsRequest {
    pub const fn new(origin: Coord<f64>, destination: Coord<f64>, mode: TravelMode) -> Self {
        Self {
            origin,
            destination,
            mode,
        }
    }

    /// Public transport directions between `origin` and `destination`.
    pub const fn transit(origin: Coord<f64>, destination: Coord<f64>) -> Self {
        Self::new(origin, destination, TravelMode::Transit)
    }
}

/// Fetch a route for a [`DirectionsRequest`].
///
/// Implementations issue at most one request per call and never retry.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use porto_core::{
///     DirectionsError, DirectionsProvider, DirectionsRequest, RouteStep, TransitRoute,
/// };
///
/// struct WalkEverywhere;
///
/// impl DirectionsProvider for WalkEverywhere {
///     fn route(&self, request: &DirectionsRequest) -> Result<TransitRoute, DirectionsError> {
///         if request.origin == request.destination {
///             return Err(DirectionsError::NoRoute);
///         }
///         Ok(TransitRoute::new(vec![RouteStep::new("Walk", "1 hour")]))
///     }
/// }
///
/// let request = DirectionsRequest::transit(Coord { x: -8.67, y: 41.23 }, Coord { x: -8.60, y: 41.14 });
/// let route = WalkEverywhere.route(&request)?;
/// assert_eq!(route.steps.len(), 1);
/// # Ok::<(), DirectionsError>(())
/// ```
pub trait DirectionsProvider {
    /// Return the route for `request`.
    fn route(&self, request: &DirectionsRequest) -> Result<TransitRoute, DirectionsError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("transit", TravelMode::Transit)]
    #[case(" Walking", TravelMode::Walking)]
    #[case("BICYCLING", TravelMode::Bicycling)]
    fn parses_travel_modes(#[case] input: &str, #[case] expected: TravelMode) {
        assert_eq!(TravelMode::from_str(input), Ok(expected));
    }

    #[rstest]
    fn rejects_unknown_mode() {
        assert!(TravelMode::from_str("teleport").is_err());
    }

    #[rstest]
    fn transit_constructor_sets_mode() {
        let request = DirectionsRequest::transit(Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 });
        assert_eq!(request.mode, TravelMode::Transit);
    }
}
