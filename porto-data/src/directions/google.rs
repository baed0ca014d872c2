//! Response types for the Google Directions web service.
//!
//! Only the fields the guide renders are modelled; everything else in the
//! response is ignored.
//!
//! See: <https://developers.google.com/maps/documentation/directions/get-directions>

use porto_core::{RouteStep, TransitLine};
use serde::Deserialize;

/// Top-level Directions API response.
#[derive(Debug, Deserialize)]
pub struct DirectionsResponse {
    /// Status code from the service.
    ///
    /// Common values:
    /// - `"OK"` - at least one route was found
    /// - `"ZERO_RESULTS"` - no route exists between the points
    /// - `"REQUEST_DENIED"` - the key is missing or invalid
    /// - `"OVER_QUERY_LIMIT"` - the quota is exhausted
    pub status: String,

    /// Human-readable detail accompanying a non-`OK` status.
    #[serde(default)]
    pub error_message: Option<String>,

    #[serde(default)]
    pub routes: Vec<Route>,
}

impl DirectionsResponse {
    /// Check if the response indicates success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == "OK"
    }
}

#[derive(Debug, Deserialize)]
pub struct Route {
    #[serde(default)]
    pub legs: Vec<Leg>,
}

#[derive(Debug, Deserialize)]
pub struct Leg {
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
pub struct Step {
    /// Instructions with embedded HTML markup.
    #[serde(default)]
    pub html_instructions: String,
    pub duration: Option<TextValue>,
    pub transit_details: Option<TransitDetails>,
}

#[derive(Debug, Deserialize)]
pub struct TextValue {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct TransitDetails {
    pub line: Option<Line>,
}

#[derive(Debug, Deserialize)]
pub struct Line {
    pub short_name: Option<String>,
    pub name: Option<String>,
    pub vehicle: Option<Vehicle>,
}

#[derive(Debug, Deserialize)]
pub struct Vehicle {
    pub name: Option<String>,
}

impl From<Step> for RouteStep {
    fn from(step: Step) -> Self {
        let transit = step
            .transit_details
            .and_then(|details| details.line)
            .map(|line| TransitLine {
                short_name: line.short_name,
                name: line.name,
                vehicle: line.vehicle.and_then(|vehicle| vehicle.name),
            });
        Self {
            instructions: step.html_instructions,
            duration_text: step.duration.map(|d| d.text).unwrap_or_default(),
            transit,
        }
    }
}
