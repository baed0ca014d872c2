//! Directions command implementation for the Porto CLI.

use clap::Parser;
use geo::Coord;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use porto_core::{
    AIRPORT_METRO, DirectionsPanel, DirectionsProvider, DirectionsRequest, LODGING, RouteStep,
    TravelMode, directions_link,
};
use porto_data::{DEFAULT_BASE_URL, HttpDirectionsProvider, HttpDirectionsProviderConfig};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{
    ARG_API_KEY, ARG_BASE_URL, ARG_DESTINATION, ARG_MODE, ARG_ORIGIN, CliError,
    ENV_DIRECTIONS_API_KEY, write_report,
};

/// CLI arguments for the `directions` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Request a route from the directions web service and print \
                 its steps. Without coordinates the route runs from the \
                 airport metro entrance to the lodging. The API key can come \
                 from CLI flags, configuration files, or environment \
                 variables.",
    about = "Request transit directions"
)]
#[ortho_config(prefix = "PORTO")]
pub(crate) struct DirectionsArgs {
    /// Start point as "latitude,longitude".
    #[arg(long = ARG_ORIGIN, value_name = "lat,lng", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) origin: Option<String>,
    /// End point as "latitude,longitude".
    #[arg(long = ARG_DESTINATION, value_name = "lat,lng", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) destination: Option<String>,
    /// Travel mode: transit, walking, driving or bicycling.
    #[arg(long = ARG_MODE, value_name = "mode")]
    #[serde(default)]
    pub(crate) mode: Option<String>,
    /// Directions web service API key.
    #[arg(long = ARG_API_KEY, value_name = "key")]
    #[serde(default)]
    pub(crate) api_key: Option<String>,
    /// Base URL of the directions web service.
    #[arg(long = ARG_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) base_url: Option<String>,
}

impl DirectionsArgs {
    pub(crate) fn into_config(self) -> Result<DirectionsConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        DirectionsConfig::try_from(merged)
    }
}

/// Resolved `directions` command configuration.
#[derive(Clone, PartialEq)]
pub(crate) struct DirectionsConfig {
    pub(crate) request: DirectionsRequest,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
}

impl std::fmt::Debug for DirectionsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectionsConfig")
            .field("request", &self.request)
            .field("api_key", &"REDACTED")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl TryFrom<DirectionsArgs> for DirectionsConfig {
    type Error = CliError;

    fn try_from(args: DirectionsArgs) -> Result<Self, Self::Error> {
        let api_key = args
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(CliError::MissingArgument {
                field: ARG_API_KEY,
                env: ENV_DIRECTIONS_API_KEY,
            })?;
        let origin = match args.origin.as_deref() {
            Some(value) => parse_lat_lng(ARG_ORIGIN, value)?,
            None => AIRPORT_METRO.location,
        };
        let destination = match args.destination.as_deref() {
            Some(value) => parse_lat_lng(ARG_DESTINATION, value)?,
            None => LODGING.location,
        };
        let mode = match args.mode {
            Some(value) => value
                .parse::<TravelMode>()
                .map_err(|reason| CliError::InvalidArgument {
                    field: ARG_MODE,
                    value: value.clone(),
                    reason,
                })?,
            None => TravelMode::default(),
        };
        Ok(Self {
            request: DirectionsRequest::new(origin, destination, mode),
            api_key,
            base_url: args.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
        })
    }
}

/// Parse `"latitude,longitude"` into a coordinate with `x = longitude`.
pub(crate) fn parse_lat_lng(field: &'static str, value: &str) -> Result<Coord<f64>, CliError> {
    let invalid = || CliError::InvalidCoordinate {
        field,
        value: value.to_owned(),
    };
    let (lat, lng) = value.split_once(',').ok_or_else(invalid)?;
    let latitude: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let longitude: f64 = lng.trim().parse().map_err(|_| invalid())?;
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(invalid());
    }
    Ok(Coord {
        x: longitude,
        y: latitude,
    })
}

/// Builds a directions provider for the current invocation.
pub(super) trait DirectionsProviderBuilder {
    fn build(&self, config: &DirectionsConfig) -> Result<Box<dyn DirectionsProvider>, CliError>;
}

pub(super) struct HttpDirectionsProviderBuilder;

impl DirectionsProviderBuilder for HttpDirectionsProviderBuilder {
    fn build(&self, config: &DirectionsConfig) -> Result<Box<dyn DirectionsProvider>, CliError> {
        let provider_config = HttpDirectionsProviderConfig::new(config.api_key.clone())
            .with_base_url(config.base_url.clone());
        let provider = HttpDirectionsProvider::with_config(provider_config).map_err(|source| {
            CliError::BuildDirectionsProvider {
                base_url: config.base_url.clone(),
                source,
            }
        })?;
        Ok(Box::new(provider))
    }
}

/// A step as printed by `porto directions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct StepReport {
    pub(crate) instructions: String,
    pub(crate) duration: String,
    pub(crate) line: Option<String>,
}

impl From<&RouteStep> for StepReport {
    fn from(step: &RouteStep) -> Self {
        Self {
            instructions: step.plain_instructions(),
            duration: step.duration_text.clone(),
            line: step
                .transit
                .as_ref()
                .and_then(|line| line.display_name())
                .map(str::to_owned),
        }
    }
}

/// JSON document printed by `porto directions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct DirectionsReport {
    pub(crate) mode: String,
    pub(crate) available: bool,
    /// Link opening the same route in the maps web application.
    pub(crate) link: String,
    pub(crate) steps: Vec<StepReport>,
}

impl DirectionsReport {
    fn new(request: &DirectionsRequest, panel: &DirectionsPanel) -> Self {
        Self {
            mode: request.mode.as_str().to_owned(),
            available: panel.is_available(),
            link: directions_link(request),
            steps: panel.steps().iter().map(StepReport::from).collect(),
        }
    }
}

pub(super) fn run_directions(args: DirectionsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    run_directions_with(args, &HttpDirectionsProviderBuilder, writer)
}

pub(super) fn run_directions_with(
    args: DirectionsArgs,
    builder: &dyn DirectionsProviderBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_directions(&config, builder)?;
    write_report(writer, &report)
}

fn execute_directions(
    config: &DirectionsConfig,
    builder: &dyn DirectionsProviderBuilder,
) -> Result<DirectionsReport, CliError> {
    let provider = builder.build(config)?;
    let panel = DirectionsPanel::request(provider.as_ref(), &config.request);
    Ok(DirectionsReport::new(&config.request, &panel))
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<DirectionsConfig, CliError> {
    let merged = DirectionsArgs::merge_from_layers(layers).map_err(CliError::from)?;
    DirectionsConfig::try_from(merged)
}
