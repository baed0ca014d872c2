//! Browse command implementation for the Porto CLI.

use camino::Utf8PathBuf;
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use porto_core::{
    CategoryTag, Domain, Filter, ListedVenue, VenueBrowser, VenueId, Viewport, search_link,
};
use porto_data::load_venues;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{
    ARG_DATASET, ARG_DOMAIN, ARG_FILTER, ARG_SELECT, CliError, ENV_BROWSE_DATASET, parse_domain,
    require_existing, write_report,
};

/// CLI arguments for the `browse` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Load a venue dataset, classify it for one of the guide's \
                 domains and print the filter menu, the filtered list in \
                 name order and, optionally, the details of one venue.",
    about = "List the venues of a dataset"
)]
#[ortho_config(prefix = "PORTO")]
pub(crate) struct BrowseArgs {
    /// Path to a JSON venue dataset.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Guide domain: sights, food or essentials.
    #[arg(long = ARG_DOMAIN, value_name = "domain")]
    #[serde(default)]
    pub(crate) domain: Option<String>,
    /// Category tag to filter by, or "All".
    #[arg(long = ARG_FILTER, value_name = "tag")]
    #[serde(default)]
    pub(crate) filter: Option<String>,
    /// Name of a venue to select.
    #[arg(long = ARG_SELECT, value_name = "name")]
    #[serde(default)]
    pub(crate) select: Option<String>,
}

impl BrowseArgs {
    pub(crate) fn into_config(self) -> Result<BrowseConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        BrowseConfig::try_from(merged)
    }
}

/// Resolved `browse` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BrowseConfig {
    pub(crate) dataset: Utf8PathBuf,
    pub(crate) domain: Domain,
    pub(crate) filter: Filter,
    pub(crate) select: Option<String>,
}

impl TryFrom<BrowseArgs> for BrowseConfig {
    type Error = CliError;

    fn try_from(args: BrowseArgs) -> Result<Self, Self::Error> {
        let dataset = args.dataset.ok_or(CliError::MissingPath {
            field: ARG_DATASET,
            env: ENV_BROWSE_DATASET,
        })?;
        let domain = parse_domain(args.domain.as_deref())?;
        let filter = match args.filter {
            None => Filter::All,
            Some(value) => value
                .parse()
                .map_err(|err: porto_core::ParseFilterError| CliError::InvalidArgument {
                    field: ARG_FILTER,
                    value: value.clone(),
                    reason: err.to_string(),
                })?,
        };
        Ok(Self {
            dataset,
            domain,
            filter,
            select: args.select,
        })
    }
}

/// A row of the filtered list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ListedRow {
    /// Position in the original dataset.
    pub(crate) index: usize,
    pub(crate) name: String,
    pub(crate) tag: String,
    pub(crate) icon: String,
    pub(crate) colour: String,
}

impl From<&ListedVenue<'_>> for ListedRow {
    fn from(row: &ListedVenue<'_>) -> Self {
        Self {
            index: row.id.index(),
            name: row.venue.name.clone(),
            tag: row.category.as_str().to_owned(),
            icon: row.attributes.icon.clone(),
            colour: row.attributes.colour.clone(),
        }
    }
}

/// Details of the selected venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct SelectedVenue {
    pub(crate) index: usize,
    pub(crate) name: String,
    pub(crate) kind: String,
    pub(crate) tag: String,
    pub(crate) address: Option<String>,
    pub(crate) price: Option<String>,
    pub(crate) tags: Vec<String>,
    pub(crate) specialties: Vec<String>,
    pub(crate) search_link: String,
}

impl From<&ListedVenue<'_>> for SelectedVenue {
    fn from(row: &ListedVenue<'_>) -> Self {
        let venue = row.venue;
        Self {
            index: row.id.index(),
            name: venue.name.clone(),
            kind: venue.kind.clone(),
            tag: row.category.as_str().to_owned(),
            address: venue.address.clone(),
            price: venue.price.clone(),
            tags: venue.tags.clone(),
            specialties: venue.specialties.clone(),
            search_link: search_link(venue),
        }
    }
}

/// A fixed marker shown alongside the dataset, such as the lodging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct PinnedMarker {
    pub(crate) name: String,
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
    pub(crate) icon: String,
    pub(crate) colour: String,
}

/// Where the map would be centred after the command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct ViewportReport {
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
    pub(crate) zoom: u8,
}

impl From<Viewport> for ViewportReport {
    fn from(viewport: Viewport) -> Self {
        Self {
            latitude: viewport.centre.y,
            longitude: viewport.centre.x,
            zoom: viewport.zoom,
        }
    }
}

/// JSON document printed by `porto browse`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BrowseReport {
    pub(crate) domain: String,
    pub(crate) filters: Vec<String>,
    pub(crate) active_filter: String,
    pub(crate) venues: Vec<ListedRow>,
    pub(crate) selected: Option<SelectedVenue>,
    pub(crate) pinned: Vec<PinnedMarker>,
    pub(crate) viewport: ViewportReport,
}

pub(super) fn run_browse(args: BrowseArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.dataset, ARG_DATASET)?;
    let report = execute_browse(&config)?;
    write_report(writer, &report)
}

pub(super) fn execute_browse(config: &BrowseConfig) -> Result<BrowseReport, CliError> {
    let venues = load_venues(&config.dataset)?;
    let mut browser = config.domain.browser(venues);
    browser.set_filter(config.filter);

    let mut viewport = config.domain.initial_viewport();
    if let Some(name) = config.select.as_deref() {
        let id = find_by_name(&browser, name).ok_or_else(|| CliError::UnknownVenue {
            name: name.to_owned(),
        })?;
        browser.select_from_list(id, &mut viewport);
    }

    Ok(build_report(&browser, config.domain, viewport))
}

/// First venue whose name matches `name`, ignoring case.
fn find_by_name(browser: &VenueBrowser, name: &str) -> Option<VenueId> {
    let wanted = name.trim().to_lowercase();
    let found = browser
        .venues()
        .iter()
        .find(|(_, venue)| venue.name.to_lowercase() == wanted)
        .map(|(id, _)| id);
    if found.is_none() {
        debug!("no venue matches {name:?}");
    }
    found
}

fn build_report(browser: &VenueBrowser, domain: Domain, viewport: Viewport) -> BrowseReport {
    let registry = browser.registry();
    let pinned = domain
        .pinned()
        .iter()
        .map(|landmark| {
            let attributes = registry.lookup(CategoryTag::Lodging);
            PinnedMarker {
                name: landmark.name.to_owned(),
                latitude: landmark.location.y,
                longitude: landmark.location.x,
                icon: attributes.icon.clone(),
                colour: attributes.colour.clone(),
            }
        })
        .collect();

    BrowseReport {
        domain: domain.as_str().to_owned(),
        filters: browser
            .available_filters()
            .iter()
            .map(ToString::to_string)
            .collect(),
        active_filter: browser.active_filter().to_string(),
        venues: browser.visible().iter().map(ListedRow::from).collect(),
        selected: browser.selected().as_ref().map(SelectedVenue::from),
        pinned,
        viewport: viewport.into(),
    }
}
