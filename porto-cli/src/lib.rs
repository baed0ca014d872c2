//! Command-line interface for the Porto travel guide.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use porto_core::Domain;
use serde::Serialize;

mod browse;
mod directions;
mod error;
mod inject;
mod legend;

use browse::BrowseArgs;
use directions::DirectionsArgs;
pub use error::CliError;
use inject::InjectMetaArgs;
use legend::LegendArgs;

const ARG_DATASET: &str = "dataset";
const ARG_DOMAIN: &str = "domain";
const ARG_FILTER: &str = "filter";
const ARG_SELECT: &str = "select";
const ARG_ORIGIN: &str = "origin";
const ARG_DESTINATION: &str = "destination";
const ARG_MODE: &str = "mode";
const ARG_API_KEY: &str = "api-key";
const ARG_BASE_URL: &str = "base-url";
const ARG_PAGE: &str = "page";
const ARG_USER_AGENT: &str = "user-agent";
const ENV_BROWSE_DATASET: &str = "PORTO_CMDS_BROWSE_DATASET";
const ENV_DIRECTIONS_API_KEY: &str = "PORTO_CMDS_DIRECTIONS_API_KEY";
const ENV_INJECT_META_PAGE: &str = "PORTO_CMDS_INJECT_META_PAGE";

/// Run the Porto CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse()?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Browse(args) => browse::run_browse(args, &mut stdout),
        Command::Legend(args) => legend::run_legend(args, &mut stdout),
        Command::Directions(args) => directions::run_directions(args, &mut stdout),
        Command::InjectMeta(args) => inject::run_inject_meta(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "porto",
    about = "Browse Porto venues, legends and transit directions",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List a venue dataset the way the guide's side panel shows it.
    Browse(BrowseArgs),
    /// Print the marker legend of a guide domain.
    Legend(LegendArgs),
    /// Request transit directions between two points.
    Directions(DirectionsArgs),
    /// Serve a page through the crawler meta-tag filter.
    InjectMeta(InjectMetaArgs),
}

/// Resolve an optional domain name, defaulting to the sights view.
fn parse_domain(value: Option<&str>) -> Result<Domain, CliError> {
    value.map_or(Ok(Domain::default()), |name| {
        name.parse().map_err(|reason| CliError::InvalidArgument {
            field: ARG_DOMAIN,
            value: name.to_owned(),
            reason,
        })
    })
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match porto_data::fs::is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn write_report<T: Serialize>(writer: &mut dyn Write, report: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
