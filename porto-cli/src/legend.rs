//! Legend command implementation for the Porto CLI.

use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use porto_core::Domain;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{ARG_DOMAIN, CliError, parse_domain, write_report};

/// CLI arguments for the `legend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Print the marker legend of a guide domain")]
#[ortho_config(prefix = "PORTO")]
pub(crate) struct LegendArgs {
    /// Guide domain: sights, food or essentials.
    #[arg(long = ARG_DOMAIN, value_name = "domain")]
    #[serde(default)]
    pub(crate) domain: Option<String>,
}

/// One legend row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct LegendEntry {
    pub(crate) tag: String,
    pub(crate) label: String,
    pub(crate) icon: String,
    pub(crate) colour: String,
    pub(crate) scale: f32,
}

/// JSON document printed by `porto legend`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct LegendReport {
    pub(crate) domain: String,
    pub(crate) title: String,
    pub(crate) entries: Vec<LegendEntry>,
}

impl From<Domain> for LegendReport {
    fn from(domain: Domain) -> Self {
        let registry = domain.registry();
        let entries = registry
            .legend()
            .into_iter()
            .map(|(tag, attributes)| LegendEntry {
                tag: tag.as_str().to_owned(),
                label: tag.label().to_owned(),
                icon: attributes.icon.clone(),
                colour: attributes.colour.clone(),
                scale: attributes.scale,
            })
            .collect();
        Self {
            domain: domain.as_str().to_owned(),
            title: domain.title().to_owned(),
            entries,
        }
    }
}

pub(super) fn run_legend(args: LegendArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let domain = parse_domain(merged.domain.as_deref())?;
    write_report(writer, &LegendReport::from(domain))
}
