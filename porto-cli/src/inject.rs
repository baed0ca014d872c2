//! Inject-meta command implementation for the Porto CLI.

use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use porto_data::{EdgeResponse, SocialPreview, rewrite_for_crawler};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{ARG_PAGE, ARG_USER_AGENT, CliError, ENV_INJECT_META_PAGE, require_existing};

/// User agent assumed when none is given, so the rewrite is visible.
pub(crate) const DEFAULT_USER_AGENT: &str = "facebookexternalhit/1.1";

/// CLI arguments for the `inject-meta` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Print an HTML page as the edge filter would serve it to \
                 the given user agent. Link-preview crawlers receive Open \
                 Graph and Twitter Card tags; other agents receive the page \
                 unchanged.",
    about = "Serve a page through the crawler filter"
)]
#[ortho_config(prefix = "PORTO")]
pub(crate) struct InjectMetaArgs {
    /// Path to the HTML page.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) page: Option<Utf8PathBuf>,
    /// User agent of the simulated request.
    #[arg(long = ARG_USER_AGENT, value_name = "agent")]
    #[serde(default)]
    pub(crate) user_agent: Option<String>,
}

/// Resolved `inject-meta` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InjectMetaConfig {
    pub(crate) page: Utf8PathBuf,
    pub(crate) user_agent: String,
}

impl TryFrom<InjectMetaArgs> for InjectMetaConfig {
    type Error = CliError;

    fn try_from(args: InjectMetaArgs) -> Result<Self, Self::Error> {
        let page = args.page.ok_or(CliError::MissingPath {
            field: ARG_PAGE,
            env: ENV_INJECT_META_PAGE,
        })?;
        Ok(Self {
            page,
            user_agent: args
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned()),
        })
    }
}

pub(super) fn run_inject_meta(args: InjectMetaArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = InjectMetaConfig::try_from(merged)?;
    require_existing(&config.page, ARG_PAGE)?;
    let served = serve_page(&config)?;
    writer
        .write_all(served.body().as_bytes())
        .map_err(CliError::WriteOutput)
}

pub(super) fn serve_page(config: &InjectMetaConfig) -> Result<EdgeResponse, CliError> {
    let html = porto_data::fs::read_to_string(&config.page).map_err(|source| {
        CliError::ReadPage {
            path: config.page.clone(),
            source,
        }
    })?;
    let served = rewrite_for_crawler(&config.user_agent, &html, &SocialPreview::default());
    if served.is_rewritten() {
        info!(
            "rewrote {} for {:?} with {} replacement headers",
            config.page,
            config.user_agent,
            served.headers().len()
        );
    }
    Ok(served)
}
