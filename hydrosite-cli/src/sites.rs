//! `sites` command: grid search for the best candidate sites.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use hydrosite_core::{SearchBounds, SearchRequest, SearchResponse, SiteSearch};
use hydrosite_scorer::WeightedSiteScorer;
use hydrosite_solver_grid::GridSearch;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_CRITERIA, ARG_DATASET, CliError, dataset, required, write_json};

pub(crate) const ENV_SITES_DATASET: &str = "HYDROSITE_CMDS_SITES_DATASET";
pub(crate) const ENV_SITES_CRITERIA: &str = "HYDROSITE_CMDS_SITES_CRITERIA";

/// CLI arguments for the `sites` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Sweep a latitude/longitude lattice, skip points within \
                 10 km of an existing asset, and print the best-scoring \
                 sites with search diagnostics. Omitted bounds default to \
                 latitude 8-37 and longitude 68-97.",
    about = "Search for the best candidate sites"
)]
#[ortho_config(prefix = "HYDROSITE")]
pub(crate) struct SitesArgs {
    /// Path to the JSON dataset.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Optimisation criteria, e.g. `market_demand`.
    #[arg(long = ARG_CRITERIA, value_name = "criteria")]
    #[serde(default)]
    pub(crate) criteria: Option<String>,
    /// Number of sites to return.
    #[arg(long, value_name = "n")]
    #[serde(default)]
    pub(crate) number_of_sites: Option<usize>,
    /// Lattice spacing in degrees.
    #[arg(long, value_name = "degrees")]
    #[serde(default)]
    pub(crate) step_degrees: Option<f64>,
    /// Southern edge of the search.
    #[arg(long, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) min_lat: Option<f64>,
    /// Northern edge of the search.
    #[arg(long, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) max_lat: Option<f64>,
    /// Western edge of the search.
    #[arg(long, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) min_lon: Option<f64>,
    /// Eastern edge of the search.
    #[arg(long, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) max_lon: Option<f64>,
}

impl SitesArgs {
    pub(crate) fn into_config(self) -> Result<SitesConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SitesConfig::try_from(merged)
    }
}

/// Resolved `sites` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SitesConfig {
    pub(crate) dataset: Utf8PathBuf,
    pub(crate) request: SearchRequest,
}

impl TryFrom<SitesArgs> for SitesConfig {
    type Error = CliError;

    fn try_from(args: SitesArgs) -> Result<Self, Self::Error> {
        let dataset = required(args.dataset, ARG_DATASET, ENV_SITES_DATASET)?;
        let criteria = required(args.criteria, ARG_CRITERIA, ENV_SITES_CRITERIA)?;
        let mut request = SearchRequest::new(criteria.parse()?);
        if let Some(number_of_sites) = args.number_of_sites {
            request = request.with_number_of_sites(number_of_sites);
        }
        if let Some(step_degrees) = args.step_degrees {
            request = request.with_step_degrees(step_degrees);
        }
        let defaults = request.bounds;
        let bounds = SearchBounds::new(
            args.min_lat.unwrap_or(defaults.min_latitude()),
            args.max_lat.unwrap_or(defaults.max_latitude()),
            args.min_lon.unwrap_or(defaults.min_longitude()),
            args.max_lon.unwrap_or(defaults.max_longitude()),
        )?;
        Ok(Self {
            dataset,
            request: request.with_bounds(bounds),
        })
    }
}

pub(crate) fn run_sites(args: SitesArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let response = execute_sites(&args.into_config()?)?;
    write_json(writer, &response)
}

pub(crate) fn execute_sites(config: &SitesConfig) -> Result<SearchResponse, CliError> {
    let references = dataset::load_dataset(&config.dataset)?;
    let search = GridSearch::new(WeightedSiteScorer::default());
    Ok(search.search(&config.request, &references)?)
}
