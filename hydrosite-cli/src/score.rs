//! `score` command: score one location.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use hydrosite_core::{GeoPoint, OptimizationCriteria, SiteScore, SiteScorer};
use hydrosite_scorer::WeightedSiteScorer;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CRITERIA, ARG_DATASET, ARG_LATITUDE, ARG_LONGITUDE, CliError, dataset, required,
    write_json,
};

pub(crate) const ENV_SCORE_DATASET: &str = "HYDROSITE_CMDS_SCORE_DATASET";
pub(crate) const ENV_SCORE_LATITUDE: &str = "HYDROSITE_CMDS_SCORE_LATITUDE";
pub(crate) const ENV_SCORE_LONGITUDE: &str = "HYDROSITE_CMDS_SCORE_LONGITUDE";
pub(crate) const ENV_SCORE_CRITERIA: &str = "HYDROSITE_CMDS_SCORE_CRITERIA";

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score a single location against the dataset. Prints the \
                 rounded composite score and the five factor scores.",
    about = "Score a single location"
)]
#[ortho_config(prefix = "HYDROSITE")]
pub(crate) struct ScoreArgs {
    /// Path to the JSON dataset.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Latitude of the site in decimal degrees.
    #[arg(long = ARG_LATITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) latitude: Option<f64>,
    /// Longitude of the site in decimal degrees.
    #[arg(long = ARG_LONGITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) longitude: Option<f64>,
    /// Optimisation criteria, e.g. `renewable_proximity`.
    #[arg(long = ARG_CRITERIA, value_name = "criteria")]
    #[serde(default)]
    pub(crate) criteria: Option<String>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScoreConfig {
    pub(crate) dataset: Utf8PathBuf,
    pub(crate) point: GeoPoint,
    pub(crate) criteria: OptimizationCriteria,
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let dataset = required(args.dataset, ARG_DATASET, ENV_SCORE_DATASET)?;
        let latitude = required(args.latitude, ARG_LATITUDE, ENV_SCORE_LATITUDE)?;
        let longitude = required(args.longitude, ARG_LONGITUDE, ENV_SCORE_LONGITUDE)?;
        let criteria = required(args.criteria, ARG_CRITERIA, ENV_SCORE_CRITERIA)?;
        Ok(Self {
            dataset,
            point: GeoPoint::new(latitude, longitude)?,
            criteria: criteria.parse()?,
        })
    }
}

pub(crate) fn run_score(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let score = execute_score(&args.into_config()?)?;
    write_json(writer, &score)
}

pub(crate) fn execute_score(config: &ScoreConfig) -> Result<SiteScore, CliError> {
    let references = dataset::load_dataset(&config.dataset)?;
    Ok(WeightedSiteScorer::default().score_site(config.point, config.criteria, &references))
}
