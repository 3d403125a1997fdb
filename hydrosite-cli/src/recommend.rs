//! `recommend` command: investment-filtered recommendations.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use hydrosite_recommend::{CuratedPool, GridSearchPool, Recommendation, generate_recommendations};
use hydrosite_scorer::WeightedSiteScorer;
use hydrosite_solver_grid::GridSearch;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_CRITERIA, ARG_DATASET, ARG_INVESTMENT_RANGE, CliError, dataset, required, write_json};

pub(crate) const ENV_RECOMMEND_DATASET: &str = "HYDROSITE_CMDS_RECOMMEND_DATASET";
pub(crate) const ENV_RECOMMEND_CRITERIA: &str = "HYDROSITE_CMDS_RECOMMEND_CRITERIA";
pub(crate) const ENV_RECOMMEND_INVESTMENT_RANGE: &str =
    "HYDROSITE_CMDS_RECOMMEND_INVESTMENT_RANGE";

/// Where recommendation candidates come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum CandidateSource {
    /// The fixed hand-picked pool.
    #[default]
    Curated,
    /// A live grid search over the dataset.
    Grid,
}

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Generate site recommendations for a criteria, keeping \
                 candidates whose estimated cost falls inside the \
                 investment range (e.g. \"₹10L - ₹50L\", \"₹100L+\"). \
                 Candidates come from the curated pool unless --source grid \
                 is given.",
    about = "Generate investment-filtered recommendations"
)]
#[ortho_config(prefix = "HYDROSITE")]
pub(crate) struct RecommendArgs {
    /// Path to the JSON dataset.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Optimisation criteria, e.g. `cost_optimization`.
    #[arg(long = ARG_CRITERIA, value_name = "criteria")]
    #[serde(default)]
    pub(crate) criteria: Option<String>,
    /// Investment range label.
    #[arg(long = ARG_INVESTMENT_RANGE, value_name = "range")]
    #[serde(default)]
    pub(crate) investment_range: Option<String>,
    /// Number of recommendations to return.
    #[arg(long, value_name = "n")]
    #[serde(default)]
    pub(crate) number_of_sites: Option<usize>,
    /// Candidate source.
    #[arg(long, value_enum, value_name = "source")]
    #[serde(default)]
    pub(crate) source: Option<CandidateSource>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
///
/// Criteria and investment range stay as text; recommendation generation
/// validates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    pub(crate) dataset: Utf8PathBuf,
    pub(crate) criteria: String,
    pub(crate) investment_range: String,
    pub(crate) number_of_sites: Option<usize>,
    pub(crate) source: CandidateSource,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            dataset: required(args.dataset, ARG_DATASET, ENV_RECOMMEND_DATASET)?,
            criteria: required(args.criteria, ARG_CRITERIA, ENV_RECOMMEND_CRITERIA)?,
            investment_range: required(
                args.investment_range,
                ARG_INVESTMENT_RANGE,
                ENV_RECOMMEND_INVESTMENT_RANGE,
            )?,
            number_of_sites: args.number_of_sites,
            source: args.source.unwrap_or_default(),
        })
    }
}

pub(crate) fn run_recommend(args: RecommendArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let recommendations = execute_recommend(&args.into_config()?)?;
    write_json(writer, &recommendations)
}

pub(crate) fn execute_recommend(
    config: &RecommendConfig,
) -> Result<Vec<Recommendation>, CliError> {
    let references = dataset::load_dataset(&config.dataset)?;
    let recommendations = match config.source {
        CandidateSource::Curated => generate_recommendations(
            &CuratedPool,
            &config.criteria,
            &config.investment_range,
            config.number_of_sites,
            &references,
        )?,
        CandidateSource::Grid => {
            let pool = GridSearchPool::new(GridSearch::new(WeightedSiteScorer::default()));
            generate_recommendations(
                &pool,
                &config.criteria,
                &config.investment_range,
                config.number_of_sites,
                &references,
            )?
        }
    };
    Ok(recommendations)
}
