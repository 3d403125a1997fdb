//! `summary` command: dataset counts and map geometry.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use hydrosite_core::{
    AnalysisSummary, GeoPoint, Located, MapBounds, PipelineLink, ReferenceSet, calculate_bounds,
    centre, pipeline_network,
};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_DATASET, CliError, dataset, required, write_json};

pub(crate) const ENV_SUMMARY_DATASET: &str = "HYDROSITE_CMDS_SUMMARY_DATASET";

/// CLI arguments for the `summary` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Count the dataset's collections and report the padded \
                 bounds, centre and candidate pipeline links of its \
                 infrastructure.",
    about = "Summarise the dataset"
)]
#[ortho_config(prefix = "HYDROSITE")]
pub(crate) struct SummaryArgs {
    /// Path to the JSON dataset.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
}

/// Summary printed by the `summary` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SummaryReport {
    pub(crate) summary: AnalysisSummary,
    /// Padded bounds over every location in the dataset.
    pub(crate) bounds: Option<MapBounds>,
    /// Mean of every location in the dataset.
    pub(crate) centre: GeoPoint,
    pub(crate) pipelines: Vec<PipelineLink>,
}

impl SummaryReport {
    pub(crate) fn new(references: &ReferenceSet) -> Self {
        let locations: Vec<GeoPoint> = references
            .assets()
            .iter()
            .map(Located::location)
            .chain(references.renewables().iter().map(Located::location))
            .chain(references.demand_centers().iter().map(Located::location))
            .collect();
        Self {
            summary: references.summary(),
            bounds: calculate_bounds(&locations),
            centre: centre(&locations),
            pipelines: pipeline_network(references.assets()),
        }
    }
}

impl SummaryArgs {
    pub(crate) fn into_config(self) -> Result<SummaryConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SummaryConfig::try_from(merged)
    }
}

/// Resolved `summary` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SummaryConfig {
    pub(crate) dataset: Utf8PathBuf,
}

impl TryFrom<SummaryArgs> for SummaryConfig {
    type Error = CliError;

    fn try_from(args: SummaryArgs) -> Result<Self, Self::Error> {
        let dataset = required(args.dataset, ARG_DATASET, ENV_SUMMARY_DATASET)?;
        Ok(Self { dataset })
    }
}

pub(crate) fn run_summary(args: SummaryArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let report = execute_summary(&args.into_config()?)?;
    write_json(writer, &report)
}

pub(crate) fn execute_summary(config: &SummaryConfig) -> Result<SummaryReport, CliError> {
    let references = dataset::load_dataset(&config.dataset)?;
    Ok(SummaryReport::new(&references))
}
