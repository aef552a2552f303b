//! Recommend command implementation for the dashboard CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use dashboard_core::{RecommendRequest, Recommendation, Recommender};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    ARG_CATALOG_DB, ARG_REQUEST, CliError, ENV_RECOMMEND_REQUEST, catalog_db_or_default, fs,
    load_catalog, write_envelope,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank catalogued models for a request. The request file is a \
                 JSON object with a `Service` array of required capabilities, \
                 one numeric weight per attribute, and an optional `top_n`.",
    about = "Recommend models for a weighted request"
)]
#[ortho_config(prefix = "DASHBOARD")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file containing the recommendation request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to the SQLite catalog (`catalog.db`).
    #[arg(long = ARG_CATALOG_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog_db: Option<Utf8PathBuf>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Path to the SQLite catalog.
    pub(crate) catalog_db: Utf8PathBuf,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_RECOMMEND_REQUEST,
        })?;
        Ok(Self {
            request_path,
            catalog_db: catalog_db_or_default(args.catalog_db),
        })
    }
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    recommender: &dyn Recommender,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let recommendations = execute_recommend(&config, recommender)?;
    write_envelope(writer, recommendations)
}

pub(crate) fn execute_recommend(
    config: &RecommendConfig,
    recommender: &dyn Recommender,
) -> Result<Vec<Recommendation>, CliError> {
    let request = load_recommend_request(config)?;
    let catalog = load_catalog(&config.catalog_db)?;
    let recommendations = recommender.recommend(&catalog, &request);
    log::info!(
        "recommended {} of {} catalogued models",
        recommendations.len(),
        catalog.len()
    );
    Ok(recommendations)
}

/// Loads and validates the recommendation request named by `config`.
pub(crate) fn load_recommend_request(
    config: &RecommendConfig,
) -> Result<RecommendRequest, CliError> {
    fs::require_existing(&config.request_path, ARG_REQUEST)?;
    let payload: Value = fs::read_json(&config.request_path)?;
    RecommendRequest::from_json(&payload).map_err(|source| CliError::InvalidRequest {
        path: config.request_path.clone(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
