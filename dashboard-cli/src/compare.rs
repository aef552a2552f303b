//! Compare command implementation for the dashboard CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use dashboard_core::{CompareRequest, LlmRecord, compare};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    ARG_CATALOG_DB, ARG_REQUEST, CliError, ENV_COMPARE_REQUEST, catalog_db_or_default, fs,
    load_catalog, write_envelope,
};

/// CLI arguments for the `compare` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Print the full catalog records of the models named in a \
                 JSON request of the form { \"names\": [...] }. Unknown names \
                 are skipped; results follow catalog order.",
    about = "Compare named models side by side"
)]
#[ortho_config(prefix = "DASHBOARD")]
pub(crate) struct CompareArgs {
    /// Path to a JSON file listing the model names to compare.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to the SQLite catalog (`catalog.db`).
    #[arg(long = ARG_CATALOG_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog_db: Option<Utf8PathBuf>,
}

/// Resolved `compare` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CompareConfig {
    pub(crate) request_path: Utf8PathBuf,
    pub(crate) catalog_db: Utf8PathBuf,
}

impl TryFrom<CompareArgs> for CompareConfig {
    type Error = CliError;

    fn try_from(args: CompareArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_COMPARE_REQUEST,
        })?;
        Ok(Self {
            request_path,
            catalog_db: catalog_db_or_default(args.catalog_db),
        })
    }
}

pub(crate) fn run_compare_with(args: CompareArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = CompareConfig::try_from(merged)?;

    fs::require_existing(&config.request_path, ARG_REQUEST)?;
    let payload: Value = fs::read_json(&config.request_path)?;
    let request =
        CompareRequest::from_json(&payload).map_err(|source| CliError::InvalidRequest {
            path: config.request_path.clone(),
            source,
        })?;

    let catalog = load_catalog(&config.catalog_db)?;
    let matches: Vec<&LlmRecord> = compare(&catalog, &request.names);
    log::info!(
        "matched {} of {} requested models",
        matches.len(),
        request.names.len()
    );
    write_envelope(writer, matches)
}
