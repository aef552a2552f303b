//! Import command implementation for the dashboard CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use dashboard_core::{LlmRecord, summaries, write_catalog};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CATALOG_DB, ARG_CATALOG_JSON, CliError, ENV_IMPORT_CATALOG, catalog_db_or_default, fs,
    write_envelope,
};

/// CLI arguments for the `import` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Read a JSON array of catalog records and upsert them into \
                 the SQLite catalog, creating the database when missing. \
                 Records replace existing rows with the same id.",
    about = "Import catalog records from JSON"
)]
#[ortho_config(prefix = "DASHBOARD")]
pub(crate) struct ImportArgs {
    /// Path to a JSON file containing an array of catalog records.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalog_path: Option<Utf8PathBuf>,
    /// Path to the SQLite catalog (`catalog.db`).
    #[arg(long = ARG_CATALOG_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog_db: Option<Utf8PathBuf>,
}

/// Resolved `import` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ImportConfig {
    /// JSON records to import.
    pub(crate) catalog_path: Utf8PathBuf,
    /// Destination database.
    pub(crate) catalog_db: Utf8PathBuf,
}

impl TryFrom<ImportArgs> for ImportConfig {
    type Error = CliError;

    fn try_from(args: ImportArgs) -> Result<Self, Self::Error> {
        let catalog_path = args.catalog_path.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG_JSON,
            env: ENV_IMPORT_CATALOG,
        })?;
        Ok(Self {
            catalog_path,
            catalog_db: catalog_db_or_default(args.catalog_db),
        })
    }
}

pub(crate) fn run_import_with(args: ImportArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = ImportConfig::try_from(merged)?;

    fs::require_existing(&config.catalog_path, ARG_CATALOG_JSON)?;
    let records: Vec<LlmRecord> = fs::read_json(&config.catalog_path)?;
    let written = write_catalog(config.catalog_db.as_std_path(), &records)?;
    log::info!("imported {written} records into {}", config.catalog_db);
    write_envelope(writer, summaries(&records))
}
