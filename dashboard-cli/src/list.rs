//! List command implementation for the dashboard CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use dashboard_core::summaries;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_CATALOG_DB, CliError, catalog_db_or_default, load_catalog, write_envelope};

/// CLI arguments for the `list` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "List the id, name, and description of every catalogued model")]
#[ortho_config(prefix = "DASHBOARD")]
pub(crate) struct ListArgs {
    /// Path to the SQLite catalog (`catalog.db`).
    #[arg(long = ARG_CATALOG_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog_db: Option<Utf8PathBuf>,
}

pub(crate) fn run_list_with(args: ListArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let catalog_db = catalog_db_or_default(merged.catalog_db);
    let catalog = load_catalog(&catalog_db)?;
    write_envelope(writer, summaries(&catalog))
}
