//! Command-line interface for the AI dashboard engine.
//!
//! Each subcommand reads its inputs from disk, runs one catalog operation,
//! and prints a `{ "result": [...] }` envelope as pretty JSON.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use dashboard_core::{CatalogStore, LlmRecord, ResultEnvelope, SqliteCatalog};
use dashboard_scorer::WeightedSumRecommender;
use serde::Serialize;

mod compare;
mod error;
mod fs;
mod import;
mod list;
mod recommend;

pub use error::CliError;

use compare::{CompareArgs, run_compare_with};
use import::{ImportArgs, run_import_with};
use list::{ListArgs, run_list_with};
use recommend::{RecommendArgs, run_recommend_with};

pub(crate) const ARG_CATALOG_DB: &str = "catalog-db";
pub(crate) const ARG_REQUEST: &str = "request";
pub(crate) const ARG_CATALOG_JSON: &str = "catalog";
pub(crate) const ENV_RECOMMEND_REQUEST: &str = "DASHBOARD_CMDS_RECOMMEND_REQUEST_PATH";
pub(crate) const ENV_COMPARE_REQUEST: &str = "DASHBOARD_CMDS_COMPARE_REQUEST_PATH";
pub(crate) const ENV_IMPORT_CATALOG: &str = "DASHBOARD_CMDS_IMPORT_CATALOG_PATH";
/// Catalog database used when no `--catalog-db` is configured.
pub const DEFAULT_CATALOG_DB: &str = "catalog.db";

/// Run the dashboard CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, inputs, or the
/// catalog are invalid, or when writing to stdout fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    run_command(cli.command, &mut stdout)
}

fn run_command(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Recommend(args) => run_recommend_with(args, &WeightedSumRecommender, writer),
        Command::Compare(args) => run_compare_with(args, writer),
        Command::List(args) => run_list_with(args, writer),
        Command::Import(args) => run_import_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "dashboard",
    about = "Recommend and compare large language models from a local catalog",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank catalogued models for a weighted request.
    Recommend(RecommendArgs),
    /// Show the full records of named models.
    Compare(CompareArgs),
    /// List every catalogued model.
    List(ListArgs),
    /// Load catalog records from JSON into the SQLite catalog.
    Import(ImportArgs),
}

/// Resolve the configured catalog database, falling back to the default.
fn catalog_db_or_default(catalog_db: Option<Utf8PathBuf>) -> Utf8PathBuf {
    catalog_db.unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_CATALOG_DB))
}

/// Open the catalog database and take a snapshot of every record.
fn load_catalog(catalog_db: &Utf8Path) -> Result<Vec<LlmRecord>, CliError> {
    fs::require_existing(catalog_db, ARG_CATALOG_DB)?;
    let catalog = SqliteCatalog::open(catalog_db.as_std_path())?;
    Ok(catalog.fetch_all())
}

/// Print `results` wrapped in a result envelope.
fn write_envelope<T: Serialize>(writer: &mut dyn Write, results: Vec<T>) -> Result<(), CliError> {
    let envelope = ResultEnvelope::new(results);
    let payload = serde_json::to_string_pretty(&envelope).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
