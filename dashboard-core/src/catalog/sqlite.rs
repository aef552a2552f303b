//! SQLite-backed catalog snapshot and importer.
//!
//! The catalog lives in a single `llm` table with one column per numeric
//! attribute and one `0`/`1` integer column per capability. Opening a
//! [`SqliteCatalog`] reads every row once; later calls serve that snapshot.

use std::{
    collections::HashSet,
    fmt,
    path::{Path, PathBuf},
};

use rusqlite::{Connection, OpenFlags, OptionalExtension, Row, params_from_iter, types::Value};
use thiserror::Error;

use crate::{
    AttributeValues, Capability, CapabilityFlagError, CapabilityFlags, LlmRecord,
    NumericAttribute,
};

use super::CatalogStore;

/// Name of the table holding catalog rows.
pub const CATALOG_TABLE: &str = "llm";

/// Error raised when reading or writing the SQLite catalog.
#[derive(Debug, Error)]
pub enum SqliteCatalogError {
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite database at {path}: {source}")]
    OpenDatabase {
        /// Location of the SQLite database on disk.
        path: PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// Preparing or executing a statement failed.
    #[error("failed to {operation}: {source}")]
    Query {
        /// Description of the failed operation.
        operation: &'static str,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// A stored identifier was negative.
    #[error("catalog id {id} is outside the supported range")]
    InvalidId {
        /// Identifier read from SQLite.
        id: i64,
    },
    /// A record identifier cannot be stored as a SQLite integer.
    #[error("catalog id {id} does not fit in a SQLite integer")]
    IdOutOfRange {
        /// Identifier of the rejected record.
        id: u64,
    },
    /// A stored capability flag was neither `0` nor `1`.
    #[error("invalid capability flag for catalog entry {id}: {source}")]
    InvalidFlag {
        /// Identifier of the affected record.
        id: u64,
        /// Details of the rejected flag.
        #[source]
        source: CapabilityFlagError,
    },
    /// Two records in one import share a name.
    #[error("catalog import contains duplicate model name '{name}'")]
    DuplicateName {
        /// The repeated name.
        name: String,
    },
    /// An imported record reuses the name of a stored entry with another id.
    #[error("model name '{name}' already belongs to catalog entry {existing_id}, not {id}")]
    NameTaken {
        /// The contested name.
        name: String,
        /// Identifier of the stored entry holding the name.
        existing_id: u64,
        /// Identifier of the rejected record.
        id: u64,
    },
}

/// Read-only catalog snapshot loaded from SQLite.
pub struct SqliteCatalog {
    records: Vec<LlmRecord>,
}

impl fmt::Debug for SqliteCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteCatalog")
            .field("entries", &self.records.len())
            .finish_non_exhaustive()
    }
}

impl SqliteCatalog {
    /// Open the database read-only and load every catalog row.
    ///
    /// # Errors
    /// Returns [`SqliteCatalogError`] when the database cannot be opened, the
    /// table cannot be read, or a row holds an invalid id or flag.
    pub fn open<P>(database_path: P) -> Result<Self, SqliteCatalogError>
    where
        P: AsRef<Path>,
    {
        let database_path = database_path.as_ref();
        let connection =
            Connection::open_with_flags(database_path, OpenFlags::SQLITE_OPEN_READ_ONLY).map_err(
                |source| SqliteCatalogError::OpenDatabase {
                    path: database_path.to_path_buf(),
                    source,
                },
            )?;
        let records = load_records(&connection)?;
        log::debug!(
            "loaded {} catalog entries from {}",
            records.len(),
            database_path.display()
        );
        Ok(Self { records })
    }

    /// Borrow the loaded records in catalog order.
    #[must_use]
    pub fn records(&self) -> &[LlmRecord] {
        &self.records
    }
}

impl CatalogStore for SqliteCatalog {
    fn fetch_all(&self) -> Vec<LlmRecord> {
        self.records.clone()
    }
}

/// Create the catalog table when missing and upsert `records` into it.
///
/// All rows are written in one transaction. Existing rows with the same id
/// are updated in place. Returns the number of records written.
///
/// # Errors
/// Returns [`SqliteCatalogError::DuplicateName`] before touching the database
/// when two records share a name, [`SqliteCatalogError::NameTaken`] when a
/// record's name is stored under a different id (nothing is committed), and
/// other variants for SQLite failures.
pub fn write_catalog<P>(database_path: P, records: &[LlmRecord]) -> Result<usize, SqliteCatalogError>
where
    P: AsRef<Path>,
{
    ensure_unique_names(records)?;
    let database_path = database_path.as_ref();
    let mut connection =
        Connection::open(database_path).map_err(|source| SqliteCatalogError::OpenDatabase {
            path: database_path.to_path_buf(),
            source,
        })?;
    connection
        .execute_batch(&create_table_sql())
        .map_err(|source| SqliteCatalogError::Query {
            operation: "create catalog table",
            source,
        })?;

    let transaction = connection
        .transaction()
        .map_err(|source| SqliteCatalogError::Query {
            operation: "begin catalog transaction",
            source,
        })?;
    {
        let mut exists = transaction
            .prepare(&format!("SELECT 1 FROM {CATALOG_TABLE} WHERE id = ?1"))
            .map_err(|source| SqliteCatalogError::Query {
                operation: "prepare catalog lookup",
                source,
            })?;
        let mut owner = transaction
            .prepare(&format!("SELECT id FROM {CATALOG_TABLE} WHERE name = ?1"))
            .map_err(|source| SqliteCatalogError::Query {
                operation: "prepare catalog name lookup",
                source,
            })?;
        let mut insert = transaction
            .prepare(&insert_sql())
            .map_err(|source| SqliteCatalogError::Query {
                operation: "prepare catalog insert",
                source,
            })?;
        for record in records {
            let id = i64::try_from(record.id)
                .map_err(|_| SqliteCatalogError::IdOutOfRange { id: record.id })?;
            let holder: Option<i64> = owner
                .query_row([record.name.as_str()], |row| row.get(0))
                .optional()
                .map_err(|source| SqliteCatalogError::Query {
                    operation: "look up catalog name",
                    source,
                })?;
            if let Some(existing) = holder.filter(|existing| *existing != id) {
                return Err(SqliteCatalogError::NameTaken {
                    name: record.name.clone(),
                    existing_id: u64::try_from(existing)
                        .map_err(|_| SqliteCatalogError::InvalidId { id: existing })?,
                    id: record.id,
                });
            }
            let replacing = exists
                .exists([id])
                .map_err(|source| SqliteCatalogError::Query {
                    operation: "look up catalog entry",
                    source,
                })?;
            if replacing {
                log::warn!("updating catalog entry {id} with '{}'", record.name);
            }
            insert
                .execute(params_from_iter(record_values(id, record)))
                .map_err(|source| SqliteCatalogError::Query {
                    operation: "insert catalog entry",
                    source,
                })?;
        }
    }
    transaction
        .commit()
        .map_err(|source| SqliteCatalogError::Query {
            operation: "commit catalog transaction",
            source,
        })?;
    Ok(records.len())
}

const fn attribute_column(attr: NumericAttribute) -> &'static str {
    match attr {
        NumericAttribute::Price => "price",
        NumericAttribute::ResponseSpeed => "response_speed",
        NumericAttribute::Accuracy => "accuracy",
        NumericAttribute::EthicalTraining => "ethical_training",
        NumericAttribute::GreenComputingResources => "green_computing_resources",
        NumericAttribute::LocalDeploymentCapability => "local_deployment_capability",
        NumericAttribute::TrainingResourceRequirements => "training_resource_requirements",
        NumericAttribute::FineTuningDifficulty => "fine_tuning_difficulty",
        NumericAttribute::MultilingualSupportCapability => "multilingual_support_capability",
        NumericAttribute::ModelScalability => "model_scalability",
    }
}

const fn capability_column(capability: Capability) -> &'static str {
    match capability {
        Capability::TextGeneration => "text_generation",
        Capability::ImageGeneration => "image_generation",
        Capability::SongGeneration => "song_generation",
        Capability::CodeGeneration => "code_generation",
        Capability::TableProcessing => "table_processing",
        Capability::Summarization => "summarization",
        Capability::LogicalReasoning => "logical_reasoning",
        Capability::MathematicalProblemSolving => "mathematical_problem_solving",
    }
}

/// Column names in storage order.
fn columns() -> Vec<&'static str> {
    let mut columns = vec!["id", "name", "development_company"];
    columns.extend(NumericAttribute::ALL.into_iter().map(attribute_column));
    columns.extend(Capability::ALL.into_iter().map(capability_column));
    columns.push("description");
    columns
}

fn create_table_sql() -> String {
    let attributes = NumericAttribute::ALL
        .into_iter()
        .map(|attr| format!("    {} REAL NOT NULL,", attribute_column(attr)));
    let capabilities = Capability::ALL
        .into_iter()
        .map(|cap| format!("    {} INTEGER NOT NULL DEFAULT 0,", capability_column(cap)));
    let body: Vec<String> = attributes.chain(capabilities).collect();
    format!(
        "CREATE TABLE IF NOT EXISTS {CATALOG_TABLE} (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    development_company TEXT NOT NULL DEFAULT '',
{}
    description TEXT NOT NULL DEFAULT ''
)",
        body.join("\n")
    )
}

/// Upsert keyed on `id`; a clash on the unique `name` column still fails.
fn insert_sql() -> String {
    let columns = columns();
    let placeholders: Vec<String> = (1..=columns.len()).map(|idx| format!("?{idx}")).collect();
    let updates: Vec<String> = columns
        .iter()
        .filter(|column| **column != "id")
        .map(|column| format!("{column} = excluded.{column}"))
        .collect();
    format!(
        "INSERT INTO {CATALOG_TABLE} ({}) VALUES ({}) ON CONFLICT(id) DO UPDATE SET {}",
        columns.join(", "),
        placeholders.join(", "),
        updates.join(", ")
    )
}

fn record_values(id: i64, record: &LlmRecord) -> Vec<Value> {
    let mut values = vec![
        Value::Integer(id),
        Value::Text(record.name.clone()),
        Value::Text(record.development_company.clone()),
    ];
    values.extend(record.attributes.iter().map(|(_, value)| Value::Real(value)));
    values.extend(
        Capability::ALL
            .into_iter()
            .map(|cap| Value::Integer(i64::from(record.capabilities.flag(cap)))),
    );
    values.push(Value::Text(record.description.clone()));
    values
}

fn ensure_unique_names(records: &[LlmRecord]) -> Result<(), SqliteCatalogError> {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.name.as_str()) {
            return Err(SqliteCatalogError::DuplicateName {
                name: record.name.clone(),
            });
        }
    }
    Ok(())
}

fn load_records(connection: &Connection) -> Result<Vec<LlmRecord>, SqliteCatalogError> {
    let sql = format!(
        "SELECT {} FROM {CATALOG_TABLE} ORDER BY id",
        columns().join(", ")
    );
    let mut statement = connection
        .prepare(&sql)
        .map_err(|source| SqliteCatalogError::Query {
            operation: "prepare catalog selection",
            source,
        })?;
    let mut rows = statement
        .query([])
        .map_err(|source| SqliteCatalogError::Query {
            operation: "query catalog",
            source,
        })?;

    let mut records = Vec::new();
    while let Some(row) = rows.next().map_err(|source| SqliteCatalogError::Query {
        operation: "read catalog row",
        source,
    })? {
        records.push(decode_row(row)?);
    }
    Ok(records)
}

const fn decode_error(source: rusqlite::Error) -> SqliteCatalogError {
    SqliteCatalogError::Query {
        operation: "decode catalog row",
        source,
    }
}

fn decode_row(row: &Row<'_>) -> Result<LlmRecord, SqliteCatalogError> {
    let raw_id: i64 = row.get("id").map_err(decode_error)?;
    let id = u64::try_from(raw_id).map_err(|_| SqliteCatalogError::InvalidId { id: raw_id })?;
    let name: String = row.get("name").map_err(decode_error)?;
    let development_company: String = row.get("development_company").map_err(decode_error)?;
    let attributes =
        AttributeValues::try_from_fn(|attr| row.get::<_, f64>(attribute_column(attr)))
            .map_err(decode_error)?;
    let capabilities = CapabilityFlags::try_from_fn(|capability| {
        let raw: i64 = row
            .get(capability_column(capability))
            .map_err(decode_error)?;
        CapabilityFlags::parse_flag(capability, raw)
            .map_err(|source| SqliteCatalogError::InvalidFlag { id, source })
    })?;
    let description: String = row.get("description").map_err(decode_error)?;

    Ok(LlmRecord {
        id,
        name,
        development_company,
        attributes,
        capabilities,
        description,
    })
}
