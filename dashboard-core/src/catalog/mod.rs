//! Read-only access to the model catalog.
//!
//! The `CatalogStore` trait hands out a consistent snapshot of every
//! [`LlmRecord`]. Operations fetch once per call and work on that snapshot;
//! nothing here mutates shared state.

use crate::{LlmRecord, ModelSummary};

#[cfg(feature = "store-sqlite")]
mod sqlite;

#[cfg(feature = "store-sqlite")]
pub use sqlite::{CATALOG_TABLE, SqliteCatalog, SqliteCatalogError, write_catalog};

/// Read-only access to a catalog snapshot.
///
/// Implementations return records in catalog order (ascending `id`) and must
/// return the same data for every call made against the same instance.
///
/// # Examples
///
/// ```rust
/// use dashboard_core::{AttributeValues, CapabilityFlags, CatalogStore, LlmRecord};
///
/// struct SingleModel(LlmRecord);
///
/// impl CatalogStore for SingleModel {
///     fn fetch_all(&self) -> Vec<LlmRecord> {
///         vec![self.0.clone()]
///     }
/// }
///
/// let record = LlmRecord::new(1, "Atlas", AttributeValues::default(), CapabilityFlags::default());
/// let store = SingleModel(record.clone());
/// assert_eq!(store.fetch_all(), vec![record]);
/// ```
pub trait CatalogStore {
    /// Return every record in the catalog.
    fn fetch_all(&self) -> Vec<LlmRecord>;
}

/// In-memory catalog snapshot.
///
/// Records are kept sorted by `id` so iteration order matches a persisted
/// catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryCatalog {
    records: Vec<LlmRecord>,
}

impl MemoryCatalog {
    /// Create a catalog from a collection of records.
    #[must_use]
    pub fn with_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = LlmRecord>,
    {
        let mut sorted: Vec<_> = records.into_iter().collect();
        sorted.sort_by_key(|record| record.id);
        Self { records: sorted }
    }

    /// Borrow the records in catalog order.
    #[must_use]
    pub fn records(&self) -> &[LlmRecord] {
        &self.records
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Report whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CatalogStore for MemoryCatalog {
    fn fetch_all(&self) -> Vec<LlmRecord> {
        self.records.clone()
    }
}

/// Return the full record of every model whose name is in `names`.
///
/// Matching is exact; results follow catalog order, not the order of `names`.
/// Unknown names are skipped.
///
/// # Examples
/// ```
/// use dashboard_core::{AttributeValues, CapabilityFlags, LlmRecord, compare};
///
/// let catalog = vec![
///     LlmRecord::new(1, "Atlas", AttributeValues::default(), CapabilityFlags::default()),
///     LlmRecord::new(2, "Borealis", AttributeValues::default(), CapabilityFlags::default()),
/// ];
/// let names = vec!["Borealis".to_owned(), "Atlas".to_owned()];
/// let found: Vec<_> = compare(&catalog, &names).iter().map(|r| r.id).collect();
/// assert_eq!(found, vec![1, 2]);
/// ```
#[must_use]
pub fn compare<'a>(catalog: &'a [LlmRecord], names: &[String]) -> Vec<&'a LlmRecord> {
    catalog
        .iter()
        .filter(|record| names.iter().any(|name| *name == record.name))
        .collect()
}

/// Summarise every record as `{ id, Name, Description }`, in catalog order.
#[must_use]
pub fn summaries(catalog: &[LlmRecord]) -> Vec<ModelSummary> {
    catalog.iter().map(ModelSummary::from).collect()
}
