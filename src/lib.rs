//! Facade crate for the AI dashboard engine.
//!
//! This crate re-exports the catalog and request types from `dashboard-core`
//! and the weighted scorer from `dashboard-scorer`. The SQLite-backed catalog
//! is exposed behind the `store-sqlite` feature.

#![forbid(unsafe_code)]

pub use dashboard_core::{
    AttributeValues, Capability, CapabilityFlags, CapabilitySet, CatalogStore, CompareRequest,
    LlmRecord, MemoryCatalog, ModelSummary, NumericAttribute, RecommendRequest, Recommendation,
    Recommender, ResultEnvelope, TopN, ValidationError, WeightVector, compare, summaries,
};

#[cfg(feature = "store-sqlite")]
pub use dashboard_core::{SqliteCatalog, SqliteCatalogError, write_catalog};

pub use dashboard_scorer::{AttributeBounds, WeightedSumRecommender, recommend};
