//! Core domain types for the AI dashboard engine.
//!
//! The crate models catalog entries for large-language-model offerings, the
//! request boundary that validates recommendation and comparison requests,
//! and the read-only catalog access used by the scorer. Scoring itself lives
//! in `dashboard-scorer`; this crate only defines the [`Recommender`] seam.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod attribute;
pub mod capability;
pub mod catalog;
mod envelope;
pub mod model;
mod recommender;
pub mod request;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use attribute::{AttributeValues, NumericAttribute};
pub use capability::{Capability, CapabilityFlagError, CapabilityFlags, CapabilitySet};
pub use catalog::{CatalogStore, MemoryCatalog, compare, summaries};
#[cfg(feature = "store-sqlite")]
pub use catalog::{SqliteCatalog, SqliteCatalogError, write_catalog};
pub use envelope::ResultEnvelope;
pub use model::{LlmRecord, ModelSummary};
pub use recommender::{Recommendation, Recommender};
pub use request::{CompareRequest, RecommendRequest, TopN, ValidationError, WeightVector};
