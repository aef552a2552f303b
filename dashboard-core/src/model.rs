//! Catalog records for individual models.

use serde::{Deserialize, Serialize};

use crate::{AttributeValues, CapabilityFlags};

/// A single catalogued large-language-model offering.
///
/// Serialises with the catalog's wire names (`Name`, `Development_Company`,
/// the ten numeric attributes, the eight capability flags, `Description`).
///
/// # Examples
/// ```
/// use dashboard_core::{AttributeValues, Capability, CapabilityFlags, LlmRecord};
///
/// let record = LlmRecord::new(
///     1,
///     "Atlas",
///     AttributeValues::splat(5.0),
///     CapabilityFlags::supporting([Capability::TextGeneration]),
/// )
/// .with_description("General-purpose assistant");
///
/// assert_eq!(record.name, "Atlas");
/// assert!(record.capabilities.supports(Capability::TextGeneration));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmRecord {
    /// Stable catalog identifier.
    pub id: u64,
    /// Model name, unique within a catalog snapshot.
    #[serde(rename = "Name")]
    pub name: String,
    /// Organisation that develops the model.
    #[serde(rename = "Development_Company", default)]
    pub development_company: String,
    /// Numeric attributes used for scoring.
    #[serde(flatten)]
    pub attributes: AttributeValues,
    /// Supported capabilities.
    #[serde(flatten)]
    pub capabilities: CapabilityFlags,
    /// Free-text description.
    #[serde(rename = "Description", default)]
    pub description: String,
}

impl LlmRecord {
    /// Construct a record with empty company and description.
    #[must_use]
    pub fn new(
        id: u64,
        name: impl Into<String>,
        attributes: AttributeValues,
        capabilities: CapabilityFlags,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            development_company: String::new(),
            attributes,
            capabilities,
            description: String::new(),
        }
    }

    /// Set the developing company while consuming `self`.
    #[must_use]
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.development_company = company.into();
        self
    }

    /// Set the description while consuming `self`.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Identity and description of a model, without its attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSummary {
    /// Stable catalog identifier.
    pub id: u64,
    /// Model name.
    #[serde(rename = "Name")]
    pub name: String,
    /// Free-text description.
    #[serde(rename = "Description")]
    pub description: String,
}

impl From<&LlmRecord> for ModelSummary {
    fn from(record: &LlmRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            description: record.description.clone(),
        }
    }
}
