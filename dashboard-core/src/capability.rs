//! Capability flags describing what each model can do.
//!
//! Catalog rows store capabilities as `0`/`1` integers. [`CapabilityFlags`]
//! keeps that wire format while exposing a typed `supports` check, and
//! [`CapabilitySet`] carries the capabilities a caller requires.

use std::collections::BTreeSet;
use std::convert::Infallible;

use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// A functional category a model may support.
///
/// # Examples
/// ```
/// use dashboard_core::Capability;
///
/// assert_eq!(Capability::TextGeneration.as_str(), "Text_Generation");
/// assert_eq!("Summarization".parse(), Ok(Capability::Summarization));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    /// Free-form text generation.
    TextGeneration,
    /// Image synthesis.
    ImageGeneration,
    /// Music and song synthesis.
    SongGeneration,
    /// Source code generation.
    CodeGeneration,
    /// Tabular data processing.
    TableProcessing,
    /// Document summarisation.
    Summarization,
    /// Multi-step logical reasoning.
    LogicalReasoning,
    /// Mathematical problem solving.
    MathematicalProblemSolving,
}

impl Capability {
    /// Every capability in canonical order.
    pub const ALL: [Self; 8] = [
        Self::TextGeneration,
        Self::ImageGeneration,
        Self::SongGeneration,
        Self::CodeGeneration,
        Self::TableProcessing,
        Self::Summarization,
        Self::LogicalReasoning,
        Self::MathematicalProblemSolving,
    ];

    /// Return the wire name used in requests and catalog payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TextGeneration => "Text_Generation",
            Self::ImageGeneration => "Image_Generation",
            Self::SongGeneration => "Song_Generation",
            Self::CodeGeneration => "Code_Generation",
            Self::TableProcessing => "Table_Processing",
            Self::Summarization => "Summarization",
            Self::LogicalReasoning => "Logical_Reasoning",
            Self::MathematicalProblemSolving => "Mathematical_Problem_Solving",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Capability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cap| cap.as_str() == s)
            .ok_or_else(|| format!("unknown capability '{s}'"))
    }
}

/// Error raised when a stored flag is neither `0` nor `1`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("capability {capability} flag must be 0 or 1, found {value}")]
pub struct CapabilityFlagError {
    /// Capability whose flag was invalid.
    pub capability: Capability,
    /// Raw value that was rejected.
    pub value: i64,
}

/// Per-model capability flags, each `0` or `1`.
///
/// # Examples
/// ```
/// use dashboard_core::{Capability, CapabilityFlags, CapabilitySet};
///
/// let flags = CapabilityFlags::supporting([Capability::TextGeneration]);
/// assert!(flags.supports(Capability::TextGeneration));
/// assert!(!flags.supports(Capability::ImageGeneration));
///
/// let required = CapabilitySet::from_iter([Capability::TextGeneration]);
/// assert!(flags.satisfies(&required));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CapabilityFlags {
    #[serde(rename = "Text_Generation", deserialize_with = "flag")]
    text_generation: u8,
    #[serde(rename = "Image_Generation", deserialize_with = "flag")]
    image_generation: u8,
    #[serde(rename = "Song_Generation", deserialize_with = "flag")]
    song_generation: u8,
    #[serde(rename = "Code_Generation", deserialize_with = "flag")]
    code_generation: u8,
    #[serde(rename = "Table_Processing", deserialize_with = "flag")]
    table_processing: u8,
    #[serde(rename = "Summarization", deserialize_with = "flag")]
    summarization: u8,
    #[serde(rename = "Logical_Reasoning", deserialize_with = "flag")]
    logical_reasoning: u8,
    #[serde(rename = "Mathematical_Problem_Solving", deserialize_with = "flag")]
    mathematical_problem_solving: u8,
}

impl CapabilityFlags {
    /// Build flags from a fallible per-capability closure.
    ///
    /// # Errors
    /// Returns the first error produced by `f`.
    pub fn try_from_fn<F, E>(mut f: F) -> Result<Self, E>
    where
        F: FnMut(Capability) -> Result<bool, E>,
    {
        Ok(Self {
            text_generation: u8::from(f(Capability::TextGeneration)?),
            image_generation: u8::from(f(Capability::ImageGeneration)?),
            song_generation: u8::from(f(Capability::SongGeneration)?),
            code_generation: u8::from(f(Capability::CodeGeneration)?),
            table_processing: u8::from(f(Capability::TableProcessing)?),
            summarization: u8::from(f(Capability::Summarization)?),
            logical_reasoning: u8::from(f(Capability::LogicalReasoning)?),
            mathematical_problem_solving: u8::from(f(Capability::MathematicalProblemSolving)?),
        })
    }

    /// Build flags with exactly the listed capabilities set.
    #[must_use]
    pub fn supporting<I>(capabilities: I) -> Self
    where
        I: IntoIterator<Item = Capability>,
    {
        let set: CapabilitySet = capabilities.into_iter().collect();
        match Self::try_from_fn::<_, Infallible>(|cap| Ok(set.contains(cap))) {
            Ok(flags) => flags,
            Err(never) => match never {},
        }
    }

    /// Interpret a raw stored flag, rejecting anything but `0` or `1`.
    ///
    /// # Errors
    /// Returns [`CapabilityFlagError`] when `value` is out of range.
    pub const fn parse_flag(
        capability: Capability,
        value: i64,
    ) -> Result<bool, CapabilityFlagError> {
        match value {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(CapabilityFlagError { capability, value }),
        }
    }

    /// Return the stored flag for `capability`.
    #[must_use]
    pub const fn flag(&self, capability: Capability) -> u8 {
        match capability {
            Capability::TextGeneration => self.text_generation,
            Capability::ImageGeneration => self.image_generation,
            Capability::SongGeneration => self.song_generation,
            Capability::CodeGeneration => self.code_generation,
            Capability::TableProcessing => self.table_processing,
            Capability::Summarization => self.summarization,
            Capability::LogicalReasoning => self.logical_reasoning,
            Capability::MathematicalProblemSolving => self.mathematical_problem_solving,
        }
    }

    /// Report whether the flag for `capability` equals `1`.
    #[must_use]
    pub const fn supports(&self, capability: Capability) -> bool {
        self.flag(capability) == 1
    }

    /// Report whether every capability in `required` is supported.
    ///
    /// An empty requirement set is satisfied by every model.
    #[must_use]
    pub fn satisfies(&self, required: &CapabilitySet) -> bool {
        required.iter().all(|capability| self.supports(capability))
    }
}

fn flag<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = u8::deserialize(deserializer)?;
    if value > 1 {
        return Err(D::Error::invalid_value(
            Unexpected::Unsigned(u64::from(value)),
            &"0 or 1",
        ));
    }
    Ok(value)
}

/// Capabilities a caller requires a model to support.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CapabilitySet {
    capabilities: BTreeSet<Capability>,
}

impl CapabilitySet {
    /// Construct an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            capabilities: BTreeSet::new(),
        }
    }

    /// Add a capability; duplicates collapse.
    pub fn insert(&mut self, capability: Capability) {
        self.capabilities.insert(capability);
    }

    /// Report whether `capability` is required.
    #[must_use]
    pub fn contains(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// Iterate over required capabilities in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.capabilities.iter().copied()
    }

    /// Number of distinct required capabilities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    /// Report whether no capability is required.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self {
            capabilities: iter.into_iter().collect(),
        }
    }
}
