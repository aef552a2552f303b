//! Request boundary: decode and validate inbound requests.
//!
//! Requests arrive as loosely-typed JSON objects. Everything here runs before
//! the scorer, which assumes well-formed input and has no recovery path of its
//! own. Malformed payloads surface as [`ValidationError`], the equivalent of a
//! 4xx response.

use std::num::NonZeroUsize;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::{AttributeValues, Capability, CapabilitySet, NumericAttribute};

/// Field carrying the required capability names.
pub const SERVICE_FIELD: &str = "Service";
/// Optional field overriding the number of recommendations returned.
pub const TOP_N_FIELD: &str = "top_n";
/// Field carrying the model names to compare.
pub const NAMES_FIELD: &str = "names";

/// Errors raised while validating an inbound request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The payload was not a JSON object.
    #[error("request body must be a JSON object")]
    NotAnObject,
    /// A required field was absent.
    #[error("missing required field '{field}'")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },
    /// A weight field held something other than a number.
    #[error("field '{field}' must be a number")]
    NotNumeric {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A weight was NaN or infinite.
    #[error("weight for '{field}' must be finite")]
    NonFiniteWeight {
        /// Name of the offending attribute.
        field: &'static str,
    },
    /// The capability list was not an array of strings.
    #[error("field 'Service' must be an array of capability names")]
    InvalidServiceList,
    /// A requested capability is not one the catalog records.
    #[error("unknown capability '{name}'")]
    UnknownCapability {
        /// Name supplied by the caller.
        name: String,
    },
    /// The result limit was not a positive integer.
    #[error("field 'top_n' must be a positive integer")]
    InvalidTopN,
    /// The comparison list was not an array of strings.
    #[error("field 'names' must be an array of model names")]
    InvalidNameList,
}

/// Caller-supplied weight for each numeric attribute.
///
/// Weights may be negative, zero, or positive and need not sum to anything in
/// particular. Every attribute carries a weight, so the vector always covers
/// exactly the recognised set.
///
/// # Examples
/// ```
/// use dashboard_core::{AttributeValues, NumericAttribute, WeightVector};
///
/// let weights = WeightVector::new(AttributeValues::splat(0.0).with(NumericAttribute::Price, -1.0))?;
/// assert_eq!(weights.weight(NumericAttribute::Price), -1.0);
/// # Ok::<(), dashboard_core::ValidationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeightVector {
    values: AttributeValues,
}

impl WeightVector {
    /// Validate and wrap per-attribute weights.
    ///
    /// # Errors
    /// Returns [`ValidationError::NonFiniteWeight`] naming the first attribute
    /// whose weight is NaN or infinite.
    pub fn new(values: AttributeValues) -> Result<Self, ValidationError> {
        if let Some((attr, _)) = values.iter().find(|(_, weight)| !weight.is_finite()) {
            return Err(ValidationError::NonFiniteWeight {
                field: attr.as_str(),
            });
        }
        Ok(Self { values })
    }

    /// Weight every attribute zero except `attr`.
    #[must_use]
    pub fn only(attr: NumericAttribute, weight: f64) -> Self {
        Self {
            values: AttributeValues::splat(0.0).with(attr, weight),
        }
    }

    /// Return the weight for `attr`.
    #[must_use]
    pub const fn weight(&self, attr: NumericAttribute) -> f64 {
        self.values.get(attr)
    }

    /// Borrow the underlying per-attribute values.
    #[must_use]
    pub const fn values(&self) -> &AttributeValues {
        &self.values
    }
}

/// Maximum number of recommendations to return; always positive.
///
/// # Examples
/// ```
/// use dashboard_core::TopN;
///
/// assert_eq!(TopN::default().get(), 3);
/// assert!(TopN::new(0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TopN(NonZeroUsize);

impl TopN {
    /// Number of recommendations returned when the caller does not choose.
    pub const DEFAULT: Self = Self(NonZeroUsize::MIN.saturating_add(2));

    /// Wrap `n`, returning `None` when it is zero.
    #[must_use]
    pub const fn new(n: usize) -> Option<Self> {
        match NonZeroUsize::new(n) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Return the limit as a plain integer.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for TopN {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A validated recommendation request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecommendRequest {
    /// Per-attribute weights.
    pub weights: WeightVector,
    /// Capabilities every recommended model must support.
    pub required: CapabilitySet,
    /// Maximum number of recommendations.
    pub top_n: TopN,
}

impl RecommendRequest {
    /// Decode and validate a recommendation request payload.
    ///
    /// The payload carries a `Service` array of capability names and one
    /// numeric field per attribute (`Price`, `Response_Speed`, ...). An
    /// optional `top_n` overrides the default limit of three. Unknown fields
    /// are ignored.
    ///
    /// # Errors
    /// Returns [`ValidationError`] describing the first problem found.
    ///
    /// # Examples
    /// ```
    /// use dashboard_core::{Capability, NumericAttribute, RecommendRequest};
    /// use serde_json::json;
    ///
    /// let payload = json!({
    ///     "Service": ["Text_Generation"],
    ///     "Price": 1, "Response_Speed": 0, "Accuracy": 0.5,
    ///     "Ethical_Training": 0, "Green_Computing_Resources": 0,
    ///     "Local_Deployment_Capability": 0, "Training_Resource_Requirements": 0,
    ///     "Fine_Tuning_Difficulty": 0, "Multilingual_Support_Capability": 0,
    ///     "Model_Scalability": 0
    /// });
    /// let request = RecommendRequest::from_json(&payload)?;
    /// assert!(request.required.contains(Capability::TextGeneration));
    /// assert_eq!(request.weights.weight(NumericAttribute::Accuracy), 0.5);
    /// assert_eq!(request.top_n.get(), 3);
    /// # Ok::<(), dashboard_core::ValidationError>(())
    /// ```
    pub fn from_json(payload: &Value) -> Result<Self, ValidationError> {
        let object = payload.as_object().ok_or(ValidationError::NotAnObject)?;
        let required = read_services(object)?;
        let values = AttributeValues::try_from_fn(|attr| read_weight(object, attr))?;
        let weights = WeightVector::new(values)?;
        let top_n = read_top_n(object)?;
        Ok(Self {
            weights,
            required,
            top_n,
        })
    }
}

/// A validated comparison request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompareRequest {
    /// Names of the models to return.
    pub names: Vec<String>,
}

impl CompareRequest {
    /// Decode and validate a `{ "names": [...] }` payload.
    ///
    /// # Errors
    /// Returns [`ValidationError`] when the payload is not an object or the
    /// `names` field is missing or not an array of strings.
    pub fn from_json(payload: &Value) -> Result<Self, ValidationError> {
        let object = payload.as_object().ok_or(ValidationError::NotAnObject)?;
        let raw = object.get(NAMES_FIELD).ok_or(ValidationError::MissingField {
            field: NAMES_FIELD,
        })?;
        let names = string_array(raw).ok_or(ValidationError::InvalidNameList)?;
        Ok(Self {
            names: names.into_iter().map(str::to_owned).collect(),
        })
    }
}

fn read_services(object: &Map<String, Value>) -> Result<CapabilitySet, ValidationError> {
    let raw = object
        .get(SERVICE_FIELD)
        .ok_or(ValidationError::MissingField {
            field: SERVICE_FIELD,
        })?;
    let names = string_array(raw).ok_or(ValidationError::InvalidServiceList)?;
    names
        .into_iter()
        .map(|name| {
            name.parse::<Capability>()
                .map_err(|_| ValidationError::UnknownCapability {
                    name: name.to_owned(),
                })
        })
        .collect()
}

fn read_weight(object: &Map<String, Value>, attr: NumericAttribute) -> Result<f64, ValidationError> {
    let field = attr.as_str();
    let raw = object
        .get(field)
        .ok_or(ValidationError::MissingField { field })?;
    raw.as_f64().ok_or(ValidationError::NotNumeric { field })
}

fn read_top_n(object: &Map<String, Value>) -> Result<TopN, ValidationError> {
    let Some(raw) = object.get(TOP_N_FIELD) else {
        return Ok(TopN::default());
    };
    raw.as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .and_then(TopN::new)
        .ok_or(ValidationError::InvalidTopN)
}

fn string_array(value: &Value) -> Option<Vec<&str>> {
    value
        .as_array()?
        .iter()
        .map(Value::as_str)
        .collect::<Option<Vec<_>>>()
}
