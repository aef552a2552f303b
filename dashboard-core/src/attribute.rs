//! Numeric attributes describing each catalogued model.
//!
//! The ten recognised attributes form a closed set. [`AttributeValues`] keeps
//! one `f64` per attribute in named fields, so lookups are a fixed `match`
//! rather than a string-keyed map.
//!
//! # Examples
//! ```
//! use dashboard_core::NumericAttribute;
//!
//! assert_eq!(NumericAttribute::ResponseSpeed.as_str(), "Response_Speed");
//! assert_eq!(NumericAttribute::Price.to_string(), "Price");
//! ```

use std::convert::Infallible;

use serde::{Deserialize, Serialize};

/// One of the ten numeric attributes the scorer recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NumericAttribute {
    /// Cost of using the model.
    Price,
    /// Latency of responses.
    ResponseSpeed,
    /// Quality of answers.
    Accuracy,
    /// Care taken over ethical training data.
    EthicalTraining,
    /// Use of green computing resources.
    GreenComputingResources,
    /// Ability to deploy the model locally.
    LocalDeploymentCapability,
    /// Resources needed to train the model.
    TrainingResourceRequirements,
    /// Effort needed to fine-tune the model.
    FineTuningDifficulty,
    /// Breadth of language support.
    MultilingualSupportCapability,
    /// Headroom for scaling the model.
    ModelScalability,
}

impl NumericAttribute {
    /// Every attribute in canonical order.
    pub const ALL: [Self; 10] = [
        Self::Price,
        Self::ResponseSpeed,
        Self::Accuracy,
        Self::EthicalTraining,
        Self::GreenComputingResources,
        Self::LocalDeploymentCapability,
        Self::TrainingResourceRequirements,
        Self::FineTuningDifficulty,
        Self::MultilingualSupportCapability,
        Self::ModelScalability,
    ];

    /// Return the wire name used in requests and catalog payloads.
    ///
    /// # Examples
    /// ```
    /// use dashboard_core::NumericAttribute;
    ///
    /// assert_eq!(NumericAttribute::ModelScalability.as_str(), "Model_Scalability");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Price => "Price",
            Self::ResponseSpeed => "Response_Speed",
            Self::Accuracy => "Accuracy",
            Self::EthicalTraining => "Ethical_Training",
            Self::GreenComputingResources => "Green_Computing_Resources",
            Self::LocalDeploymentCapability => "Local_Deployment_Capability",
            Self::TrainingResourceRequirements => "Training_Resource_Requirements",
            Self::FineTuningDifficulty => "Fine_Tuning_Difficulty",
            Self::MultilingualSupportCapability => "Multilingual_Support_Capability",
            Self::ModelScalability => "Model_Scalability",
        }
    }
}

impl std::fmt::Display for NumericAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NumericAttribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|attr| attr.as_str() == s)
            .ok_or_else(|| format!("unknown attribute '{s}'"))
    }
}

/// One value per [`NumericAttribute`].
///
/// The same shape carries a model's raw attributes, a caller's weights, and
/// the per-attribute bounds computed by the scorer.
///
/// # Examples
/// ```
/// use dashboard_core::{AttributeValues, NumericAttribute};
///
/// let mut values = AttributeValues::splat(5.0);
/// values.set(NumericAttribute::Price, 10.0);
/// assert_eq!(values.get(NumericAttribute::Price), 10.0);
/// assert_eq!(values.get(NumericAttribute::Accuracy), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AttributeValues {
    /// Value for [`NumericAttribute::Price`].
    #[serde(rename = "Price")]
    pub price: f64,
    /// Value for [`NumericAttribute::ResponseSpeed`].
    #[serde(rename = "Response_Speed")]
    pub response_speed: f64,
    /// Value for [`NumericAttribute::Accuracy`].
    #[serde(rename = "Accuracy")]
    pub accuracy: f64,
    /// Value for [`NumericAttribute::EthicalTraining`].
    #[serde(rename = "Ethical_Training")]
    pub ethical_training: f64,
    /// Value for [`NumericAttribute::GreenComputingResources`].
    #[serde(rename = "Green_Computing_Resources")]
    pub green_computing_resources: f64,
    /// Value for [`NumericAttribute::LocalDeploymentCapability`].
    #[serde(rename = "Local_Deployment_Capability")]
    pub local_deployment_capability: f64,
    /// Value for [`NumericAttribute::TrainingResourceRequirements`].
    #[serde(rename = "Training_Resource_Requirements")]
    pub training_resource_requirements: f64,
    /// Value for [`NumericAttribute::FineTuningDifficulty`].
    #[serde(rename = "Fine_Tuning_Difficulty")]
    pub fine_tuning_difficulty: f64,
    /// Value for [`NumericAttribute::MultilingualSupportCapability`].
    #[serde(rename = "Multilingual_Support_Capability")]
    pub multilingual_support_capability: f64,
    /// Value for [`NumericAttribute::ModelScalability`].
    #[serde(rename = "Model_Scalability")]
    pub model_scalability: f64,
}

impl AttributeValues {
    /// Build values by evaluating `f` once per attribute, in canonical order.
    #[must_use]
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(NumericAttribute) -> f64,
    {
        match Self::try_from_fn::<_, Infallible>(|attr| Ok(f(attr))) {
            Ok(values) => values,
            Err(never) => match never {},
        }
    }

    /// Build values from a fallible closure, stopping at the first error.
    ///
    /// # Errors
    /// Returns the first error produced by `f`.
    pub fn try_from_fn<F, E>(mut f: F) -> Result<Self, E>
    where
        F: FnMut(NumericAttribute) -> Result<f64, E>,
    {
        Ok(Self {
            price: f(NumericAttribute::Price)?,
            response_speed: f(NumericAttribute::ResponseSpeed)?,
            accuracy: f(NumericAttribute::Accuracy)?,
            ethical_training: f(NumericAttribute::EthicalTraining)?,
            green_computing_resources: f(NumericAttribute::GreenComputingResources)?,
            local_deployment_capability: f(NumericAttribute::LocalDeploymentCapability)?,
            training_resource_requirements: f(NumericAttribute::TrainingResourceRequirements)?,
            fine_tuning_difficulty: f(NumericAttribute::FineTuningDifficulty)?,
            multilingual_support_capability: f(NumericAttribute::MultilingualSupportCapability)?,
            model_scalability: f(NumericAttribute::ModelScalability)?,
        })
    }

    /// Set every attribute to `value`.
    #[must_use]
    pub fn splat(value: f64) -> Self {
        Self::from_fn(|_| value)
    }

    /// Return the value stored for `attr`.
    #[must_use]
    pub const fn get(&self, attr: NumericAttribute) -> f64 {
        match attr {
            NumericAttribute::Price => self.price,
            NumericAttribute::ResponseSpeed => self.response_speed,
            NumericAttribute::Accuracy => self.accuracy,
            NumericAttribute::EthicalTraining => self.ethical_training,
            NumericAttribute::GreenComputingResources => self.green_computing_resources,
            NumericAttribute::LocalDeploymentCapability => self.local_deployment_capability,
            NumericAttribute::TrainingResourceRequirements => self.training_resource_requirements,
            NumericAttribute::FineTuningDifficulty => self.fine_tuning_difficulty,
            NumericAttribute::MultilingualSupportCapability => {
                self.multilingual_support_capability
            }
            NumericAttribute::ModelScalability => self.model_scalability,
        }
    }

    /// Replace the value stored for `attr`.
    pub const fn set(&mut self, attr: NumericAttribute, value: f64) {
        let slot = match attr {
            NumericAttribute::Price => &mut self.price,
            NumericAttribute::ResponseSpeed => &mut self.response_speed,
            NumericAttribute::Accuracy => &mut self.accuracy,
            NumericAttribute::EthicalTraining => &mut self.ethical_training,
            NumericAttribute::GreenComputingResources => &mut self.green_computing_resources,
            NumericAttribute::LocalDeploymentCapability => &mut self.local_deployment_capability,
            NumericAttribute::TrainingResourceRequirements => {
                &mut self.training_resource_requirements
            }
            NumericAttribute::FineTuningDifficulty => &mut self.fine_tuning_difficulty,
            NumericAttribute::MultilingualSupportCapability => {
                &mut self.multilingual_support_capability
            }
            NumericAttribute::ModelScalability => &mut self.model_scalability,
        };
        *slot = value;
    }

    /// Return a copy with `attr` replaced, enabling chaining.
    #[must_use]
    pub const fn with(mut self, attr: NumericAttribute, value: f64) -> Self {
        self.set(attr, value);
        self
    }

    /// Iterate over `(attribute, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (NumericAttribute, f64)> + '_ {
        NumericAttribute::ALL
            .into_iter()
            .map(move |attr| (attr, self.get(attr)))
    }

    /// Report whether every value is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.iter().all(|(_, value)| value.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    fn display_matches_as_str() {
        for attr in NumericAttribute::ALL {
            assert_eq!(attr.to_string(), attr.as_str());
        }
    }

    #[rstest]
    #[case("Price", NumericAttribute::Price)]
    #[case("Fine_Tuning_Difficulty", NumericAttribute::FineTuningDifficulty)]
    #[case("Model_Scalability", NumericAttribute::ModelScalability)]
    fn parses_wire_names(#[case] raw: &str, #[case] expected: NumericAttribute) {
        assert_eq!(NumericAttribute::from_str(raw), Ok(expected));
    }

    #[rstest]
    #[case("price")]
    #[case("ResponseSpeed")]
    #[case("")]
    fn parsing_rejects_unknown(#[case] raw: &str) {
        let err = NumericAttribute::from_str(raw).unwrap_err();
        assert!(err.contains("unknown attribute"));
    }

    #[rstest]
    fn from_fn_visits_every_attribute_once() {
        let mut seen = Vec::new();
        let values = AttributeValues::from_fn(|attr| {
            seen.push(attr);
            f64::from(u8::try_from(seen.len()).unwrap())
        });
        assert_eq!(seen, NumericAttribute::ALL);
        assert_eq!(values.get(NumericAttribute::Price), 1.0);
        assert_eq!(values.get(NumericAttribute::ModelScalability), 10.0);
    }

    #[rstest]
    fn set_then_get_round_trips_each_field() {
        let mut values = AttributeValues::default();
        for (idx, attr) in NumericAttribute::ALL.into_iter().enumerate() {
            values.set(attr, f64::from(u8::try_from(idx).unwrap()));
        }
        for (idx, attr) in NumericAttribute::ALL.into_iter().enumerate() {
            assert_eq!(values.get(attr), f64::from(u8::try_from(idx).unwrap()));
        }
    }

    #[rstest]
    fn try_from_fn_stops_at_first_error() {
        let result = AttributeValues::try_from_fn(|attr| match attr {
            NumericAttribute::Accuracy => Err(attr),
            _ => Ok(0.0),
        });
        assert_eq!(result, Err(NumericAttribute::Accuracy));
    }

    #[rstest]
    fn serialises_with_wire_names() {
        let values = AttributeValues::splat(1.0).with(NumericAttribute::Price, 2.5);
        let json = serde_json::to_value(values).unwrap();
        assert_eq!(json["Price"], 2.5);
        assert_eq!(json["Multilingual_Support_Capability"], 1.0);
    }

    #[rstest]
    fn detects_non_finite_values() {
        let values = AttributeValues::splat(0.0).with(NumericAttribute::Accuracy, f64::NAN);
        assert!(!values.is_finite());
        assert!(AttributeValues::splat(3.0).is_finite());
    }
}
