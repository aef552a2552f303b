//! Rank catalog entries for a recommendation request.
//!
//! The `Recommender` trait turns a catalog snapshot and a validated
//! [`RecommendRequest`](crate::RecommendRequest) into an ordered list of
//! [`Recommendation`] values.

use serde::{Deserialize, Serialize};

use crate::{LlmRecord, RecommendRequest};

/// A ranked model and its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Name of the recommended model.
    #[serde(rename = "Name")]
    pub name: String,
    /// Weighted score; higher is better.
    #[serde(rename = "Score")]
    pub score: f64,
}

/// Produce recommendations from a catalog snapshot.
///
/// Implementations must be pure: the same catalog and request always yield
/// the same list. They must be thread-safe (`Send` + `Sync`) so a single
/// instance can serve concurrent callers, each with its own snapshot.
///
/// Implementations must:
/// - Return at most `request.top_n` entries.
/// - Order entries by non-increasing score.
/// - Only return models that satisfy every required capability.
///
/// # Examples
///
/// ```rust
/// use dashboard_core::{LlmRecord, RecommendRequest, Recommendation, Recommender};
///
/// struct FirstModel;
///
/// impl Recommender for FirstModel {
///     fn recommend(&self, catalog: &[LlmRecord], _request: &RecommendRequest) -> Vec<Recommendation> {
///         catalog
///             .iter()
///             .take(1)
///             .map(|record| Recommendation { name: record.name.clone(), score: 1.0 })
///             .collect()
///     }
/// }
///
/// assert!(FirstModel.recommend(&[], &RecommendRequest::default()).is_empty());
/// ```
pub trait Recommender: Send + Sync {
    /// Return the best models in `catalog` for `request`.
    fn recommend(&self, catalog: &[LlmRecord], request: &RecommendRequest)
    -> Vec<Recommendation>;
}
