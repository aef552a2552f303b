//! Weighted recommendation scoring for catalogued models.
//!
//! Recommending runs in two passes over the candidates that support every
//! required capability:
//! - **Bounds**: a single pre-pass records the minimum and maximum of each
//!   numeric attribute across the filtered set ([`AttributeBounds`]).
//! - **Scoring**: each candidate's attributes are min-max normalised against
//!   those bounds and combined as a weighted sum using the caller's
//!   [`WeightVector`](dashboard_core::WeightVector).
//!
//! Candidates are then ranked by descending score, keeping catalog order for
//! ties, and truncated to the requested count. The scorer is a pure function
//! of its inputs and has no error path.
//!
//! # Examples
//!
//! ```
//! use dashboard_core::{
//!     AttributeValues, Capability, CapabilityFlags, CapabilitySet, LlmRecord, NumericAttribute,
//!     TopN, WeightVector,
//! };
//! use dashboard_scorer::recommend;
//!
//! let text = CapabilityFlags::supporting([Capability::TextGeneration]);
//! let catalog = vec![
//!     LlmRecord::new(1, "A", AttributeValues::splat(5.0).with(NumericAttribute::Price, 10.0), text),
//!     LlmRecord::new(2, "B", AttributeValues::splat(5.0).with(NumericAttribute::Price, 20.0), text),
//! ];
//! let weights = WeightVector::only(NumericAttribute::Price, 1.0);
//! let required = CapabilitySet::from_iter([Capability::TextGeneration]);
//!
//! let ranked = recommend(&catalog, &weights, &required, TopN::new(2).unwrap());
//! let names: Vec<_> = ranked.iter().map(|r| (r.name.as_str(), r.score)).collect();
//! assert_eq!(names, vec![("B", 1.0), ("A", 0.0)]);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use std::cmp::Ordering;

use dashboard_core::{
    AttributeValues, CapabilitySet, LlmRecord, NumericAttribute, RecommendRequest,
    Recommendation, Recommender, TopN, WeightVector,
};

mod bounds;

pub use bounds::AttributeBounds;

/// Rank `catalog` for the given weights and capability requirements.
///
/// Returns at most `top_n` recommendations ordered by non-increasing score.
/// An empty catalog, or requirements no candidate satisfies, yields an empty
/// list without computing any bounds.
#[must_use]
pub fn recommend(
    catalog: &[LlmRecord],
    weights: &WeightVector,
    required: &CapabilitySet,
    top_n: TopN,
) -> Vec<Recommendation> {
    let filtered: Vec<&LlmRecord> = catalog
        .iter()
        .filter(|record| record.capabilities.satisfies(required))
        .collect();

    let Some(bounds) = AttributeBounds::from_candidates(filtered.iter().map(|r| &r.attributes))
    else {
        log::debug!(
            "no catalog entry out of {} supports the {} required capabilities",
            catalog.len(),
            required.len()
        );
        return Vec::new();
    };

    let mut scored: Vec<(&LlmRecord, f64)> = filtered
        .into_iter()
        .map(|record| (record, weighted_score(&bounds, weights, &record.attributes)))
        .collect();
    // `sort_by` is stable, so equal scores keep catalog order.
    scored.sort_by(|(_, left), (_, right)| right.partial_cmp(left).unwrap_or(Ordering::Equal));

    let candidates = scored.len();
    let ranked: Vec<Recommendation> = scored
        .into_iter()
        .take(top_n.get())
        .map(|(record, score)| Recommendation {
            name: record.name.clone(),
            score,
        })
        .collect();
    log::debug!(
        "ranked {candidates} of {} catalog entries, returning {}",
        catalog.len(),
        ranked.len()
    );
    ranked
}

/// Sum of normalised attributes multiplied by their weights.
#[expect(
    clippy::float_arithmetic,
    reason = "scores are weighted sums of normalised attributes"
)]
fn weighted_score(
    bounds: &AttributeBounds,
    weights: &WeightVector,
    attributes: &AttributeValues,
) -> f64 {
    NumericAttribute::ALL.into_iter().fold(0.0_f64, |total, attr| {
        total + bounds.normalise(attr, attributes.get(attr)) * weights.weight(attr)
    })
}

/// [`Recommender`] backed by [`recommend`].
///
/// Stateless; one instance can serve any number of callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedSumRecommender;

impl Recommender for WeightedSumRecommender {
    fn recommend(
        &self,
        catalog: &[LlmRecord],
        request: &RecommendRequest,
    ) -> Vec<Recommendation> {
        recommend(catalog, &request.weights, &request.required, request.top_n)
    }
}
