//! Property-based tests for the weighted recommender.
//!
//! These tests use `proptest` to assert invariants that must hold for every
//! catalog, weight vector, and capability requirement, complementing the unit
//! tests and BDD scenarios.
//!
//! # Invariants tested
//!
//! - **Determinism:** Identical inputs always produce identical rankings.
//! - **Truncation:** Exactly `min(top_n, |filtered|)` entries are returned.
//! - **Filtering:** Every recommended model supports all required capabilities,
//!   and every model left out of a full ranking lacks at least one of them.
//! - **Truncation order:** Models cut by `top_n` never outscore the last
//!   returned model.
//! - **Ordering:** Scores never increase down the list.
//! - **Normalisation:** Normalised attributes stay within `0.0..=1.0`, even
//!   for ranges wider than `f64::MAX`.
//! - **Score range:** Scores lie between the sums of negative and positive weights.

use dashboard_core::{
    AttributeValues, Capability, CapabilityFlags, CapabilitySet, LlmRecord, NumericAttribute,
    Recommendation, TopN, WeightVector,
};
use dashboard_scorer::{AttributeBounds, recommend};
use proptest::prelude::*;

const TOLERANCE: f64 = 1e-9;

fn values_from(raw: [f64; 10]) -> AttributeValues {
    let mut iter = raw.into_iter();
    AttributeValues::from_fn(|_| iter.next().unwrap_or_default())
}

fn attribute_strategy() -> impl Strategy<Value = AttributeValues> {
    proptest::array::uniform10(-1.0e6_f64..1.0e6_f64).prop_map(values_from)
}

/// Values spanning nearly the whole `f64` range, so `max - min` can overflow.
fn wide_attribute_strategy() -> impl Strategy<Value = AttributeValues> {
    proptest::array::uniform10(-1.7e308_f64..1.7e308_f64).prop_map(values_from)
}

fn weight_strategy() -> impl Strategy<Value = WeightVector> {
    proptest::array::uniform10(-10.0_f64..10.0_f64)
        .prop_map(|raw| WeightVector::new(values_from(raw)).unwrap_or_default())
}

fn capability_strategy(max: usize) -> impl Strategy<Value = Vec<Capability>> {
    proptest::sample::subsequence(Capability::ALL.to_vec(), 0..=max)
}

/// Catalogs of up to twelve models with unique names and ascending ids.
fn catalog_strategy() -> impl Strategy<Value = Vec<LlmRecord>> {
    catalog_from(attribute_strategy())
}

fn wide_catalog_strategy() -> impl Strategy<Value = Vec<LlmRecord>> {
    catalog_from(wide_attribute_strategy())
}

fn catalog_from(
    attributes: impl Strategy<Value = AttributeValues>,
) -> impl Strategy<Value = Vec<LlmRecord>> {
    proptest::collection::vec((attributes, capability_strategy(8)), 0..12).prop_map(
        |entries| {
            entries
                .into_iter()
                .zip(1_u64..)
                .map(|((attributes, capabilities), id)| {
                    LlmRecord::new(
                        id,
                        format!("model-{id}"),
                        attributes,
                        CapabilityFlags::supporting(capabilities),
                    )
                })
                .collect()
        },
    )
}

fn required_strategy() -> impl Strategy<Value = CapabilitySet> {
    capability_strategy(2).prop_map(CapabilitySet::from_iter)
}

fn top_n_strategy() -> impl Strategy<Value = TopN> {
    (1_usize..6).prop_map(|n| TopN::new(n).unwrap_or_default())
}

/// Checks raw flags directly rather than going through `satisfies`.
fn has_every_flag(record: &LlmRecord, required: &CapabilitySet) -> bool {
    required
        .iter()
        .all(|capability| record.capabilities.flag(capability) == 1)
}

fn filtered<'a>(catalog: &'a [LlmRecord], required: &CapabilitySet) -> Vec<&'a LlmRecord> {
    catalog
        .iter()
        .filter(|record| has_every_flag(record, required))
        .collect()
}

/// A `top_n` large enough to return every candidate.
fn everything(catalog: &[LlmRecord]) -> TopN {
    TopN::new(catalog.len().max(1)).unwrap_or_default()
}

fn score_bits(ranked: &[Recommendation]) -> Vec<(String, u64)> {
    ranked
        .iter()
        .map(|r| (r.name.clone(), r.score.to_bits()))
        .collect()
}

/// Sums of the negative and positive weights, padded by a rounding tolerance.
#[expect(
    clippy::float_arithmetic,
    reason = "score bounds are sums of weights"
)]
fn score_range(weights: &WeightVector) -> (f64, f64) {
    let (low, high) = NumericAttribute::ALL
        .into_iter()
        .map(|attr| weights.weight(attr))
        .fold((0.0_f64, 0.0_f64), |(low, high), w| {
            (low + w.min(0.0), high + w.max(0.0))
        });
    (low - TOLERANCE, high + TOLERANCE)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: Ranking is a pure function of its inputs.
    #[test]
    fn ranking_is_deterministic(
        catalog in catalog_strategy(),
        weights in weight_strategy(),
        required in required_strategy(),
        top_n in top_n_strategy(),
    ) {
        let first = recommend(&catalog, &weights, &required, top_n);
        let second = recommend(&catalog, &weights, &required, top_n);
        prop_assert_eq!(score_bits(&first), score_bits(&second));
    }

    /// Property: Exactly `min(top_n, |filtered|)` recommendations are returned.
    #[test]
    fn result_length_is_truncated(
        catalog in catalog_strategy(),
        weights in weight_strategy(),
        required in required_strategy(),
        top_n in top_n_strategy(),
    ) {
        let expected = filtered(&catalog, &required).len().min(top_n.get());
        let ranked = recommend(&catalog, &weights, &required, top_n);
        prop_assert_eq!(ranked.len(), expected);
    }

    /// Property: Every recommendation supports all required capabilities.
    #[test]
    fn recommendations_satisfy_requirements(
        catalog in catalog_strategy(),
        weights in weight_strategy(),
        required in required_strategy(),
        top_n in top_n_strategy(),
    ) {
        let eligible = filtered(&catalog, &required);
        for recommendation in recommend(&catalog, &weights, &required, top_n) {
            prop_assert!(
                eligible.iter().any(|record| record.name == recommendation.name),
                "{} does not satisfy {:?}",
                recommendation.name,
                required
            );
        }
    }

    /// Property: A model missing from a full ranking lacks a required flag.
    #[test]
    fn excluded_models_lack_a_required_flag(
        catalog in catalog_strategy(),
        weights in weight_strategy(),
        required in required_strategy(),
    ) {
        let ranked = recommend(&catalog, &weights, &required, everything(&catalog));
        for record in &catalog {
            if ranked.iter().any(|r| r.name == record.name) {
                continue;
            }
            prop_assert!(
                required
                    .iter()
                    .any(|capability| record.capabilities.flag(capability) == 0),
                "{} was excluded but has every flag in {:?}",
                record.name,
                required
            );
        }
    }

    /// Property: Truncation keeps the highest scores.
    #[test]
    fn truncated_models_never_outscore_the_last_returned(
        catalog in catalog_strategy(),
        weights in weight_strategy(),
        required in required_strategy(),
        top_n in top_n_strategy(),
    ) {
        let full = recommend(&catalog, &weights, &required, everything(&catalog));
        let ranked = recommend(&catalog, &weights, &required, top_n);
        if let Some(last) = ranked.last() {
            for candidate in &full {
                if ranked.iter().any(|r| r.name == candidate.name) {
                    continue;
                }
                prop_assert!(
                    candidate.score <= last.score,
                    "{} ({}) was cut but outscores {} ({})",
                    candidate.name,
                    candidate.score,
                    last.name,
                    last.score
                );
            }
        } else {
            prop_assert!(full.is_empty());
        }
    }

    /// Property: Scores never increase down the ranking.
    #[test]
    fn scores_are_non_increasing(
        catalog in catalog_strategy(),
        weights in weight_strategy(),
        required in required_strategy(),
        top_n in top_n_strategy(),
    ) {
        let ranked = recommend(&catalog, &weights, &required, top_n);
        for pair in ranked.windows(2) {
            if let [earlier, later] = pair {
                prop_assert!(
                    earlier.score >= later.score,
                    "{} ({}) ranked above {} ({})",
                    earlier.name,
                    earlier.score,
                    later.name,
                    later.score
                );
            }
        }
    }

    /// Property: Normalised attributes of every candidate stay in `0.0..=1.0`.
    #[test]
    fn normalisation_stays_in_unit_range(
        catalog in prop_oneof![catalog_strategy(), wide_catalog_strategy()],
        required in required_strategy(),
    ) {
        let candidates = filtered(&catalog, &required);
        if let Some(bounds) =
            AttributeBounds::from_candidates(candidates.iter().map(|r| &r.attributes))
        {
            for record in &candidates {
                for (attr, value) in bounds.normalise_all(&record.attributes).iter() {
                    prop_assert!(
                        (0.0..=1.0).contains(&value),
                        "{attr} normalised to {value} for {}",
                        record.name
                    );
                }
            }
        } else {
            prop_assert!(candidates.is_empty());
        }
    }

    /// Property: Extreme attribute values still rank in non-increasing order.
    #[test]
    fn wide_ranges_rank_without_nan(
        catalog in wide_catalog_strategy(),
        weights in weight_strategy(),
        required in required_strategy(),
    ) {
        let ranked = recommend(&catalog, &weights, &required, everything(&catalog));
        for recommendation in &ranked {
            prop_assert!(!recommendation.score.is_nan(), "{} scored NaN", recommendation.name);
        }
        for pair in ranked.windows(2) {
            if let [earlier, later] = pair {
                prop_assert!(earlier.score >= later.score);
            }
        }
    }

    /// Property: Scores lie between the sums of negative and positive weights.
    #[test]
    fn scores_stay_within_weight_sums(
        catalog in catalog_strategy(),
        weights in weight_strategy(),
        required in required_strategy(),
        top_n in top_n_strategy(),
    ) {
        let (low, high) = score_range(&weights);
        for recommendation in recommend(&catalog, &weights, &required, top_n) {
            prop_assert!(recommendation.score.is_finite());
            prop_assert!(
                (low..=high).contains(&recommendation.score),
                "score {} outside {low}..={high}",
                recommendation.score
            );
        }
    }
}
