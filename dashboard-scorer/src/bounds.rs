//! Per-attribute min/max bounds over a candidate set.
#![forbid(unsafe_code)]

use dashboard_core::{AttributeValues, NumericAttribute};

/// Minimum and maximum of every numeric attribute across a candidate set.
///
/// Built in a single pass, then reused to normalise each candidate.
///
/// # Examples
/// ```
/// use dashboard_core::{AttributeValues, NumericAttribute};
/// use dashboard_scorer::AttributeBounds;
///
/// let cheap = AttributeValues::splat(5.0).with(NumericAttribute::Price, 10.0);
/// let pricey = AttributeValues::splat(5.0).with(NumericAttribute::Price, 20.0);
/// let bounds = AttributeBounds::from_candidates([&cheap, &pricey]).unwrap();
///
/// assert_eq!(bounds.normalise(NumericAttribute::Price, 15.0), 0.5);
/// // Every candidate shares Accuracy = 5, so it normalises to 1.
/// assert_eq!(bounds.normalise(NumericAttribute::Accuracy, 5.0), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeBounds {
    min: AttributeValues,
    max: AttributeValues,
}

impl AttributeBounds {
    /// Compute bounds over `candidates`, or `None` when there are none.
    #[must_use]
    pub fn from_candidates<'a, I>(candidates: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a AttributeValues>,
    {
        let mut iter = candidates.into_iter();
        let first = *iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), values| {
            (
                AttributeValues::from_fn(|attr| lo.get(attr).min(values.get(attr))),
                AttributeValues::from_fn(|attr| hi.get(attr).max(values.get(attr))),
            )
        });
        Some(Self { min, max })
    }

    /// Smallest observed value of `attr`.
    #[must_use]
    pub const fn min(&self, attr: NumericAttribute) -> f64 {
        self.min.get(attr)
    }

    /// Largest observed value of `attr`.
    #[must_use]
    pub const fn max(&self, attr: NumericAttribute) -> f64 {
        self.max.get(attr)
    }

    /// Rescale `value` into `0.0..=1.0` relative to the bounds of `attr`.
    ///
    /// When every candidate shares the same value the range is empty and the
    /// result is `1.0`, so the attribute still contributes its full weight.
    /// Ranges too wide for an `f64` are rescaled from halved operands.
    #[expect(
        clippy::float_arithmetic,
        reason = "min-max normalisation subtracts and divides by the observed range"
    )]
    #[expect(
        clippy::float_cmp,
        reason = "an exactly empty range is the degenerate case"
    )]
    #[must_use]
    pub fn normalise(&self, attr: NumericAttribute, value: f64) -> f64 {
        let min = self.min(attr);
        let max = self.max(attr);
        if max == min {
            return 1.0;
        }
        let span = max - min;
        if span.is_finite() {
            return (value - min) / span;
        }
        (value / 2.0 - min / 2.0) / (max / 2.0 - min / 2.0)
    }

    /// Normalise every attribute of `values`.
    #[must_use]
    pub fn normalise_all(&self, values: &AttributeValues) -> AttributeValues {
        AttributeValues::from_fn(|attr| self.normalise(attr, values.get(attr)))
    }
}
