//! Investment range labels and their cost bounds.

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

use crate::RecommendError;

/// Label for projects between ₹10 lakh and ₹50 lakh.
pub const RANGE_10L_50L: &str = "₹10L - ₹50L";
/// Label for projects between ₹50 lakh and ₹100 lakh.
pub const RANGE_50L_100L: &str = "₹50L - ₹100L";
/// Label for projects of ₹100 lakh and above.
pub const RANGE_100L_PLUS: &str = "₹100L+";

/// Inclusive cost bounds selected by an investment range label.
///
/// Known labels map to fixed rupee bounds; any other non-empty label is
/// accepted and leaves costs unbounded.
///
/// # Examples
/// ```
/// use hydrosite_recommend::InvestmentRange;
///
/// let range: InvestmentRange = "₹50L - ₹100L".parse()?;
/// assert!(range.contains(5_000_000.0));
/// assert!(range.contains(10_000_000.0));
/// assert!(!range.contains(10_000_001.0));
/// # Ok::<(), hydrosite_recommend::RecommendError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentRange {
    label: String,
    min: f64,
    max: f64,
}

impl InvestmentRange {
    /// Label the range was parsed from.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Lower bound in rupees.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound in rupees, possibly infinite.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Whether the label matched one of the known ranges.
    #[must_use]
    pub fn is_known(&self) -> bool {
        [RANGE_10L_50L, RANGE_50L_100L, RANGE_100L_PLUS].contains(&self.label.as_str())
    }

    /// Whether `cost` lies within the bounds, both ends inclusive.
    #[must_use]
    pub fn contains(&self, cost: f64) -> bool {
        cost >= self.min && cost <= self.max
    }
}

impl FromStr for InvestmentRange {
    type Err = RecommendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(RecommendError::EmptyInvestmentRange);
        }
        let (min, max) = match s {
            RANGE_10L_50L => (1_000_000.0, 5_000_000.0),
            RANGE_50L_100L => (5_000_000.0, 10_000_000.0),
            RANGE_100L_PLUS => (10_000_000.0, f64::INFINITY),
            _ => (0.0, f64::INFINITY),
        };
        Ok(Self {
            label: s.to_owned(),
            min,
            max,
        })
    }
}

impl std::fmt::Display for InvestmentRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

#[cfg(feature = "serde")]
impl Serialize for InvestmentRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(RANGE_10L_50L, 1_000_000.0, 5_000_000.0)]
    #[case(RANGE_50L_100L, 5_000_000.0, 10_000_000.0)]
    #[case(RANGE_100L_PLUS, 10_000_000.0, f64::INFINITY)]
    #[case("₹1Cr - ₹5Cr", 0.0, f64::INFINITY)]
    fn labels_map_to_bounds(#[case] label: &str, #[case] min: f64, #[case] max: f64) {
        let range: InvestmentRange = label.parse().expect("non-empty label");
        assert_eq!((range.min(), range.max()), (min, max));
        assert_eq!(range.label(), label);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn empty_label_is_rejected(#[case] label: &str) {
        assert_eq!(
            label.parse::<InvestmentRange>(),
            Err(RecommendError::EmptyInvestmentRange)
        );
    }

    #[rstest]
    fn unknown_labels_are_flagged() {
        let range: InvestmentRange = "anything".parse().expect("non-empty label");
        assert!(!range.is_known());
        assert!(range.contains(4.58e9));
    }
}
