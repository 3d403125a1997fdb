//! Scored candidate sites.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{FactorWeights, GeoPoint};

/// Individual factor scores, each in `0.0..=100.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FactorScores {
    /// Closeness to the nearest renewable source.
    pub renewable_proximity: f64,
    /// Demand-weighted closeness to demand centres.
    pub market_demand: f64,
    /// Closeness of the mean operational-asset distance to the synergy optimum.
    pub cost_optimization: f64,
    /// Closeness to the nearest transport hub.
    pub transport_access: f64,
    /// Regulatory favourability proxy.
    pub regulatory_compliance: f64,
}

impl FactorScores {
    /// Weighted sum of the factors.
    ///
    /// # Examples
    /// ```
    /// use hydrosite_core::{FactorScores, OptimizationCriteria};
    ///
    /// let flat = FactorScores {
    ///     renewable_proximity: 50.0,
    ///     market_demand: 50.0,
    ///     cost_optimization: 50.0,
    ///     transport_access: 50.0,
    ///     regulatory_compliance: 50.0,
    /// };
    /// let combined = flat.combine(OptimizationCriteria::RenewableProximity.weights());
    /// assert!((combined - 50.0).abs() < 1e-9);
    /// ```
    #[expect(clippy::float_arithmetic, reason = "dot product of factors and weights")]
    #[must_use]
    pub fn combine(&self, weights: FactorWeights) -> f64 {
        self.renewable_proximity * weights.renewable_proximity
            + self.market_demand * weights.market_demand
            + self.cost_optimization * weights.cost_optimization
            + self.transport_access * weights.transport_access
            + self.regulatory_compliance * weights.regulatory_compliance
    }

    /// Iterate over the factors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = f64> {
        [
            self.renewable_proximity,
            self.market_demand,
            self.cost_optimization,
            self.transport_access,
            self.regulatory_compliance,
        ]
        .into_iter()
    }
}

/// A scored candidate location.
///
/// The composite score is rounded to an integer for ranking; factor scores
/// keep full precision for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SiteScore {
    /// Scored location.
    pub point: GeoPoint,
    /// Rounded weighted composite in `0..=100`.
    pub composite_score: u8,
    /// Per-factor breakdown.
    pub factors: FactorScores,
}
