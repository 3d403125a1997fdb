//! The five factor heuristics behind a site score.
//!
//! Each factor maps a distance (or a demand-weighted distance) onto
//! `0.0..=100.0` with a linear decay to a cutoff. Three of them are
//! placeholders built from the other inputs until real data exists:
//!
//! - cost optimisation treats the mean distance to operational assets as a
//!   cost proxy, peaking at a synergy distance;
//! - transport access uses demand centres as stand-in transport hubs;
//! - regulatory compliance is a fixed share of the market demand score.
//!
//! Each lives in its own method so a data-backed version can replace it
//! without touching the others.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use hydrosite_core::{
    DemandCenter, GeoPoint, InfrastructureAsset, Located, RenewableSource, distance_km,
    mean_distance_km, min_distance_km,
};

/// Highest score any factor can produce.
pub const MAX_FACTOR_SCORE: f64 = 100.0;

/// Linear decay from 100 at zero distance to 0 at `cutoff_km` and beyond.
///
/// Non-finite distances (such as "no target at all") score 0.
///
/// # Examples
/// ```
/// use hydrosite_scorer::linear_decay;
///
/// assert_eq!(linear_decay(0.0, 200.0), 100.0);
/// assert_eq!(linear_decay(50.0, 200.0), 75.0);
/// assert_eq!(linear_decay(250.0, 200.0), 0.0);
/// assert_eq!(linear_decay(f64::INFINITY, 200.0), 0.0);
/// ```
#[expect(clippy::float_arithmetic, reason = "linear proximity decay")]
#[must_use]
pub fn linear_decay(distance_km: f64, cutoff_km: f64) -> f64 {
    if !distance_km.is_finite() || cutoff_km <= 0.0 {
        return 0.0;
    }
    (MAX_FACTOR_SCORE - (distance_km / cutoff_km) * MAX_FACTOR_SCORE).clamp(0.0, MAX_FACTOR_SCORE)
}

/// Tunable constants of the factor heuristics.
///
/// The defaults reproduce the published scoring model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct FactorModel {
    /// Renewable proximity reaches zero at this distance.
    pub renewable_cutoff_km: f64,
    /// Each demand centre's proximity reaches zero at this distance.
    pub market_cutoff_km: f64,
    /// Transport access reaches zero at this distance from the nearest hub.
    pub transport_cutoff_km: f64,
    /// Mean distance to operational assets that scores best.
    pub cost_optimal_km: f64,
    /// Deviation from the optimum at which cost optimisation reaches zero.
    pub cost_tolerance_km: f64,
    /// Cost optimisation score when no operational asset exists.
    pub cost_neutral_score: f64,
    /// Share of the market demand score used as regulatory compliance.
    pub regulatory_share: f64,
}

impl Default for FactorModel {
    fn default() -> Self {
        Self {
            renewable_cutoff_km: 200.0,
            market_cutoff_km: 100.0,
            transport_cutoff_km: 150.0,
            cost_optimal_km: 50.0,
            cost_tolerance_km: 100.0,
            cost_neutral_score: 50.0,
            regulatory_share: 0.8,
        }
    }
}

impl FactorModel {
    /// Closeness to the nearest renewable source.
    ///
    /// Scores 0 when there are no renewable sources.
    #[must_use]
    pub fn renewable_proximity(&self, point: GeoPoint, renewables: &[RenewableSource]) -> f64 {
        let nearest = min_distance_km(point, renewables.iter().map(Located::location));
        nearest.map_or(0.0, |d| linear_decay(d, self.renewable_cutoff_km))
    }

    /// Demand-weighted average of per-centre proximity times priority.
    ///
    /// Each centre contributes `linear_decay(d, market_cutoff) × priority`
    /// weighted by its annual demand. High priority doubles the proximity,
    /// so the raw average can exceed 100; the result is capped. Scores 0
    /// when there are no demand centres.
    #[expect(
        clippy::float_arithmetic,
        reason = "demand-weighted averaging of proximity scores"
    )]
    #[must_use]
    pub fn market_demand(&self, point: GeoPoint, demand_centers: &[DemandCenter]) -> f64 {
        let (weighted_sum, total_weight) =
            demand_centers
                .iter()
                .fold((0.0_f64, 0.0_f64), |(weighted_sum, total_weight), centre| {
                    let proximity =
                        linear_decay(distance_km(point, centre.location), self.market_cutoff_km);
                    let weight = centre.demand_weight();
                    (
                        weighted_sum + proximity * centre.priority.multiplier() * weight,
                        total_weight + weight,
                    )
                });
        if total_weight > 0.0 {
            (weighted_sum / total_weight).clamp(0.0, MAX_FACTOR_SCORE)
        } else {
            0.0
        }
    }

    /// Placeholder cost heuristic: closeness of the mean distance to
    /// operational assets to the synergy optimum.
    ///
    /// Sites too close compete with existing assets; sites too far lose
    /// shared infrastructure. Without operational assets the score is the
    /// neutral value.
    #[expect(clippy::float_arithmetic, reason = "deviation from the optimum")]
    #[must_use]
    pub fn cost_optimization(&self, point: GeoPoint, assets: &[InfrastructureAsset]) -> f64 {
        let operational = assets
            .iter()
            .filter(|asset| asset.is_operational())
            .map(Located::location);
        match mean_distance_km(point, operational) {
            Some(mean) => linear_decay((mean - self.cost_optimal_km).abs(), self.cost_tolerance_km),
            None => self.cost_neutral_score.clamp(0.0, MAX_FACTOR_SCORE),
        }
    }

    /// Placeholder transport heuristic: closeness to the nearest demand
    /// centre, standing in for highways, ports and rail.
    ///
    /// Scores 0 when there are no demand centres.
    #[must_use]
    pub fn transport_access(&self, point: GeoPoint, demand_centers: &[DemandCenter]) -> f64 {
        let nearest = min_distance_km(point, demand_centers.iter().map(Located::location));
        nearest.map_or(0.0, |d| linear_decay(d, self.transport_cutoff_km))
    }

    /// Placeholder regulatory heuristic: a fixed share of market demand,
    /// assuming dense demand marks industrial zoning.
    #[expect(clippy::float_arithmetic, reason = "scaling the market score")]
    #[must_use]
    pub fn regulatory_compliance(&self, market_demand: f64) -> f64 {
        (market_demand * self.regulatory_share).clamp(0.0, MAX_FACTOR_SCORE)
    }
}
