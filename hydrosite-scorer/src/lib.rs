//! Weighted five-factor scoring of candidate hydrogen sites.
//!
//! [`WeightedSiteScorer`] implements [`SiteScorer`] by evaluating the
//! heuristics in [`FactorModel`] against a [`ReferenceSet`] and combining
//! them with the weight vector of the chosen
//! [`OptimizationCriteria`](hydrosite_core::OptimizationCriteria).
//!
//! # Examples
//!
//! ```
//! use hydrosite_core::{
//!     GeoPoint, OptimizationCriteria, ReferenceSet, RenewableKind, RenewableSource, SiteScorer,
//! };
//! use hydrosite_scorer::WeightedSiteScorer;
//!
//! let solar = RenewableSource::new("Solar park", GeoPoint::new(22.5, 70.0)?, RenewableKind::Solar);
//! let references = ReferenceSet::new(Vec::new(), vec![solar], Vec::new())?;
//! let site = GeoPoint::new(22.0, 70.0)?;
//!
//! let score = WeightedSiteScorer::default().score_site(
//!     site,
//!     OptimizationCriteria::RenewableProximity,
//!     &references,
//! );
//! assert!(score.factors.renewable_proximity > 70.0);
//! assert_eq!(score.factors.market_demand, 0.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod factors;

pub use factors::{FactorModel, MAX_FACTOR_SCORE, linear_decay};

use hydrosite_core::{
    FactorScores, FactorWeights, GeoPoint, OptimizationCriteria, ReferenceSet, SiteScore,
    SiteScorer,
};

/// Round a weighted factor combination to an integer composite.
///
/// Non-finite combinations score 0; the result is clamped to `0..=100`.
///
/// # Examples
/// ```
/// use hydrosite_core::{FactorScores, FactorWeights};
/// use hydrosite_scorer::composite_score;
///
/// let factors = FactorScores {
///     renewable_proximity: 80.0,
///     market_demand: 60.0,
///     cost_optimization: 40.0,
///     transport_access: 20.0,
///     regulatory_compliance: 0.0,
/// };
/// assert_eq!(composite_score(&factors, FactorWeights::EQUAL), 40);
/// ```
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is rounded and clamped to 0..=100 before the cast"
)]
#[must_use]
pub fn composite_score(factors: &FactorScores, weights: FactorWeights) -> u8 {
    let combined = factors.combine(weights);
    if !combined.is_finite() {
        return 0;
    }
    combined.round().clamp(0.0, MAX_FACTOR_SCORE) as u8
}

/// Score sites with the heuristic [`FactorModel`] and criteria weights.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeightedSiteScorer {
    model: FactorModel,
}

impl WeightedSiteScorer {
    /// Create a scorer with a custom factor model.
    #[must_use]
    pub const fn new(model: FactorModel) -> Self {
        Self { model }
    }

    /// Factor model in use.
    #[must_use]
    pub const fn model(&self) -> &FactorModel {
        &self.model
    }

    /// Evaluate every factor for `point` without combining them.
    #[must_use]
    pub fn factors(&self, point: GeoPoint, references: &ReferenceSet) -> FactorScores {
        let market_demand = Self::sanitise(
            self.model
                .market_demand(point, references.demand_centers()),
        );
        FactorScores {
            renewable_proximity: Self::sanitise(
                self.model
                    .renewable_proximity(point, references.renewables()),
            ),
            market_demand,
            cost_optimization: Self::sanitise(
                self.model.cost_optimization(point, references.assets()),
            ),
            transport_access: Self::sanitise(
                self.model
                    .transport_access(point, references.demand_centers()),
            ),
            regulatory_compliance: Self::sanitise(self.model.regulatory_compliance(market_demand)),
        }
    }
}

impl SiteScorer for WeightedSiteScorer {
    fn score_site(
        &self,
        point: GeoPoint,
        criteria: OptimizationCriteria,
        references: &ReferenceSet,
    ) -> SiteScore {
        let factors = self.factors(point, references);
        SiteScore {
            point,
            composite_score: composite_score(&factors, criteria.weights()),
            factors,
        }
    }
}
