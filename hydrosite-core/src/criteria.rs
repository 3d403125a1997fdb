//! Optimisation criteria and the weight vector each one selects.
//!
//! # Examples
//! ```
//! use hydrosite_core::OptimizationCriteria;
//!
//! let criteria: OptimizationCriteria = "market_demand".parse()?;
//! assert_eq!(criteria.weights().market_demand, 0.40);
//! assert!("cheapest".parse::<OptimizationCriteria>().is_err());
//! # Ok::<(), hydrosite_core::CriteriaError>(())
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a criteria name is not one of the five known values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unknown optimisation criteria '{0}'; expected one of renewable_proximity, \
     market_demand, cost_optimization, regulatory_zones, transport_access"
)]
pub struct CriteriaError(pub String);

/// The objective a caller optimises for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OptimizationCriteria {
    /// Favour sites close to renewable generation.
    RenewableProximity,
    /// Favour sites close to heavy, high-priority demand.
    MarketDemand,
    /// Favour sites at the synergy distance from operational assets.
    CostOptimization,
    /// Weigh every factor equally.
    ///
    /// No zoning data exists yet, so equal weighting is the deliberate
    /// stand-in rather than a fallback for unknown input.
    RegulatoryZones,
    /// Favour sites close to transport hubs.
    TransportAccess,
}

impl OptimizationCriteria {
    /// Every criteria value, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::RenewableProximity,
        Self::MarketDemand,
        Self::CostOptimization,
        Self::RegulatoryZones,
        Self::TransportAccess,
    ];

    /// Return the criteria as its snake-case wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RenewableProximity => "renewable_proximity",
            Self::MarketDemand => "market_demand",
            Self::CostOptimization => "cost_optimization",
            Self::RegulatoryZones => "regulatory_zones",
            Self::TransportAccess => "transport_access",
        }
    }

    /// Weight vector used to combine factor scores for this criteria.
    #[must_use]
    pub const fn weights(self) -> FactorWeights {
        match self {
            Self::RenewableProximity => FactorWeights::new(0.40, 0.20, 0.20, 0.10, 0.10),
            Self::MarketDemand => FactorWeights::new(0.20, 0.40, 0.15, 0.15, 0.10),
            Self::CostOptimization => FactorWeights::new(0.20, 0.20, 0.40, 0.10, 0.10),
            Self::TransportAccess => FactorWeights::new(0.15, 0.25, 0.15, 0.35, 0.10),
            Self::RegulatoryZones => FactorWeights::EQUAL,
        }
    }
}

impl std::fmt::Display for OptimizationCriteria {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OptimizationCriteria {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|criteria| criteria.as_str() == s)
            .ok_or_else(|| CriteriaError(s.to_owned()))
    }
}

/// Relative importance of each factor in the composite score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorWeights {
    /// Weight of renewable proximity.
    pub renewable_proximity: f64,
    /// Weight of market demand.
    pub market_demand: f64,
    /// Weight of cost optimisation.
    pub cost_optimization: f64,
    /// Weight of transport access.
    pub transport_access: f64,
    /// Weight of regulatory compliance.
    pub regulatory_compliance: f64,
}

impl FactorWeights {
    /// Equal weighting across all five factors.
    pub const EQUAL: Self = Self::new(0.20, 0.20, 0.20, 0.20, 0.20);

    /// Build a weight vector in factor order.
    #[must_use]
    pub const fn new(
        renewable_proximity: f64,
        market_demand: f64,
        cost_optimization: f64,
        transport_access: f64,
        regulatory_compliance: f64,
    ) -> Self {
        Self {
            renewable_proximity,
            market_demand,
            cost_optimization,
            transport_access,
            regulatory_compliance,
        }
    }

    /// Sum of all weights.
    #[expect(clippy::float_arithmetic, reason = "summing the weight vector")]
    #[must_use]
    pub fn total(&self) -> f64 {
        self.renewable_proximity
            + self.market_demand
            + self.cost_optimization
            + self.transport_access
            + self.regulatory_compliance
    }
}
