//! Weight vectors must be normalised for every criteria.

use hydrosite_core::{FactorScores, OptimizationCriteria};
use rstest::rstest;

#[rstest]
#[case(OptimizationCriteria::RenewableProximity)]
#[case(OptimizationCriteria::MarketDemand)]
#[case(OptimizationCriteria::CostOptimization)]
#[case(OptimizationCriteria::RegulatoryZones)]
#[case(OptimizationCriteria::TransportAccess)]
fn weights_sum_to_one(#[case] criteria: OptimizationCriteria) {
    let total = criteria.weights().total();
    assert!((total - 1.0).abs() <= 1e-9, "{criteria} weights sum to {total}");
}

#[rstest]
#[case(OptimizationCriteria::RenewableProximity)]
#[case(OptimizationCriteria::MarketDemand)]
#[case(OptimizationCriteria::CostOptimization)]
#[case(OptimizationCriteria::RegulatoryZones)]
#[case(OptimizationCriteria::TransportAccess)]
fn uniform_factors_combine_to_the_same_value(#[case] criteria: OptimizationCriteria) {
    let uniform = FactorScores {
        renewable_proximity: 50.0,
        market_demand: 50.0,
        cost_optimization: 50.0,
        transport_access: 50.0,
        regulatory_compliance: 50.0,
    };
    assert!((uniform.combine(criteria.weights()) - 50.0).abs() <= 1e-9);
}

#[rstest]
fn renewable_proximity_leads_its_own_vector() {
    let weights = OptimizationCriteria::RenewableProximity.weights();
    assert_eq!(weights.renewable_proximity, 0.40);
    assert_eq!(weights.market_demand, 0.20);
    assert_eq!(weights.cost_optimization, 0.20);
    assert_eq!(weights.transport_access, 0.10);
    assert_eq!(weights.regulatory_compliance, 0.10);
}

#[rstest]
fn transport_access_vector() {
    let weights = OptimizationCriteria::TransportAccess.weights();
    assert_eq!(weights.transport_access, 0.35);
    assert_eq!(weights.market_demand, 0.25);
}
