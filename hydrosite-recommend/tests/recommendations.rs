//! Integration tests for recommendation generation.

use hydrosite_core::test_support::india_reference_set;
use hydrosite_core::{CriteriaError, FactorScores, ReferenceSet, SearchBounds};
use hydrosite_recommend::{
    CostModel, CuratedPool, GridSearchPool, RANGE_10L_50L, RANGE_100L_PLUS, RecommendError,
    factor_tags, generate_recommendations,
};
use hydrosite_scorer::WeightedSiteScorer;
use hydrosite_solver_grid::GridSearch;
use rstest::{fixture, rstest};

#[fixture]
fn references() -> ReferenceSet {
    india_reference_set()
}

fn grid_pool() -> GridSearchPool<GridSearch<WeightedSiteScorer>> {
    let bounds = SearchBounds::new(20.0, 24.0, 68.0, 73.0).expect("valid bounds");
    GridSearchPool::new(GridSearch::new(WeightedSiteScorer::default()))
        .with_bounds(bounds)
        .with_step_degrees(0.5)
}

#[rstest]
fn curated_pool_is_ranked_by_score(references: ReferenceSet) {
    let recommendations =
        generate_recommendations(&CuratedPool, "renewable_proximity", RANGE_100L_PLUS, None, &references)
            .expect("recommendations");
    let scores: Vec<u8> = recommendations.iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![92, 87, 84]);
    assert!(
        recommendations
            .iter()
            .all(|r| r.investment_range.label() == RANGE_100L_PLUS)
    );
}

#[rstest]
fn bounded_range_filters_out_expensive_sites(references: ReferenceSet) {
    let recommendations =
        generate_recommendations(&CuratedPool, "market_demand", RANGE_10L_50L, None, &references)
            .expect("recommendations");
    assert!(recommendations.is_empty());
}

#[rstest]
#[case(Some(2), 2)]
#[case(Some(0), 0)]
#[case(None, 3)]
fn results_are_truncated(
    references: ReferenceSet,
    #[case] number_of_sites: Option<usize>,
    #[case] expected: usize,
) {
    let recommendations = generate_recommendations(
        &CuratedPool,
        "cost_optimization",
        "custom",
        number_of_sites,
        &references,
    )
    .expect("recommendations");
    assert_eq!(recommendations.len(), expected);
}

#[rstest]
fn unknown_criteria_is_rejected(references: ReferenceSet) {
    let result =
        generate_recommendations(&CuratedPool, "cheapest", RANGE_100L_PLUS, None, &references);
    assert_eq!(
        result,
        Err(RecommendError::InvalidCriteria(CriteriaError(
            "cheapest".to_owned()
        )))
    );
}

#[rstest]
fn empty_investment_range_is_rejected(references: ReferenceSet) {
    let result = generate_recommendations(&CuratedPool, "market_demand", "", None, &references);
    assert_eq!(result, Err(RecommendError::EmptyInvestmentRange));
}

#[rstest]
fn grid_pool_names_and_prices_sites(references: ReferenceSet) {
    let recommendations = generate_recommendations(
        &grid_pool(),
        "renewable_proximity",
        RANGE_100L_PLUS,
        Some(5),
        &references,
    )
    .expect("recommendations");

    assert_eq!(recommendations.len(), 5);
    assert!(
        recommendations
            .windows(2)
            .all(|pair| pair.first().map(|r| r.score) >= pair.get(1).map(|r| r.score))
    );
    for recommendation in &recommendations {
        assert!(recommendation.name.starts_with("Candidate site "));
        let cost = recommendation.estimated_cost.expect("grid sites are priced");
        assert!((3.5e9..=5.0e9).contains(&cost));
        assert!(recommendation.timeline.is_some());
    }
}

#[rstest]
fn grid_pool_rejects_invalid_lattice(references: ReferenceSet) {
    let pool = grid_pool().with_step_degrees(-1.0);
    let result =
        generate_recommendations(&pool, "market_demand", RANGE_100L_PLUS, None, &references);
    assert!(matches!(result, Err(RecommendError::Search(_))));
}

#[rstest]
fn strong_factors_become_tags() {
    let factors = FactorScores {
        renewable_proximity: 90.0,
        market_demand: 70.0,
        cost_optimization: 69.9,
        transport_access: 10.0,
        regulatory_compliance: 75.0,
    };
    assert_eq!(
        factor_tags(&factors),
        vec!["Near Renewables", "High Demand", "Favourable Zoning"]
    );
}

#[rstest]
#[case(100.0, 3.5e9)]
#[case(0.0, 5.0e9)]
#[case(50.0, 4.25e9)]
fn cost_model_interpolates(#[case] cost_optimization: f64, #[case] expected: f64) {
    let factors = FactorScores {
        cost_optimization,
        ..FactorScores::default()
    };
    assert_eq!(CostModel::default().estimated_cost(&factors), expected);
}

#[rstest]
fn recommendations_serialise_to_camel_case(references: ReferenceSet) {
    let recommendations =
        generate_recommendations(&CuratedPool, "market_demand", RANGE_100L_PLUS, Some(1), &references)
            .expect("recommendations");
    let json = serde_json::to_value(&recommendations).expect("serialise");
    let first = json.get(0).expect("one recommendation");
    assert_eq!(first.get("name").and_then(|v| v.as_str()), Some("Gujarat Industrial Corridor"));
    assert_eq!(first.get("latitude").and_then(serde_json::Value::as_f64), Some(23.5));
    assert_eq!(first.get("estimatedCost").and_then(serde_json::Value::as_f64), Some(4.58e9));
    assert_eq!(first.get("investmentRange").and_then(|v| v.as_str()), Some(RANGE_100L_PLUS));
    assert_eq!(
        first.get("criteria"),
        Some(&serde_json::json!(["market_demand"]))
    );
}
