//! Behavioural coverage for scoring a single candidate site.

use std::cell::RefCell;

use hydrosite_core::test_support::{demand, point, references, renewable};
use hydrosite_core::{DemandPriority, OptimizationCriteria, ReferenceSet, SiteScore, SiteScorer};
use hydrosite_scorer::WeightedSiteScorer;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

const TOLERANCE: f64 = 1e-2;

/// Reference collections for the scenario.
#[fixture]
pub fn reference_set() -> RefCell<ReferenceSet> {
    RefCell::new(ReferenceSet::default())
}

/// Score produced by the `When` step.
#[fixture]
pub fn site_score() -> RefCell<Option<SiteScore>> {
    RefCell::new(None)
}

#[given("a reference set with one solar park 41 km from the site")]
fn solar_park_nearby(reference_set: &RefCell<ReferenceSet>) {
    *reference_set.borrow_mut() =
        references(Vec::new(), vec![renewable(22.34516, 69.8596)], Vec::new());
}

#[given("a reference set with a high-priority port at the site")]
fn port_at_site(reference_set: &RefCell<ReferenceSet>) {
    *reference_set.borrow_mut() = references(
        Vec::new(),
        Vec::new(),
        vec![demand(22.0, 70.0, Some(15_000.0), DemandPriority::High)],
    );
}

#[given("an empty reference set")]
fn empty_references(reference_set: &RefCell<ReferenceSet>) {
    *reference_set.borrow_mut() = ReferenceSet::default();
}

fn score(
    reference_set: &RefCell<ReferenceSet>,
    site_score: &RefCell<Option<SiteScore>>,
    criteria: OptimizationCriteria,
) {
    let result =
        WeightedSiteScorer::default().score_site(point(22.0, 70.0), criteria, &reference_set.borrow());
    *site_score.borrow_mut() = Some(result);
}

#[when("I score the site for renewable proximity")]
fn score_for_renewables(
    reference_set: &RefCell<ReferenceSet>,
    site_score: &RefCell<Option<SiteScore>>,
) {
    score(reference_set, site_score, OptimizationCriteria::RenewableProximity);
}

#[when("I score the site for market demand")]
fn score_for_market(reference_set: &RefCell<ReferenceSet>, site_score: &RefCell<Option<SiteScore>>) {
    score(reference_set, site_score, OptimizationCriteria::MarketDemand);
}

#[when("I score the site for regulatory zones")]
fn score_for_regulation(
    reference_set: &RefCell<ReferenceSet>,
    site_score: &RefCell<Option<SiteScore>>,
) {
    score(reference_set, site_score, OptimizationCriteria::RegulatoryZones);
}

fn recorded(site_score: &RefCell<Option<SiteScore>>) -> SiteScore {
    (*site_score.borrow())
        .unwrap_or_else(|| panic!("site must be scored before assertions"))
}

#[expect(clippy::float_arithmetic, reason = "tolerance comparison")]
fn assert_near(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

#[then("renewable proximity is about 79.49")]
fn renewable_is_high(site_score: &RefCell<Option<SiteScore>>) {
    assert_near(recorded(site_score).factors.renewable_proximity, 79.49);
}

#[then("market demand, transport access and regulatory compliance are zero")]
fn demand_factors_are_zero(site_score: &RefCell<Option<SiteScore>>) {
    let factors = recorded(site_score).factors;
    assert_near(factors.market_demand, 0.0);
    assert_near(factors.transport_access, 0.0);
    assert_near(factors.regulatory_compliance, 0.0);
}

#[then("cost optimisation is neutral")]
fn cost_is_neutral(site_score: &RefCell<Option<SiteScore>>) {
    assert_near(recorded(site_score).factors.cost_optimization, 50.0);
}

#[then("market demand is capped at 100")]
fn market_is_capped(site_score: &RefCell<Option<SiteScore>>) {
    assert_near(recorded(site_score).factors.market_demand, 100.0);
}

#[then("regulatory compliance is 80")]
fn regulatory_follows_market(site_score: &RefCell<Option<SiteScore>>) {
    assert_near(recorded(site_score).factors.regulatory_compliance, 80.0);
}

#[then("the composite score is 10")]
fn composite_is_ten(site_score: &RefCell<Option<SiteScore>>) {
    assert_eq!(recorded(site_score).composite_score, 10);
}

#[scenario(path = "tests/features/site_scoring.feature", index = 0)]
fn renewable_site_without_demand(
    reference_set: RefCell<ReferenceSet>,
    site_score: RefCell<Option<SiteScore>>,
) {
    let _ = (reference_set, site_score);
}

#[scenario(path = "tests/features/site_scoring.feature", index = 1)]
fn site_next_to_port(reference_set: RefCell<ReferenceSet>, site_score: RefCell<Option<SiteScore>>) {
    let _ = (reference_set, site_score);
}

#[scenario(path = "tests/features/site_scoring.feature", index = 2)]
fn site_without_references(
    reference_set: RefCell<ReferenceSet>,
    site_score: RefCell<Option<SiteScore>>,
) {
    let _ = (reference_set, site_score);
}
