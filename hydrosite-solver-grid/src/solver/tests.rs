//! Tests for `GridSearch`.

use super::*;
use hydrosite_core::test_support::{asset, india_reference_set, point, references};
use hydrosite_core::{AssetKind, AssetStatus, EARTH_RADIUS_KM, FactorScores, SearchBounds};
use hydrosite_scorer::WeightedSiteScorer;
use rstest::{fixture, rstest};

/// Scores every point the same so ranking falls back to lattice order.
struct FlatScorer;

impl SiteScorer for FlatScorer {
    fn score_site(
        &self,
        point: GeoPoint,
        _criteria: OptimizationCriteria,
        _references: &ReferenceSet,
    ) -> SiteScore {
        SiteScore {
            point,
            composite_score: 50,
            factors: FactorScores::default(),
        }
    }
}

#[fixture]
fn sample_request() -> SearchRequest {
    SearchRequest::new(OptimizationCriteria::MarketDemand)
        .with_bounds(SearchBounds::new(10.0, 13.8, 70.0, 74.8).expect("valid bounds"))
        .with_number_of_sites(3)
}

#[expect(clippy::float_arithmetic, reason = "offset along a meridian")]
fn latitude_offset(distance_km: f64) -> f64 {
    10.0 + (distance_km / EARTH_RADIUS_KM).to_degrees()
}

fn single_point_request() -> SearchRequest {
    SearchRequest::new(OptimizationCriteria::RenewableProximity)
        .with_bounds(SearchBounds::new(10.0, 10.0, 70.0, 70.0).expect("valid bounds"))
}

#[rstest]
#[case(9.999, 0, 1)]
#[case(10.001, 1, 0)]
fn exclusion_radius_is_strict(
    #[case] asset_distance_km: f64,
    #[case] expected_sites: usize,
    #[case] expected_excluded: u64,
) {
    let references = references(
        vec![asset(
            latitude_offset(asset_distance_km),
            70.0,
            AssetKind::Hub,
            AssetStatus::Planned,
        )],
        Vec::new(),
        Vec::new(),
    );
    let response = GridSearch::new(WeightedSiteScorer::default())
        .search(&single_point_request(), &references)
        .expect("search succeeds");
    assert_eq!(response.sites.len(), expected_sites);
    assert_eq!(response.diagnostics.excluded_points, expected_excluded);
    assert_eq!(response.diagnostics.lattice_points, 1);
}

#[rstest]
fn top_three_from_five_hundred_candidates(sample_request: SearchRequest) {
    let references = india_reference_set();
    let scorer = WeightedSiteScorer::default();
    let response = GridSearch::new(scorer)
        .search(&sample_request, &references)
        .expect("search succeeds");

    assert_eq!(response.diagnostics.lattice_points, 500);
    assert_eq!(response.sites.len(), 3);

    let mut expected: Vec<SiteScore> = Lattice::new(&sample_request.bounds, 0.2)
        .points()
        .map(|p| scorer.score_site(p, sample_request.criteria, &references))
        .collect();
    expected.sort_by(|lhs, rhs| rhs.composite_score.cmp(&lhs.composite_score));
    expected.truncate(3);
    assert_eq!(response.sites, expected);
}

#[rstest]
fn ties_keep_lattice_order(sample_request: SearchRequest) {
    let response = GridSearch::new(FlatScorer)
        .search(&sample_request, &ReferenceSet::default())
        .expect("search succeeds");
    let returned: Vec<GeoPoint> = response.sites.iter().map(|site| site.point).collect();
    let first_generated: Vec<GeoPoint> = Lattice::new(&sample_request.bounds, 0.2)
        .points()
        .take(3)
        .collect();
    assert_eq!(returned, first_generated);
    assert_eq!(first_generated.first().map(GeoPoint::longitude), Some(70.0));
}

#[rstest]
fn identical_input_gives_identical_output(sample_request: SearchRequest) {
    let references = india_reference_set();
    let search = GridSearch::new(WeightedSiteScorer::default());
    let first = search.search(&sample_request, &references).expect("first");
    let second = search.search(&sample_request, &references).expect("second");
    assert_eq!(first.sites, second.sites);
}

#[rstest]
fn zero_sites_requested_returns_empty(sample_request: SearchRequest) {
    let response = GridSearch::new(FlatScorer)
        .search(
            &sample_request.with_number_of_sites(0),
            &ReferenceSet::default(),
        )
        .expect("search succeeds");
    assert!(response.sites.is_empty());
}

#[rstest]
fn fewer_candidates_than_requested_truncates(sample_request: SearchRequest) {
    let request = sample_request
        .with_bounds(SearchBounds::new(10.0, 10.2, 70.0, 70.0).expect("valid bounds"))
        .with_number_of_sites(10);
    let response = GridSearch::new(FlatScorer)
        .search(&request, &ReferenceSet::default())
        .expect("search succeeds");
    assert_eq!(response.sites.len(), 2);
}

#[rstest]
fn oversized_lattice_is_rejected(sample_request: SearchRequest) {
    let config = GridSearchConfig {
        max_lattice_points: 100,
        ..GridSearchConfig::default()
    };
    let result =
        GridSearch::with_config(FlatScorer, config).search(&sample_request, &ReferenceSet::default());
    assert_eq!(
        result,
        Err(SearchError::LatticeTooLarge {
            points: 500,
            limit: 100
        })
    );
}

#[rstest]
fn invalid_step_is_reported(sample_request: SearchRequest) {
    let result = GridSearch::new(FlatScorer).search(
        &sample_request.with_step_degrees(0.0),
        &ReferenceSet::default(),
    );
    assert!(matches!(result, Err(SearchError::InvalidStep { .. })));
}

#[rstest]
fn excluded_points_are_counted(sample_request: SearchRequest) {
    let references = references(
        vec![asset(10.0, 70.0, AssetKind::Plant, AssetStatus::Operational)],
        Vec::new(),
        Vec::new(),
    );
    let response = GridSearch::new(FlatScorer)
        .search(&sample_request, &references)
        .expect("search succeeds");
    assert_eq!(response.diagnostics.excluded_points, 1);
    assert_eq!(response.diagnostics.candidates_scored, 499);
    assert!(
        response
            .sites
            .iter()
            .all(|site| site.point != point(10.0, 70.0))
    );
}
