//! Property tests: every factor and composite stays within `0..=100`.

use hydrosite_core::{
    AssetKind, AssetStatus, DemandCenter, DemandPriority, GeoPoint, InfrastructureAsset,
    OptimizationCriteria, ReferenceSet, RenewableKind, RenewableSource, SiteScorer,
};
use hydrosite_scorer::WeightedSiteScorer;
use proptest::prelude::*;

fn geo_point() -> impl Strategy<Value = GeoPoint> {
    (-90.0_f64..=90.0, -180.0_f64..=180.0)
        .prop_filter_map("valid coordinate", |(lat, lon)| GeoPoint::new(lat, lon).ok())
}

fn status() -> impl Strategy<Value = AssetStatus> {
    prop_oneof![
        Just(AssetStatus::Operational),
        Just(AssetStatus::UnderConstruction),
        Just(AssetStatus::Planned),
    ]
}

fn priority() -> impl Strategy<Value = DemandPriority> {
    prop_oneof![
        Just(DemandPriority::High),
        Just(DemandPriority::Medium),
        Just(DemandPriority::Low),
    ]
}

fn criteria() -> impl Strategy<Value = OptimizationCriteria> {
    proptest::sample::select(OptimizationCriteria::ALL.to_vec())
}

fn reference_set() -> impl Strategy<Value = ReferenceSet> {
    let assets = prop::collection::vec((geo_point(), status()), 0..6).prop_map(|items| {
        items
            .into_iter()
            .map(|(location, status)| {
                InfrastructureAsset::new("asset", location, AssetKind::Plant, status)
            })
            .collect::<Vec<_>>()
    });
    let renewables = prop::collection::vec(geo_point(), 0..6).prop_map(|items| {
        items
            .into_iter()
            .map(|location| RenewableSource::new("source", location, RenewableKind::Wind))
            .collect::<Vec<_>>()
    });
    let demand = prop::collection::vec(
        (geo_point(), proptest::option::of(1.0_f64..100_000.0), priority()),
        0..6,
    )
    .prop_map(|items| {
        items
            .into_iter()
            .map(|(location, annual, priority)| {
                DemandCenter::new("centre", location, annual, priority)
            })
            .collect::<Vec<_>>()
    });
    (assets, renewables, demand).prop_filter_map(
        "valid reference set",
        |(assets, renewables, demand)| ReferenceSet::new(assets, renewables, demand).ok(),
    )
}

proptest! {
    #[test]
    fn scores_stay_in_range(
        site in geo_point(),
        references in reference_set(),
        criteria in criteria(),
    ) {
        let score = WeightedSiteScorer::default().score_site(site, criteria, &references);
        prop_assert!(score.composite_score <= 100);
        for factor in score.factors.iter() {
            prop_assert!(factor.is_finite());
            prop_assert!((0.0..=100.0).contains(&factor));
        }
    }

    #[test]
    fn scoring_is_deterministic(
        site in geo_point(),
        references in reference_set(),
        criteria in criteria(),
    ) {
        let scorer = WeightedSiteScorer::default();
        prop_assert_eq!(
            scorer.score_site(site, criteria, &references),
            scorer.score_site(site, criteria, &references)
        );
    }
}
