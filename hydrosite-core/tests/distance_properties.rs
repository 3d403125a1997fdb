//! Property-based tests for the haversine distance.
//!
//! # Invariants tested
//!
//! - **Symmetry:** `d(a, b) == d(b, a)`.
//! - **Zero law:** `d(a, a) == 0`.
//! - **Triangle inequality:** `d(a, c) <= d(a, b) + d(b, c)`.
//! - **Range:** distances are finite and never exceed half the circumference.

use hydrosite_core::{EARTH_RADIUS_KM, GeoPoint, distance_km};
use proptest::prelude::*;

/// Tolerance for floating-point error, in kilometres. Near-antipodal pairs
/// lose precision in `sqrt(1 - a)`, so this is looser than machine epsilon.
/// Exact antipodes are covered by the unit tests in `distance.rs`.
const TOLERANCE_KM: f64 = 1e-3;

fn geo_point() -> impl Strategy<Value = GeoPoint> {
    (-90.0_f64..=90.0, -180.0_f64..=180.0)
        .prop_map(|(latitude, longitude)| GeoPoint::new(latitude, longitude))
        .prop_filter_map("coordinates are in range", Result::ok)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn distance_is_symmetric(a in geo_point(), b in geo_point()) {
        let forward = distance_km(a, b);
        let backward = distance_km(b, a);
        prop_assert!(
            (forward - backward).abs() <= TOLERANCE_KM,
            "d(a,b) = {forward}, d(b,a) = {backward}"
        );
    }

    #[test]
    fn distance_to_self_is_zero(a in geo_point()) {
        prop_assert_eq!(distance_km(a, a), 0.0);
    }

    #[test]
    fn distance_obeys_triangle_inequality(
        a in geo_point(),
        b in geo_point(),
        c in geo_point(),
    ) {
        let direct = distance_km(a, c);
        let detour = distance_km(a, b) + distance_km(b, c);
        prop_assert!(
            direct <= detour + TOLERANCE_KM,
            "direct {direct} exceeds detour {detour}"
        );
    }

    #[test]
    fn distance_is_bounded(a in geo_point(), b in geo_point()) {
        let d = distance_km(a, b);
        prop_assert!(d.is_finite());
        prop_assert!(d >= 0.0);
        prop_assert!(d <= EARTH_RADIUS_KM * std::f64::consts::PI + TOLERANCE_KM);
    }
}
