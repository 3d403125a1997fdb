//! R\*-tree over asset locations for exclusion-radius queries.
//!
//! The grid search asks, for every lattice point, whether any existing asset
//! lies closer than the exclusion radius. A linear scan makes that
//! `O(points × assets)`; the index narrows each query to a small degree
//! envelope and then confirms hits with the exact haversine distance, so the
//! answer always matches the scan.

use rstar::{AABB, RTree, RTreeObject};

use crate::{EARTH_RADIUS_KM, GeoPoint, InfrastructureAsset, distance_km};

/// Relative slack added to the query envelope so rounding never drops a hit.
const ENVELOPE_SLACK: f64 = 1.01;

/// Location stored in the tree. Axis order is `[longitude, latitude]`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct IndexedLocation(GeoPoint);

impl RTreeObject for IndexedLocation {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.0.longitude(), self.0.latitude()])
    }
}

/// Spatial index over the positions of existing assets.
///
/// # Examples
/// ```
/// use hydrosite_core::{AssetIndex, AssetKind, AssetStatus, GeoPoint, InfrastructureAsset};
///
/// let asset = InfrastructureAsset::new(
///     "Dahej",
///     GeoPoint::new(21.7294, 72.6642)?,
///     AssetKind::Storage,
///     AssetStatus::Operational,
/// );
/// let index = AssetIndex::new(&[asset]);
/// assert!(index.any_within(GeoPoint::new(21.73, 72.66)?, 10.0));
/// assert!(!index.any_within(GeoPoint::new(23.0, 72.66)?, 10.0));
/// # Ok::<(), hydrosite_core::GeoPointError>(())
/// ```
#[derive(Debug)]
pub struct AssetIndex {
    tree: RTree<IndexedLocation>,
}

impl AssetIndex {
    /// Index the locations of `assets`.
    #[must_use]
    pub fn new(assets: &[InfrastructureAsset]) -> Self {
        let entries = assets
            .iter()
            .map(|asset| IndexedLocation(asset.location))
            .collect();
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Number of indexed assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Report whether the index holds no assets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Report whether any asset lies strictly closer than `radius_km`.
    #[must_use]
    pub fn any_within(&self, point: GeoPoint, radius_km: f64) -> bool {
        if self.is_empty() || radius_km.is_nan() || radius_km <= 0.0 {
            return false;
        }
        let envelope = query_envelope(point, radius_km);
        self.tree
            .locate_in_envelope(&envelope)
            .any(|entry| distance_km(point, entry.0) < radius_km)
    }
}

/// Degree box guaranteed to contain every point within `radius_km`.
#[expect(
    clippy::float_arithmetic,
    reason = "converting a ground distance into angular bounds"
)]
fn query_envelope(point: GeoPoint, radius_km: f64) -> AABB<[f64; 2]> {
    let angular = radius_km / EARTH_RADIUS_KM;
    let lat_delta = angular.to_degrees() * ENVELOPE_SLACK;
    let min_lat = point.latitude() - lat_delta;
    let max_lat = point.latitude() + lat_delta;

    let full_longitudes = |min_lat: f64, max_lat: f64| {
        AABB::from_corners([-180.0, min_lat.max(-90.0)], [180.0, max_lat.min(90.0)])
    };

    // Envelopes touching a pole cover every longitude.
    if !angular.is_finite() || min_lat <= -90.0 || max_lat >= 90.0 {
        return full_longitudes(min_lat, max_lat);
    }

    let widest_cos = min_lat.abs().max(max_lat.abs()).to_radians().cos();
    let ratio = angular.sin() / widest_cos;
    if angular >= std::f64::consts::FRAC_PI_2 || ratio >= 1.0 {
        return full_longitudes(min_lat, max_lat);
    }
    let lon_delta = ratio.asin().to_degrees() * ENVELOPE_SLACK;
    let min_lon = point.longitude() - lon_delta;
    let max_lon = point.longitude() + lon_delta;

    // Wrapping across the antimeridian widens to the full band rather than
    // splitting the query in two.
    if min_lon < -180.0 || max_lon > 180.0 {
        return full_longitudes(min_lat, max_lat);
    }
    AABB::from_corners([min_lon, min_lat], [max_lon, max_lat])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AssetKind, AssetStatus};
    use rstest::rstest;

    fn asset_at(latitude: f64, longitude: f64) -> InfrastructureAsset {
        InfrastructureAsset::new(
            "asset",
            GeoPoint::new(latitude, longitude).expect("valid point"),
            AssetKind::Plant,
            AssetStatus::Planned,
        )
    }

    fn point(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint::new(latitude, longitude).expect("valid point")
    }

    #[rstest]
    fn empty_index_never_matches() {
        let index = AssetIndex::new(&[]);
        assert!(index.is_empty());
        assert!(!index.any_within(point(0.0, 0.0), 1_000.0));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    #[case(f64::NAN)]
    fn non_positive_radius_never_matches(#[case] radius: f64) {
        let index = AssetIndex::new(&[asset_at(0.0, 0.0)]);
        assert!(!index.any_within(point(0.0, 0.0), radius));
    }

    #[rstest]
    fn radius_is_strict() {
        let index = AssetIndex::new(&[asset_at(0.0, 1.0)]);
        let exact = distance_km(point(0.0, 0.0), point(0.0, 1.0));
        assert!(!index.any_within(point(0.0, 0.0), exact));
        assert!(index.any_within(point(0.0, 0.0), exact + 1e-6));
    }

    #[rstest]
    // Across the antimeridian.
    #[case(point(0.0, 179.99), asset_at(0.0, -179.99))]
    // Near the pole, where longitude degrees are short.
    #[case(point(89.99, 0.0), asset_at(89.99, 120.0))]
    fn finds_neighbours_in_awkward_places(
        #[case] origin: GeoPoint,
        #[case] neighbour: InfrastructureAsset,
    ) {
        assert!(distance_km(origin, neighbour.location) < 10.0);
        let index = AssetIndex::new(&[neighbour]);
        assert!(index.any_within(origin, 10.0));
    }

    #[rstest]
    fn infinite_radius_matches_any_asset() {
        let index = AssetIndex::new(&[asset_at(-45.0, -120.0)]);
        assert!(index.any_within(point(45.0, 60.0), f64::INFINITY));
    }
}
