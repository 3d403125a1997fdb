//! Great-circle distance on a spherical Earth.
//!
//! All scoring factors share this one haversine implementation. It takes
//! already validated [`GeoPoint`]s, so it has no error path; the raw
//! [`haversine_km`] form propagates NaN and infinities unchanged.

use crate::GeoPoint;

/// Mean Earth radius used by every distance in the engine, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two raw degree pairs.
///
/// # Examples
/// ```
/// use hydrosite_core::haversine_km;
///
/// let d = haversine_km(0.0, 0.0, 0.0, 1.0);
/// assert!((d - 111.195).abs() < 0.001);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
#[must_use]
pub fn haversine_km(lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> f64 {
    let d_lat = (lat_b - lat_a).to_radians();
    let d_lon = (lon_b - lon_a).to_radians();
    let half_chord = (d_lat / 2.0).sin().powi(2)
        + lat_a.to_radians().cos() * lat_b.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push antipodal pairs just past 1.0.
    let half_chord = half_chord.clamp(0.0, 1.0);
    let angle = 2.0 * half_chord.sqrt().atan2((1.0 - half_chord).sqrt());
    EARTH_RADIUS_KM * angle
}

/// Great-circle distance in kilometres between two points.
///
/// # Examples
/// ```
/// use hydrosite_core::{GeoPoint, distance_km};
///
/// let a = GeoPoint::new(22.0, 70.0)?;
/// assert_eq!(distance_km(a, a), 0.0);
/// # Ok::<(), hydrosite_core::GeoPointError>(())
/// ```
#[must_use]
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    haversine_km(a.latitude(), a.longitude(), b.latitude(), b.longitude())
}

/// Smallest distance from `origin` to any of `targets`.
///
/// Returns `None` for an empty iterator so callers decide what "no target"
/// means for their factor instead of inheriting an implicit infinity.
#[must_use]
pub fn min_distance_km<I>(origin: GeoPoint, targets: I) -> Option<f64>
where
    I: IntoIterator<Item = GeoPoint>,
{
    targets
        .into_iter()
        .map(|target| distance_km(origin, target))
        .reduce(f64::min)
}

/// Mean distance from `origin` to `targets`, or `None` when empty.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "averaging distances divides a float sum by the element count"
)]
#[must_use]
pub fn mean_distance_km<I>(origin: GeoPoint, targets: I) -> Option<f64>
where
    I: IntoIterator<Item = GeoPoint>,
{
    let (sum, count) = targets
        .into_iter()
        .fold((0.0_f64, 0_usize), |(sum, count), target| {
            (sum + distance_km(origin, target), count + 1)
        });
    (count > 0).then(|| sum / count as f64)
}
