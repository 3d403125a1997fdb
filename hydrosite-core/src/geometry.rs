//! Map helpers shared by the engine and its callers.
//!
//! These operate on anything [`Located`]: assets, renewable sources, demand
//! centres or bare points.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    AssetKind, DEFAULT_MAP_CENTRE, DemandCenter, GeoPoint, InfrastructureAsset, RenewableSource,
    distance_km,
};

/// Padding added on each side of [`calculate_bounds`], as a share of the span.
const BOUNDS_PADDING_RATIO: f64 = 0.1;

/// Plants only connect to storage closer than this, in kilometres.
pub const PIPELINE_MAX_LINK_KM: f64 = 200.0;

/// Something with a position on the map.
pub trait Located {
    /// Position of the item.
    fn location(&self) -> GeoPoint;
}

impl Located for GeoPoint {
    fn location(&self) -> GeoPoint {
        *self
    }
}

impl Located for InfrastructureAsset {
    fn location(&self) -> GeoPoint {
        self.location
    }
}

impl Located for RenewableSource {
    fn location(&self) -> GeoPoint {
        self.location
    }
}

impl Located for DemandCenter {
    fn location(&self) -> GeoPoint {
        self.location
    }
}

/// An axis-aligned viewport in degrees.
///
/// Corners are raw degrees: padding may push them past the poles or the
/// antimeridian, which map viewports tolerate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MapBounds {
    /// `(latitude, longitude)` of the north-east corner.
    pub north_east: (f64, f64),
    /// `(latitude, longitude)` of the south-west corner.
    pub south_west: (f64, f64),
}

/// Fit a padded viewport around `items`, or `None` when empty.
///
/// # Examples
/// ```
/// use hydrosite_core::{GeoPoint, calculate_bounds};
///
/// let points = [GeoPoint::new(10.0, 70.0)?, GeoPoint::new(20.0, 80.0)?];
/// let bounds = calculate_bounds(&points).expect("non-empty input");
/// assert_eq!(bounds.north_east, (21.0, 81.0));
/// assert_eq!(bounds.south_west, (9.0, 69.0));
/// # Ok::<(), hydrosite_core::GeoPointError>(())
/// ```
#[expect(clippy::float_arithmetic, reason = "padding scales the bounding span")]
#[must_use]
pub fn calculate_bounds<T: Located>(items: &[T]) -> Option<MapBounds> {
    let mut points = items.iter().map(Located::location);
    let first = points.next()?;
    let init = (
        first.latitude(),
        first.latitude(),
        first.longitude(),
        first.longitude(),
    );
    let (min_lat, max_lat, min_lon, max_lon) =
        points.fold(init, |(min_lat, max_lat, min_lon, max_lon), p| {
            (
                min_lat.min(p.latitude()),
                max_lat.max(p.latitude()),
                min_lon.min(p.longitude()),
                max_lon.max(p.longitude()),
            )
        });
    let lat_padding = (max_lat - min_lat) * BOUNDS_PADDING_RATIO;
    let lon_padding = (max_lon - min_lon) * BOUNDS_PADDING_RATIO;
    Some(MapBounds {
        north_east: (max_lat + lat_padding, max_lon + lon_padding),
        south_west: (min_lat - lat_padding, min_lon - lon_padding),
    })
}

/// Arithmetic mean of the positions of `items`.
///
/// Returns [`DEFAULT_MAP_CENTRE`] for an empty slice.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "averaging coordinates"
)]
#[must_use]
pub fn centre<T: Located>(items: &[T]) -> GeoPoint {
    if items.is_empty() {
        return DEFAULT_MAP_CENTRE;
    }
    let count = items.len() as f64;
    let (lat_sum, lon_sum) = items.iter().map(Located::location).fold(
        (0.0_f64, 0.0_f64),
        |(lat_sum, lon_sum), p| (lat_sum + p.latitude(), lon_sum + p.longitude()),
    );
    // The mean of in-range values stays in range.
    GeoPoint::new(lat_sum / count, lon_sum / count).unwrap_or(DEFAULT_MAP_CENTRE)
}

/// Items whose distance from `centre` is at most `radius_km`.
///
/// # Examples
/// ```
/// use hydrosite_core::{GeoPoint, within_radius};
///
/// let here = GeoPoint::new(0.0, 0.0)?;
/// let points = [GeoPoint::new(0.0, 0.05)?, GeoPoint::new(0.0, 5.0)?];
/// assert_eq!(within_radius(&points, here, 10.0).len(), 1);
/// # Ok::<(), hydrosite_core::GeoPointError>(())
/// ```
#[must_use]
pub fn within_radius<T: Located>(items: &[T], centre: GeoPoint, radius_km: f64) -> Vec<&T> {
    items
        .iter()
        .filter(|item| distance_km(centre, item.location()) <= radius_km)
        .collect()
}

/// A proposed pipeline between a plant and its nearest storage asset.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PipelineLink {
    /// Producing plant.
    pub plant: GeoPoint,
    /// Receiving storage.
    pub storage: GeoPoint,
    /// Great-circle length in kilometres.
    pub length_km: f64,
}

/// Connect every plant to its nearest storage asset within
/// [`PIPELINE_MAX_LINK_KM`].
///
/// Plants with no storage in reach get no link. Ties keep the first storage
/// asset in input order.
#[must_use]
pub fn pipeline_network(assets: &[InfrastructureAsset]) -> Vec<PipelineLink> {
    let storage: Vec<GeoPoint> = assets
        .iter()
        .filter(|asset| asset.kind == AssetKind::Storage)
        .map(|asset| asset.location)
        .collect();
    assets
        .iter()
        .filter(|asset| asset.kind == AssetKind::Plant)
        .filter_map(|plant| {
            storage
                .iter()
                .map(|&store| (store, distance_km(plant.location, store)))
                .fold(None, |best: Option<(GeoPoint, f64)>, candidate| match best {
                    Some(current) if current.1 <= candidate.1 => Some(current),
                    _ => Some(candidate),
                })
                .filter(|&(_, length_km)| length_km < PIPELINE_MAX_LINK_KM)
                .map(|(store, length_km)| PipelineLink {
                    plant: plant.location,
                    storage: store,
                    length_km,
                })
        })
        .collect()
}
