//! Validated WGS84 positions.
//!
//! Every coordinate that reaches the distance or scoring code passes through
//! [`GeoPoint::new`], so downstream arithmetic never sees NaN, infinities or
//! out-of-range angles.

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Valid latitude range in degrees.
pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

/// Valid longitude range in degrees.
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// Map centre used when there is nothing to average: central western India.
pub const DEFAULT_MAP_CENTRE: GeoPoint = GeoPoint::from_constant(23.0, 72.0);

/// Errors returned by [`GeoPoint::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoPointError {
    /// Latitude was NaN, infinite or outside `-90.0..=90.0`.
    #[error("invalid latitude {latitude}; expected a finite value in -90..=90")]
    InvalidLatitude {
        /// Rejected value.
        latitude: f64,
    },
    /// Longitude was NaN, infinite or outside `-180.0..=180.0`.
    #[error("invalid longitude {longitude}; expected a finite value in -180..=180")]
    InvalidLongitude {
        /// Rejected value.
        longitude: f64,
    },
}

/// A latitude/longitude pair in degrees.
///
/// # Examples
/// ```
/// use hydrosite_core::GeoPoint;
///
/// let jamnagar = GeoPoint::new(22.34516, 69.8596)?;
/// assert_eq!(jamnagar.latitude(), 22.34516);
/// assert!(GeoPoint::new(91.0, 0.0).is_err());
/// # Ok::<(), hydrosite_core::GeoPointError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGeoPoint"))]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

/// Unchecked wire form of [`GeoPoint`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawGeoPoint {
    latitude: f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = GeoPointError;

    fn try_from(raw: RawGeoPoint) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl GeoPoint {
    /// Validate and construct a point.
    ///
    /// # Errors
    /// Returns [`GeoPointError`] when either component is non-finite or
    /// outside its range. Values are never clamped.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoPointError> {
        if !latitude.is_finite() || !LATITUDE_RANGE.contains(&latitude) {
            return Err(GeoPointError::InvalidLatitude { latitude });
        }
        if !longitude.is_finite() || !LONGITUDE_RANGE.contains(&longitude) {
            return Err(GeoPointError::InvalidLongitude { longitude });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Build a point from literals known to be in range.
    pub(crate) const fn from_constant(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl From<GeoPoint> for Coord<f64> {
    /// Convert using the `x = longitude`, `y = latitude` axis order.
    fn from(point: GeoPoint) -> Self {
        Self {
            x: point.longitude,
            y: point.latitude,
        }
    }
}

impl TryFrom<Coord<f64>> for GeoPoint {
    type Error = GeoPointError;

    fn try_from(coord: Coord<f64>) -> Result<Self, Self::Error> {
        Self::new(coord.y, coord.x)
    }
}

/// Report whether a latitude/longitude pair would pass [`GeoPoint::new`].
///
/// # Examples
/// ```
/// use hydrosite_core::is_valid_coordinate;
///
/// assert!(is_valid_coordinate(23.0, 72.0));
/// assert!(!is_valid_coordinate(f64::NAN, 72.0));
/// ```
#[must_use]
pub fn is_valid_coordinate(latitude: f64, longitude: f64) -> bool {
    GeoPoint::new(latitude, longitude).is_ok()
}

/// Render a point as `"22.3452°N, 69.8596°E"`.
///
/// # Examples
/// ```
/// use hydrosite_core::{GeoPoint, format_coordinates};
///
/// let point = GeoPoint::new(-8.5, -70.25)?;
/// assert_eq!(format_coordinates(point), "8.5000°S, 70.2500°W");
/// # Ok::<(), hydrosite_core::GeoPointError>(())
/// ```
#[must_use]
pub fn format_coordinates(point: GeoPoint) -> String {
    let lat_hemisphere = if point.latitude >= 0.0 { 'N' } else { 'S' };
    let lon_hemisphere = if point.longitude >= 0.0 { 'E' } else { 'W' };
    format!(
        "{:.4}°{lat_hemisphere}, {:.4}°{lon_hemisphere}",
        point.latitude.abs(),
        point.longitude.abs()
    )
}
