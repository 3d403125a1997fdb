//! Regular lattice over search bounds.

use hydrosite_core::{GeoPoint, SearchBounds};

/// Slack added before flooring an axis span so that spans which are exact
/// multiples of the step keep their far edge despite rounding.
const SNAP: f64 = 1e-9;

/// Lattice of `rows × cols` points spaced `step` degrees apart, anchored at
/// the south-west corner.
///
/// Points are derived from integer indices (`origin + i × step`) rather than
/// by repeated addition, so long sweeps do not accumulate drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Lattice {
    south: f64,
    west: f64,
    north: f64,
    east: f64,
    step: f64,
    rows: u64,
    cols: u64,
}

impl Lattice {
    /// Build the lattice for validated bounds and a positive, finite step.
    pub(crate) fn new(bounds: &SearchBounds, step: f64) -> Self {
        Self {
            south: bounds.min_latitude(),
            west: bounds.min_longitude(),
            north: bounds.max_latitude(),
            east: bounds.max_longitude(),
            step,
            rows: axis_len(bounds.min_latitude(), bounds.max_latitude(), step),
            cols: axis_len(bounds.min_longitude(), bounds.max_longitude(), step),
        }
    }

    /// Number of latitude rows.
    pub(crate) const fn rows(&self) -> u64 {
        self.rows
    }

    /// Number of longitude columns.
    pub(crate) const fn cols(&self) -> u64 {
        self.cols
    }

    /// Total number of lattice points, saturating at `u64::MAX`.
    pub(crate) const fn len(&self) -> u64 {
        self.rows.saturating_mul(self.cols)
    }

    /// Points of one latitude row, west to east.
    pub(crate) fn row(&self, row: u64) -> impl Iterator<Item = GeoPoint> + '_ {
        let latitude = coordinate(self.south, row, self.step, self.north);
        (0..self.cols).filter_map(move |col| {
            let longitude = coordinate(self.west, col, self.step, self.east);
            GeoPoint::new(latitude, longitude).ok()
        })
    }

    /// Every point in enumeration order.
    pub(crate) fn points(&self) -> impl Iterator<Item = GeoPoint> + '_ {
        (0..self.rows).flat_map(move |row| self.row(row))
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "span over step is finite and non-negative; the cast saturates"
)]
fn axis_len(min: f64, max: f64, step: f64) -> u64 {
    let intervals = ((max - min) / step + SNAP).floor();
    (intervals as u64).saturating_add(1)
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "lattice indices stay far below 2^52"
)]
fn coordinate(origin: f64, index: u64, step: f64, limit: f64) -> f64 {
    (origin + index as f64 * step).min(limit)
}
