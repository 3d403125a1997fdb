//! Requests, responses and the trait for candidate site searches.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{GeoPoint, GeoPointError, OptimizationCriteria, ReferenceSet, SiteScore};

/// Default number of sites returned by a search.
pub const DEFAULT_NUMBER_OF_SITES: usize = 10;

/// Default lattice spacing in degrees.
pub const DEFAULT_STEP_DEGREES: f64 = 0.2;

/// Inclusive latitude/longitude window swept by a search.
///
/// # Examples
/// ```
/// use hydrosite_core::SearchBounds;
///
/// let india = SearchBounds::default();
/// assert_eq!(india.min_latitude(), 8.0);
/// assert_eq!(india.max_longitude(), 97.0);
/// assert!(SearchBounds::new(10.0, 5.0, 70.0, 80.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SearchBounds {
    south_west: GeoPoint,
    north_east: GeoPoint,
}

impl SearchBounds {
    /// Validate and construct bounds.
    ///
    /// # Errors
    /// Returns [`SearchError::InvalidCorner`] for out-of-range corners and
    /// [`SearchError::InvertedBounds`] when a minimum exceeds its maximum.
    pub fn new(
        min_latitude: f64,
        max_latitude: f64,
        min_longitude: f64,
        max_longitude: f64,
    ) -> Result<Self, SearchError> {
        let south_west = GeoPoint::new(min_latitude, min_longitude)?;
        let north_east = GeoPoint::new(max_latitude, max_longitude)?;
        if min_latitude > max_latitude || min_longitude > max_longitude {
            return Err(SearchError::InvertedBounds);
        }
        Ok(Self {
            south_west,
            north_east,
        })
    }

    /// Southern edge.
    #[must_use]
    pub const fn min_latitude(&self) -> f64 {
        self.south_west.latitude()
    }

    /// Northern edge.
    #[must_use]
    pub const fn max_latitude(&self) -> f64 {
        self.north_east.latitude()
    }

    /// Western edge.
    #[must_use]
    pub const fn min_longitude(&self) -> f64 {
        self.south_west.longitude()
    }

    /// Eastern edge.
    #[must_use]
    pub const fn max_longitude(&self) -> f64 {
        self.north_east.longitude()
    }
}

impl Default for SearchBounds {
    /// Mainland India: latitude 8–37, longitude 68–97.
    fn default() -> Self {
        Self {
            south_west: GeoPoint::from_constant(8.0, 68.0),
            north_east: GeoPoint::from_constant(37.0, 97.0),
        }
    }
}

/// Parameters for a candidate site search.
///
/// # Examples
/// ```rust
/// use hydrosite_core::{OptimizationCriteria, SearchRequest};
///
/// let request = SearchRequest::new(OptimizationCriteria::CostOptimization);
/// assert_eq!(request.number_of_sites, 10);
/// assert_eq!(request.step_degrees, 0.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SearchRequest {
    /// Objective selecting the weight vector.
    pub criteria: OptimizationCriteria,
    /// Maximum number of sites to return. Zero yields an empty result.
    #[cfg_attr(feature = "serde", serde(default = "default_number_of_sites"))]
    pub number_of_sites: usize,
    /// Window swept by the lattice.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bounds: SearchBounds,
    /// Lattice spacing in degrees on both axes.
    #[cfg_attr(feature = "serde", serde(default = "default_step_degrees"))]
    pub step_degrees: f64,
}

#[cfg(feature = "serde")]
const fn default_number_of_sites() -> usize {
    DEFAULT_NUMBER_OF_SITES
}

#[cfg(feature = "serde")]
const fn default_step_degrees() -> f64 {
    DEFAULT_STEP_DEGREES
}

impl SearchRequest {
    /// Build a request with default size, bounds and spacing.
    #[must_use]
    pub fn new(criteria: OptimizationCriteria) -> Self {
        Self {
            criteria,
            number_of_sites: DEFAULT_NUMBER_OF_SITES,
            bounds: SearchBounds::default(),
            step_degrees: DEFAULT_STEP_DEGREES,
        }
    }

    /// Replace the number of sites while returning `self` for chaining.
    #[must_use]
    pub const fn with_number_of_sites(mut self, number_of_sites: usize) -> Self {
        self.number_of_sites = number_of_sites;
        self
    }

    /// Replace the bounds while returning `self` for chaining.
    #[must_use]
    pub const fn with_bounds(mut self, bounds: SearchBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Replace the lattice spacing while returning `self` for chaining.
    #[must_use]
    pub const fn with_step_degrees(mut self, step_degrees: f64) -> Self {
        self.step_degrees = step_degrees;
        self
    }

    /// Check the request parameters.
    ///
    /// # Errors
    /// Returns [`SearchError::InvalidStep`] when the spacing is not a
    /// finite, positive number and [`SearchError::InvertedBounds`] when
    /// deserialised bounds are upside down.
    pub fn validate(&self) -> Result<(), SearchError> {
        let bounds = &self.bounds;
        if bounds.min_latitude() > bounds.max_latitude()
            || bounds.min_longitude() > bounds.max_longitude()
        {
            return Err(SearchError::InvertedBounds);
        }
        if !self.step_degrees.is_finite() || self.step_degrees <= 0.0 {
            return Err(SearchError::InvalidStep {
                step_degrees: self.step_degrees,
            });
        }
        Ok(())
    }
}

/// Counters describing how a search spent its effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Diagnostics {
    /// Wall-clock time spent in the search.
    pub search_time: Duration,
    /// Lattice points enumerated.
    pub lattice_points: u64,
    /// Lattice points dropped by the exclusion radius.
    pub excluded_points: u64,
    /// Lattice points scored.
    pub candidates_scored: u64,
}

/// Result of a successful search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SearchResponse {
    /// Best sites, highest composite score first.
    pub sites: Vec<SiteScore>,
    /// Effort counters.
    pub diagnostics: Diagnostics,
}

/// Errors returned by [`SiteSearch::search`] and request validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// A bounds corner was not a valid coordinate.
    #[error("invalid search bounds corner: {0}")]
    InvalidCorner(#[from] GeoPointError),
    /// A minimum edge exceeded the matching maximum edge.
    #[error("search bounds minimum exceeds maximum")]
    InvertedBounds,
    /// The lattice spacing was zero, negative or non-finite.
    #[error("lattice step {step_degrees} must be a finite, positive number of degrees")]
    InvalidStep {
        /// Rejected spacing.
        step_degrees: f64,
    },
    /// The lattice would exceed the configured point ceiling.
    #[error("lattice of {points} points exceeds the limit of {limit}")]
    LatticeTooLarge {
        /// Points the request would enumerate.
        points: u64,
        /// Configured ceiling.
        limit: u64,
    },
}

/// Find the best candidate sites for a request.
///
/// Implementations receive the reference collections as plain input, hold no
/// state between calls and must return identical output for identical input.
/// Searches must be `Send + Sync` to run across threads.
pub trait SiteSearch: Send + Sync {
    /// Run a search against `references`.
    ///
    /// # Errors
    /// Returns [`SearchError`] for invalid requests.
    fn search(
        &self,
        request: &SearchRequest,
        references: &ReferenceSet,
    ) -> Result<SearchResponse, SearchError>;
}
