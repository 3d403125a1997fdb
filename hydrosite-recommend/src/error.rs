//! Errors raised while generating recommendations.

use hydrosite_core::{CriteriaError, GeoPointError, SearchError};
use thiserror::Error;

/// Errors returned by [`generate_recommendations`](crate::generate_recommendations).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecommendError {
    /// The criteria string did not name a known optimisation criteria.
    #[error(transparent)]
    InvalidCriteria(#[from] CriteriaError),
    /// No investment range was supplied.
    #[error("investment range required")]
    EmptyInvestmentRange,
    /// A candidate location was not a valid coordinate.
    #[error("invalid candidate location: {0}")]
    InvalidLocation(#[from] GeoPointError),
    /// The candidate search rejected its request.
    #[error("candidate search failed: {0}")]
    Search(#[from] SearchError),
}
