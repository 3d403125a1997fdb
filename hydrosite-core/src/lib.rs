//! Core domain types for the hydrogen site engine.
//!
//! The crate defines validated coordinates, the reference collections a
//! scoring run consults (existing assets, renewable sources, demand centres),
//! the optimisation criteria with their weight vectors, the shared haversine
//! distance, and the traits that the scorer and the candidate search
//! implement. Constructors return `Result` so invalid coordinates are
//! rejected at the boundary instead of leaking NaN into scores.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod asset;
mod criteria;
mod demand;
mod distance;
mod geometry;
mod index;
mod point;
mod reference;
mod renewable;
mod score;
mod scorer;
mod search;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use asset::{AssetKind, AssetStatus, InfrastructureAsset};
pub use criteria::{CriteriaError, FactorWeights, OptimizationCriteria};
pub use demand::{DEFAULT_ANNUAL_DEMAND, DemandCenter, DemandPriority};
pub use distance::{EARTH_RADIUS_KM, distance_km, haversine_km, mean_distance_km, min_distance_km};
pub use geometry::{
    Located, MapBounds, PIPELINE_MAX_LINK_KM, PipelineLink, calculate_bounds, centre,
    pipeline_network, within_radius,
};
pub use index::AssetIndex;
pub use point::{
    DEFAULT_MAP_CENTRE, GeoPoint, GeoPointError, LATITUDE_RANGE, LONGITUDE_RANGE,
    format_coordinates, is_valid_coordinate,
};
pub use reference::{AnalysisSummary, ReferenceSet, ReferenceSetError};
pub use renewable::{RenewableKind, RenewableSource};
pub use score::{FactorScores, SiteScore};
pub use scorer::SiteScorer;
pub use search::{
    DEFAULT_NUMBER_OF_SITES, DEFAULT_STEP_DEGREES, Diagnostics, SearchBounds, SearchError,
    SearchRequest, SearchResponse, SiteSearch,
};
