//! Facade crate for the hydrogen site engine.
//!
//! This crate re-exports the core domain types and exposes the scorer, the
//! grid search and recommendation generation behind feature flags.

#![forbid(unsafe_code)]

pub use hydrosite_core::{
    AnalysisSummary, AssetIndex, AssetKind, AssetStatus, CriteriaError, DemandCenter,
    DemandPriority, Diagnostics, FactorScores, FactorWeights, GeoPoint, GeoPointError,
    InfrastructureAsset, Located, MapBounds, OptimizationCriteria, PipelineLink, ReferenceSet,
    ReferenceSetError, RenewableKind, RenewableSource, SearchBounds, SearchError, SearchRequest,
    SearchResponse, SiteScore, SiteScorer, SiteSearch, distance_km, haversine_km,
};

#[cfg(feature = "scorer")]
pub use hydrosite_scorer::{FactorModel, WeightedSiteScorer};

#[cfg(feature = "solver-grid")]
pub use hydrosite_solver_grid::{GridSearch, GridSearchConfig};

#[cfg(feature = "recommend")]
pub use hydrosite_recommend::{
    CandidatePool, CostModel, CuratedPool, GridSearchPool, InvestmentRange, Recommendation,
    RecommendError, generate_recommendations,
};
