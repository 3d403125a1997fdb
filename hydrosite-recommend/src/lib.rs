//! Investment-filtered site recommendations.
//!
//! [`generate_recommendations`] turns a [`CandidatePool`] into a ranked list
//! of [`Recommendation`]s for a criteria and an investment range label.
//! Two pools are provided:
//!
//! - [`CuratedPool`], a fixed set of three hand-picked sites;
//! - [`GridSearchPool`], which runs any
//!   [`SiteSearch`](hydrosite_core::SiteSearch) over the reference
//!   collections and prices each site with a placeholder [`CostModel`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod investment;
mod pool;
mod recommendation;

pub use error::RecommendError;
pub use investment::{InvestmentRange, RANGE_10L_50L, RANGE_50L_100L, RANGE_100L_PLUS};
pub use pool::{
    Candidate, CandidatePool, CostModel, CuratedPool, GridSearchPool, TAG_THRESHOLD, factor_tags,
};
pub use recommendation::{Recommendation, generate_recommendations};
