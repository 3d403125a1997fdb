//! Grid-search candidate generation for hydrogen sites.
//!
//! [`GridSearch`] implements [`SiteSearch`](hydrosite_core::SiteSearch) by
//! sweeping a regular latitude/longitude lattice over the request bounds,
//! dropping points that sit inside the exclusion radius of an existing asset,
//! scoring the rest with any [`SiteScorer`](hydrosite_core::SiteScorer) and
//! returning the best `number_of_sites` of them.
//!
//! Enumeration is row-major with latitude outer and longitude inner, both
//! ascending. Ranking is a stable sort on the composite score, so equal
//! scores keep lattice order. With the `parallel` feature rows are scored on
//! the `rayon` pool and merged back in lattice order, which keeps the output
//! identical to the sequential sweep.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod lattice;
mod solver;

pub use solver::{GridSearch, GridSearchConfig};
