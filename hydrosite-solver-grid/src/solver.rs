//! `GridSearch` implementation of `SiteSearch`.

use std::time::Instant;

use hydrosite_core::{
    AssetIndex, Diagnostics, GeoPoint, OptimizationCriteria, ReferenceSet, SearchError,
    SearchRequest, SearchResponse, SiteScore, SiteScorer, SiteSearch,
};

use crate::lattice::Lattice;

/// Configuration for [`GridSearch`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSearchConfig {
    /// Lattice points strictly closer than this to any existing asset are
    /// not considered.
    pub exclusion_radius_km: f64,
    /// Largest lattice a single request may enumerate.
    pub max_lattice_points: u64,
}

impl Default for GridSearchConfig {
    fn default() -> Self {
        Self {
            exclusion_radius_km: 10.0,
            max_lattice_points: 4_000_000,
        }
    }
}

/// Exhaustive lattice search over the request bounds.
///
/// # Examples
///
/// ```
/// use hydrosite_core::{OptimizationCriteria, ReferenceSet, SearchBounds, SearchRequest, SiteSearch};
/// use hydrosite_scorer::WeightedSiteScorer;
/// use hydrosite_solver_grid::GridSearch;
///
/// let search = GridSearch::new(WeightedSiteScorer::default());
/// let request = SearchRequest::new(OptimizationCriteria::CostOptimization)
///     .with_bounds(SearchBounds::new(10.0, 11.0, 70.0, 71.0)?)
///     .with_number_of_sites(3);
/// let response = search.search(&request, &ReferenceSet::default())?;
/// assert_eq!(response.sites.len(), 3);
/// assert_eq!(response.diagnostics.lattice_points, 36);
/// # Ok::<(), hydrosite_core::SearchError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GridSearch<C>
where
    C: SiteScorer,
{
    scorer: C,
    config: GridSearchConfig,
}

impl<C> GridSearch<C>
where
    C: SiteScorer,
{
    /// Construct a search using default configuration.
    pub fn new(scorer: C) -> Self {
        Self::with_config(scorer, GridSearchConfig::default())
    }

    /// Construct a search with explicit configuration.
    pub const fn with_config(scorer: C, config: GridSearchConfig) -> Self {
        Self { scorer, config }
    }

    /// Active configuration.
    pub const fn config(&self) -> &GridSearchConfig {
        &self.config
    }

    /// Scorer used for surviving lattice points.
    pub const fn scorer(&self) -> &C {
        &self.scorer
    }
}

impl<C> SiteSearch for GridSearch<C>
where
    C: SiteScorer,
{
    fn search(
        &self,
        request: &SearchRequest,
        references: &ReferenceSet,
    ) -> Result<SearchResponse, SearchError> {
        request.validate()?;
        let started_at = Instant::now();

        let lattice = Lattice::new(&request.bounds, request.step_degrees);
        let lattice_points = lattice.len();
        if lattice_points > self.config.max_lattice_points {
            return Err(SearchError::LatticeTooLarge {
                points: lattice_points,
                limit: self.config.max_lattice_points,
            });
        }
        if request.number_of_sites == 0 {
            return Ok(SearchResponse {
                sites: Vec::new(),
                diagnostics: Diagnostics {
                    search_time: started_at.elapsed(),
                    ..Diagnostics::default()
                },
            });
        }
        log::debug!(
            "grid search for {}: {} rows x {} cols at {} deg",
            request.criteria,
            lattice.rows(),
            lattice.cols(),
            request.step_degrees
        );

        let sweep = Sweep {
            scorer: &self.scorer,
            criteria: request.criteria,
            references,
            index: AssetIndex::new(references.assets()),
            exclusion_radius_km: self.config.exclusion_radius_km,
        };
        let mut sites = sweep.run(&lattice);
        let candidates_scored = sites.len() as u64;
        let excluded_points = lattice_points.saturating_sub(candidates_scored);

        sites.sort_by(|lhs, rhs| rhs.composite_score.cmp(&lhs.composite_score));
        sites.truncate(request.number_of_sites);

        let diagnostics = Diagnostics {
            search_time: started_at.elapsed(),
            lattice_points,
            excluded_points,
            candidates_scored,
        };
        log::debug!(
            "grid search scored {candidates_scored} points, excluded {excluded_points}, took {:?}",
            diagnostics.search_time
        );

        Ok(SearchResponse { sites, diagnostics })
    }
}

/// Shared state for scoring one lattice.
struct Sweep<'a, C> {
    scorer: &'a C,
    criteria: OptimizationCriteria,
    references: &'a ReferenceSet,
    index: AssetIndex,
    exclusion_radius_km: f64,
}

impl<C> Sweep<'_, C>
where
    C: SiteScorer,
{
    fn evaluate(&self, point: GeoPoint) -> Option<SiteScore> {
        if self.index.any_within(point, self.exclusion_radius_km) {
            return None;
        }
        Some(
            self.scorer
                .score_site(point, self.criteria, self.references),
        )
    }

    /// Score every surviving point in lattice order.
    #[cfg(not(feature = "parallel"))]
    fn run(&self, lattice: &Lattice) -> Vec<SiteScore> {
        lattice
            .points()
            .filter_map(|point| self.evaluate(point))
            .collect()
    }

    /// Score rows on the rayon pool; `collect` keeps lattice order.
    #[cfg(feature = "parallel")]
    fn run(&self, lattice: &Lattice) -> Vec<SiteScore> {
        use rayon::prelude::*;

        (0..lattice.rows())
            .into_par_iter()
            .flat_map_iter(|row| {
                lattice
                    .row(row)
                    .filter_map(|point| self.evaluate(point))
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests;
