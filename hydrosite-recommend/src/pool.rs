//! Sources of candidate sites for recommendations.

use hydrosite_core::{
    FactorScores, GeoPoint, OptimizationCriteria, ReferenceSet, SearchBounds, SearchRequest,
    SiteSearch, format_coordinates,
};

use crate::RecommendError;

/// A site a pool proposes, before investment filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Display name.
    pub name: String,
    /// Site location.
    pub location: GeoPoint,
    /// Composite score in `0..=100`.
    pub score: u8,
    /// Estimated capital cost in rupees, when known.
    pub estimated_cost: Option<f64>,
    /// Estimated build time, when known.
    pub timeline: Option<String>,
    /// Short descriptive labels.
    pub tags: Vec<String>,
}

/// Supplies candidate sites for a criteria.
pub trait CandidatePool {
    /// Propose candidates for `criteria` given the reference collections.
    ///
    /// # Errors
    /// Returns [`RecommendError`] when the underlying source fails.
    fn candidates(
        &self,
        criteria: OptimizationCriteria,
        references: &ReferenceSet,
    ) -> Result<Vec<Candidate>, RecommendError>;
}

struct CuratedSite {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    score: u8,
    estimated_cost: f64,
    timeline: &'static str,
    tags: [&'static str; 2],
}

const CURATED_SITES: [CuratedSite; 3] = [
    CuratedSite {
        name: "Gujarat Industrial Corridor",
        latitude: 23.5,
        longitude: 70.5,
        score: 92,
        estimated_cost: 4_580_000_000.0,
        timeline: "18 months",
        tags: ["High Demand", "Near Renewables"],
    },
    CuratedSite {
        name: "Tamil Nadu Coastal Hub",
        latitude: 11.5,
        longitude: 79.0,
        score: 87,
        estimated_cost: 4_000_000_000.0,
        timeline: "24 months",
        tags: ["Port Access", "Industrial Zone"],
    },
    CuratedSite {
        name: "Rajasthan Solar Zone",
        latitude: 26.0,
        longitude: 72.0,
        score: 84,
        estimated_cost: 3_500_000_000.0,
        timeline: "15 months",
        tags: ["Solar Rich", "Government Support"],
    },
];

/// Fixed pool of three hand-picked sites.
///
/// Scores and costs are fixed and ignore both the criteria and the
/// reference collections.
#[derive(Debug, Clone, Copy, Default)]
pub struct CuratedPool;

impl CandidatePool for CuratedPool {
    fn candidates(
        &self,
        _criteria: OptimizationCriteria,
        _references: &ReferenceSet,
    ) -> Result<Vec<Candidate>, RecommendError> {
        CURATED_SITES
            .iter()
            .map(|site| {
                Ok(Candidate {
                    name: site.name.to_owned(),
                    location: GeoPoint::new(site.latitude, site.longitude)?,
                    score: site.score,
                    estimated_cost: Some(site.estimated_cost),
                    timeline: Some(site.timeline.to_owned()),
                    tags: site.tags.iter().map(|tag| (*tag).to_owned()).collect(),
                })
            })
            .collect()
    }
}

/// Placeholder cost and schedule estimates derived from factor scores.
///
/// Cost rises linearly as cost optimisation falls; build time rises as
/// transport access falls. Neither is backed by real project data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    /// Cost of a site with a perfect cost optimisation score, in rupees.
    pub base_cost: f64,
    /// Extra cost at a cost optimisation score of zero, in rupees.
    pub cost_premium: f64,
    /// Build time with perfect transport access.
    pub base_months: u8,
    /// Extra months at a transport access score of zero.
    pub extra_months: u8,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            base_cost: 3_500_000_000.0,
            cost_premium: 1_500_000_000.0,
            base_months: 15,
            extra_months: 9,
        }
    }
}

impl CostModel {
    /// Estimated capital cost for a site with these factors.
    #[expect(clippy::float_arithmetic, reason = "linear cost interpolation")]
    #[must_use]
    pub fn estimated_cost(&self, factors: &FactorScores) -> f64 {
        let shortfall = (100.0 - factors.cost_optimization.clamp(0.0, 100.0)) / 100.0;
        self.base_cost + self.cost_premium * shortfall
    }

    /// Estimated build time for a site with these factors.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "rounded month count bounded by extra_months"
    )]
    #[must_use]
    pub fn timeline(&self, factors: &FactorScores) -> String {
        let shortfall = (100.0 - factors.transport_access.clamp(0.0, 100.0)) / 100.0;
        let extra = (f64::from(self.extra_months) * shortfall).round() as u8;
        let months = self.base_months.saturating_add(extra);
        format!("{months} months")
    }
}

/// Factor score at or above which a site earns the factor's tag.
pub const TAG_THRESHOLD: f64 = 70.0;

/// Labels for strong factors, in factor order.
#[must_use]
pub fn factor_tags(factors: &FactorScores) -> Vec<String> {
    const LABELS: [&str; 5] = [
        "Near Renewables",
        "High Demand",
        "Shared Infrastructure",
        "Transport Access",
        "Favourable Zoning",
    ];
    factors
        .iter()
        .zip(LABELS)
        .filter(|(score, _)| *score >= TAG_THRESHOLD)
        .map(|(_, label)| label.to_owned())
        .collect()
}

/// Pool backed by a live candidate search over the reference collections.
#[derive(Debug, Clone)]
pub struct GridSearchPool<S>
where
    S: SiteSearch,
{
    search: S,
    bounds: SearchBounds,
    step_degrees: f64,
    candidate_limit: usize,
    cost_model: CostModel,
}

impl<S> GridSearchPool<S>
where
    S: SiteSearch,
{
    /// Number of sites requested from the search before cost filtering.
    pub const DEFAULT_CANDIDATE_LIMIT: usize = 50;

    /// Pool over the default bounds and lattice spacing.
    pub fn new(search: S) -> Self {
        let defaults = SearchRequest::new(OptimizationCriteria::RegulatoryZones);
        Self {
            search,
            bounds: defaults.bounds,
            step_degrees: defaults.step_degrees,
            candidate_limit: Self::DEFAULT_CANDIDATE_LIMIT,
            cost_model: CostModel::default(),
        }
    }

    /// Restrict the search to `bounds`.
    #[must_use]
    pub const fn with_bounds(mut self, bounds: SearchBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Use a different lattice spacing.
    #[must_use]
    pub const fn with_step_degrees(mut self, step_degrees: f64) -> Self {
        self.step_degrees = step_degrees;
        self
    }

    /// Request this many sites from the search.
    #[must_use]
    pub const fn with_candidate_limit(mut self, candidate_limit: usize) -> Self {
        self.candidate_limit = candidate_limit;
        self
    }

    /// Use a different cost model.
    #[must_use]
    pub const fn with_cost_model(mut self, cost_model: CostModel) -> Self {
        self.cost_model = cost_model;
        self
    }
}

impl<S> CandidatePool for GridSearchPool<S>
where
    S: SiteSearch,
{
    fn candidates(
        &self,
        criteria: OptimizationCriteria,
        references: &ReferenceSet,
    ) -> Result<Vec<Candidate>, RecommendError> {
        let request = SearchRequest::new(criteria)
            .with_bounds(self.bounds)
            .with_step_degrees(self.step_degrees)
            .with_number_of_sites(self.candidate_limit);
        let response = self.search.search(&request, references)?;
        log::debug!(
            "grid pool found {} sites from {} lattice points",
            response.sites.len(),
            response.diagnostics.lattice_points
        );
        Ok(response
            .sites
            .into_iter()
            .map(|site| Candidate {
                name: format!("Candidate site {}", format_coordinates(site.point)),
                location: site.point,
                score: site.composite_score,
                estimated_cost: Some(self.cost_model.estimated_cost(&site.factors)),
                timeline: Some(self.cost_model.timeline(&site.factors)),
                tags: factor_tags(&site.factors),
            })
            .collect())
    }
}
