//! Filter, rank and truncate candidates into recommendations.

#[cfg(feature = "serde")]
use serde::Serialize;

use hydrosite_core::{DEFAULT_NUMBER_OF_SITES, GeoPoint, OptimizationCriteria, ReferenceSet};

use crate::{Candidate, CandidatePool, InvestmentRange, RecommendError};

/// A ranked site recommendation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Recommendation {
    /// Display name.
    pub name: String,
    /// Site location.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub location: GeoPoint,
    /// Composite score in `0..=100`.
    pub score: u8,
    /// Estimated capital cost in rupees.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub estimated_cost: Option<f64>,
    /// Estimated build time.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub timeline: Option<String>,
    /// Short descriptive labels.
    pub tags: Vec<String>,
    /// Criteria the recommendation was generated for.
    pub criteria: Vec<OptimizationCriteria>,
    /// Investment range the recommendation was filtered by.
    pub investment_range: InvestmentRange,
}

impl Recommendation {
    fn from_candidate(
        candidate: Candidate,
        criteria: OptimizationCriteria,
        investment_range: &InvestmentRange,
    ) -> Self {
        Self {
            name: candidate.name,
            location: candidate.location,
            score: candidate.score,
            estimated_cost: candidate.estimated_cost,
            timeline: candidate.timeline,
            tags: candidate.tags,
            criteria: vec![criteria],
            investment_range: investment_range.clone(),
        }
    }
}

/// Generate recommendations from `pool`.
///
/// Validates `criteria` and `investment_range`, keeps candidates whose
/// estimated cost lies within the range (candidates without a cost estimate
/// are kept), sorts by score descending with ties in pool order, and
/// truncates to `number_of_sites` (default
/// [`DEFAULT_NUMBER_OF_SITES`]).
///
/// # Errors
/// Returns [`RecommendError::InvalidCriteria`] for an unknown criteria,
/// [`RecommendError::EmptyInvestmentRange`] for an empty range, and any
/// error the pool raises.
///
/// # Examples
/// ```
/// use hydrosite_core::ReferenceSet;
/// use hydrosite_recommend::{CuratedPool, generate_recommendations};
///
/// let recommendations = generate_recommendations(
///     &CuratedPool,
///     "market_demand",
///     "₹100L+",
///     None,
///     &ReferenceSet::default(),
/// )?;
/// let names: Vec<_> = recommendations.iter().map(|r| r.name.as_str()).collect();
/// assert_eq!(
///     names,
///     ["Gujarat Industrial Corridor", "Tamil Nadu Coastal Hub", "Rajasthan Solar Zone"]
/// );
/// # Ok::<(), hydrosite_recommend::RecommendError>(())
/// ```
pub fn generate_recommendations<P>(
    pool: &P,
    criteria: &str,
    investment_range: &str,
    number_of_sites: Option<usize>,
    references: &ReferenceSet,
) -> Result<Vec<Recommendation>, RecommendError>
where
    P: CandidatePool + ?Sized,
{
    let criteria: OptimizationCriteria = criteria.parse()?;
    let range: InvestmentRange = investment_range.parse()?;
    if !range.is_known() {
        log::warn!("unrecognised investment range '{range}'; costs are not filtered");
    }
    let limit = number_of_sites.unwrap_or(DEFAULT_NUMBER_OF_SITES);

    let candidates = pool.candidates(criteria, references)?;
    let offered = candidates.len();
    let mut recommendations: Vec<Recommendation> = candidates
        .into_iter()
        .filter(|candidate| candidate.estimated_cost.is_none_or(|cost| range.contains(cost)))
        .map(|candidate| Recommendation::from_candidate(candidate, criteria, &range))
        .collect();
    recommendations.sort_by(|lhs, rhs| rhs.score.cmp(&lhs.score));
    recommendations.truncate(limit);

    log::debug!(
        "{} of {offered} candidates recommended for {criteria} within {range}",
        recommendations.len()
    );
    Ok(recommendations)
}
