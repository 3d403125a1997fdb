//! Score a candidate location against the reference collections.
//!
//! The `SiteScorer` trait is the seam between the Candidate Generator and the
//! scoring model, so a scorer backed by real transport or zoning data can
//! replace the default heuristics without touching the search.

use crate::{GeoPoint, OptimizationCriteria, ReferenceSet, SiteScore};

/// Calculate a [`SiteScore`] for one location.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so a search can
/// score lattice points across threads. Scoring is infallible: inputs are
/// validated before they reach the scorer, and empty reference collections
/// degrade individual factors rather than failing.
///
/// Implementations must:
/// - Produce finite factor scores in `0.0..=100.0`.
/// - Produce a composite score in `0..=100`.
///
/// Use [`SiteScorer::sanitise`] to apply the factor guard.
///
/// # Examples
///
/// ```rust
/// use hydrosite_core::{
///     FactorScores, GeoPoint, OptimizationCriteria, ReferenceSet, SiteScore, SiteScorer,
/// };
///
/// struct FlatScorer;
///
/// impl SiteScorer for FlatScorer {
///     fn score_site(
///         &self,
///         point: GeoPoint,
///         _criteria: OptimizationCriteria,
///         _references: &ReferenceSet,
///     ) -> SiteScore {
///         SiteScore { point, composite_score: 50, factors: FactorScores::default() }
///     }
/// }
///
/// let point = GeoPoint::new(23.0, 72.0)?;
/// let score = FlatScorer.score_site(
///     point,
///     OptimizationCriteria::MarketDemand,
///     &ReferenceSet::default(),
/// );
/// assert_eq!(score.composite_score, 50);
/// # Ok::<(), hydrosite_core::GeoPointError>(())
/// ```
pub trait SiteScorer: Send + Sync {
    /// Score `point` under `criteria` against `references`.
    fn score_site(
        &self,
        point: GeoPoint,
        criteria: OptimizationCriteria,
        references: &ReferenceSet,
    ) -> SiteScore;

    /// Clamp and validate a raw factor score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=100.0`.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, 100.0)
    }
}
