//! The three read-only collections every scoring run consults.
//!
//! Callers build a fresh [`ReferenceSet`] per run and pass it by reference;
//! the engine never stores or mutates it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{DemandCenter, InfrastructureAsset, RenewableSource};

/// Errors returned by [`ReferenceSet::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReferenceSetError {
    /// A demand centre recorded a zero, negative or non-finite demand.
    #[error("demand centre '{name}' has invalid annual demand {demand}")]
    InvalidAnnualDemand {
        /// Name of the offending centre.
        name: String,
        /// Rejected value.
        demand: f64,
    },
}

/// Existing assets, renewable sources and demand centres.
///
/// Empty collections are allowed; each affected factor degrades to its
/// documented floor.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", try_from = "RawReferenceSet"))]
pub struct ReferenceSet {
    assets: Vec<InfrastructureAsset>,
    renewables: Vec<RenewableSource>,
    demand_centers: Vec<DemandCenter>,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReferenceSet {
    #[serde(default)]
    assets: Vec<InfrastructureAsset>,
    #[serde(default)]
    renewables: Vec<RenewableSource>,
    #[serde(default)]
    demand_centers: Vec<DemandCenter>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawReferenceSet> for ReferenceSet {
    type Error = ReferenceSetError;

    fn try_from(raw: RawReferenceSet) -> Result<Self, Self::Error> {
        Self::new(raw.assets, raw.renewables, raw.demand_centers)
    }
}

impl ReferenceSet {
    /// Validate and bundle the reference collections.
    ///
    /// # Errors
    /// Returns [`ReferenceSetError::InvalidAnnualDemand`] for the first
    /// demand centre whose recorded demand is not finite and positive.
    pub fn new(
        assets: Vec<InfrastructureAsset>,
        renewables: Vec<RenewableSource>,
        demand_centers: Vec<DemandCenter>,
    ) -> Result<Self, ReferenceSetError> {
        if let Some(bad) = demand_centers.iter().find(|c| !c.has_valid_demand()) {
            return Err(ReferenceSetError::InvalidAnnualDemand {
                name: bad.name.clone(),
                demand: bad.annual_demand.unwrap_or(f64::NAN),
            });
        }
        Ok(Self {
            assets,
            renewables,
            demand_centers,
        })
    }

    /// Existing hydrogen assets.
    #[must_use]
    pub fn assets(&self) -> &[InfrastructureAsset] {
        &self.assets
    }

    /// Assets that feed the cost factor.
    pub fn operational_assets(&self) -> impl Iterator<Item = &InfrastructureAsset> {
        self.assets.iter().filter(|asset| asset.is_operational())
    }

    /// Renewable sources.
    #[must_use]
    pub fn renewables(&self) -> &[RenewableSource] {
        &self.renewables
    }

    /// Demand centres.
    #[must_use]
    pub fn demand_centers(&self) -> &[DemandCenter] {
        &self.demand_centers
    }

    /// Count the collections.
    #[must_use]
    pub fn summary(&self) -> AnalysisSummary {
        AnalysisSummary {
            total_assets: self.assets.len(),
            operational_assets: self.operational_assets().count(),
            total_renewables: self.renewables.len(),
            total_demand_centers: self.demand_centers.len(),
        }
    }
}

/// Collection sizes for a [`ReferenceSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AnalysisSummary {
    /// Number of assets of any status.
    pub total_assets: usize,
    /// Number of operational assets.
    pub operational_assets: usize,
    /// Number of renewable sources.
    pub total_renewables: usize,
    /// Number of demand centres.
    pub total_demand_centers: usize,
}
