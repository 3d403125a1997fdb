//! Existing hydrogen infrastructure.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::GeoPoint;

/// Kind of hydrogen asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AssetKind {
    /// Production plant, e.g. an electrolyser.
    Plant,
    /// Storage terminal.
    Storage,
    /// Pipeline segment.
    Pipeline,
    /// Distribution or export hub.
    Hub,
}

/// Lifecycle stage of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AssetStatus {
    /// Running today.
    Operational,
    /// Being built.
    UnderConstruction,
    /// Announced only.
    Planned,
}

impl AssetStatus {
    /// Return the status as its snake-case wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Operational => "operational",
            Self::UnderConstruction => "under_construction",
            Self::Planned => "planned",
        }
    }
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A hydrogen asset at a fixed location.
///
/// Every asset, whatever its status, blocks new candidates within the
/// exclusion radius. Only operational assets feed the cost factor.
///
/// # Examples
/// ```
/// use hydrosite_core::{AssetKind, AssetStatus, GeoPoint, InfrastructureAsset};
///
/// let dahej = InfrastructureAsset::new(
///     "Dahej Storage Terminal",
///     GeoPoint::new(21.7294, 72.6642)?,
///     AssetKind::Storage,
///     AssetStatus::Operational,
/// );
/// assert!(dahej.is_operational());
/// # Ok::<(), hydrosite_core::GeoPointError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InfrastructureAsset {
    /// Display name.
    pub name: String,
    /// Position of the asset.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub location: GeoPoint,
    /// What the asset is.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: AssetKind,
    /// Where the asset is in its lifecycle.
    pub status: AssetStatus,
}

impl InfrastructureAsset {
    /// Construct an asset.
    pub fn new(
        name: impl Into<String>,
        location: GeoPoint,
        kind: AssetKind,
        status: AssetStatus,
    ) -> Self {
        Self {
            name: name.into(),
            location,
            kind,
            status,
        }
    }

    /// Report whether the asset counts towards cost optimisation.
    #[must_use]
    pub fn is_operational(&self) -> bool {
        self.status == AssetStatus::Operational
    }
}
