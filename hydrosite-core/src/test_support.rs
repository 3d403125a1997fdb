//! Fixtures shared by unit, behaviour and property tests across the
//! workspace.
//!
//! The sample dataset mirrors a small slice of western and southern Indian
//! hydrogen infrastructure.

use crate::{
    AssetKind, AssetStatus, DemandCenter, DemandPriority, GeoPoint, InfrastructureAsset,
    ReferenceSet, RenewableKind, RenewableSource,
};

/// Build a point from literals known to be valid.
///
/// Tests that care about validation use [`GeoPoint::new`].
///
/// # Panics
/// Panics when the coordinates are out of range, so a mistyped fixture
/// fails the test instead of standing in for some other point.
#[expect(clippy::expect_used, reason = "fixture coordinates must be valid")]
#[must_use]
pub fn point(latitude: f64, longitude: f64) -> GeoPoint {
    GeoPoint::new(latitude, longitude).expect("fixture coordinates must be in range")
}

/// Build an asset of the given kind and status.
#[must_use]
pub fn asset(
    latitude: f64,
    longitude: f64,
    kind: AssetKind,
    status: AssetStatus,
) -> InfrastructureAsset {
    InfrastructureAsset::new("test asset", point(latitude, longitude), kind, status)
}

/// Build an operational plant.
#[must_use]
pub fn operational_asset(latitude: f64, longitude: f64) -> InfrastructureAsset {
    asset(
        latitude,
        longitude,
        AssetKind::Plant,
        AssetStatus::Operational,
    )
}

/// Build a solar source.
#[must_use]
pub fn renewable(latitude: f64, longitude: f64) -> RenewableSource {
    RenewableSource::new(
        "test renewable",
        point(latitude, longitude),
        RenewableKind::Solar,
    )
}

/// Build a demand centre.
#[must_use]
pub fn demand(
    latitude: f64,
    longitude: f64,
    annual_demand: Option<f64>,
    priority: DemandPriority,
) -> DemandCenter {
    DemandCenter::new(
        "test demand",
        point(latitude, longitude),
        annual_demand,
        priority,
    )
}

/// Bundle collections without validation errors.
///
/// Invalid demand values collapse the set to empty; use
/// [`ReferenceSet::new`] directly to test validation.
#[must_use]
pub fn references(
    assets: Vec<InfrastructureAsset>,
    renewables: Vec<RenewableSource>,
    demand_centers: Vec<DemandCenter>,
) -> ReferenceSet {
    ReferenceSet::new(assets, renewables, demand_centers).unwrap_or_default()
}

/// Four assets, three renewable sources and three demand centres in India.
#[must_use]
pub fn india_reference_set() -> ReferenceSet {
    let assets = vec![
        InfrastructureAsset::new(
            "Jamnagar Green Hydrogen Plant",
            point(22.34516, 69.8596),
            AssetKind::Plant,
            AssetStatus::UnderConstruction,
        ),
        InfrastructureAsset::new(
            "Mundra Hydrogen Hub",
            point(22.746, 69.7),
            AssetKind::Plant,
            AssetStatus::Planned,
        ),
        InfrastructureAsset::new(
            "Dahej Storage Terminal",
            point(21.7294, 72.6642),
            AssetKind::Storage,
            AssetStatus::Operational,
        ),
        InfrastructureAsset::new(
            "Visakhapatnam Storage Hub",
            point(17.6868, 83.2185),
            AssetKind::Storage,
            AssetStatus::UnderConstruction,
        ),
    ];
    let renewables = vec![
        RenewableSource::new("Bhadla Solar Park", point(27.472, 71.96), RenewableKind::Solar),
        RenewableSource::new(
            "Charanka Solar Park",
            point(23.908, 71.216),
            RenewableKind::Solar,
        ),
        RenewableSource::new("Bhuj Wind Cluster", point(23.1312, 68.9296), RenewableKind::Wind),
    ];
    let demand_centers = vec![
        DemandCenter::new(
            "Deendayal Port Authority",
            point(23.017, 70.217),
            Some(15_000.0),
            DemandPriority::High,
        ),
        DemandCenter::new(
            "Tuticorin Port Industrial Complex",
            point(8.7642, 78.1348),
            Some(10_000.0),
            DemandPriority::High,
        ),
        DemandCenter::new(
            "Paradeep Port Steel Hub",
            point(20.2869, 86.674),
            Some(12_000.0),
            DemandPriority::Medium,
        ),
    ];
    references(assets, renewables, demand_centers)
}
