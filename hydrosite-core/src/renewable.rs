//! Renewable generation sites.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::GeoPoint;

/// Generation technology. Scoring treats all kinds alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RenewableKind {
    /// Photovoltaic or solar thermal.
    Solar,
    /// Onshore or offshore wind.
    Wind,
    /// Hydroelectric.
    Hydro,
}

/// A renewable energy source.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenewableSource {
    /// Display name.
    pub name: String,
    /// Position of the source.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub location: GeoPoint,
    /// Generation technology.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: RenewableKind,
}

impl RenewableSource {
    /// Construct a renewable source.
    pub fn new(name: impl Into<String>, location: GeoPoint, kind: RenewableKind) -> Self {
        Self {
            name: name.into(),
            location,
            kind,
        }
    }
}
