//! Hydrogen demand centres and their weighting.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::GeoPoint;

/// Demand weight assumed when a centre reports no annual demand, in tonnes.
pub const DEFAULT_ANNUAL_DEMAND: f64 = 1000.0;

/// Commercial priority of a demand centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DemandPriority {
    /// Anchor customer.
    High,
    /// Secondary customer.
    Medium,
    /// Opportunistic customer.
    Low,
}

impl DemandPriority {
    /// Multiplier applied to the proximity score of a centre.
    ///
    /// # Examples
    /// ```
    /// use hydrosite_core::DemandPriority;
    ///
    /// assert_eq!(DemandPriority::High.multiplier(), 2.0);
    /// ```
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::High => 2.0,
            Self::Medium => 1.5,
            Self::Low => 1.0,
        }
    }
}

/// A consumer of hydrogen.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DemandCenter {
    /// Display name.
    pub name: String,
    /// Position of the centre.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub location: GeoPoint,
    /// Annual demand in tonnes of hydrogen, when known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub annual_demand: Option<f64>,
    /// Commercial priority.
    pub priority: DemandPriority,
}

impl DemandCenter {
    /// Construct a demand centre.
    pub fn new(
        name: impl Into<String>,
        location: GeoPoint,
        annual_demand: Option<f64>,
        priority: DemandPriority,
    ) -> Self {
        Self {
            name: name.into(),
            location,
            annual_demand,
            priority,
        }
    }

    /// Weight of this centre in the market demand average.
    ///
    /// Falls back to [`DEFAULT_ANNUAL_DEMAND`] when no demand is recorded.
    ///
    /// # Examples
    /// ```
    /// use hydrosite_core::{DemandCenter, DemandPriority, GeoPoint};
    ///
    /// let point = GeoPoint::new(23.017, 70.217)?;
    /// let port = DemandCenter::new("Deendayal Port", point, None, DemandPriority::High);
    /// assert_eq!(port.demand_weight(), 1000.0);
    /// # Ok::<(), hydrosite_core::GeoPointError>(())
    /// ```
    #[must_use]
    pub fn demand_weight(&self) -> f64 {
        self.annual_demand.unwrap_or(DEFAULT_ANNUAL_DEMAND)
    }

    /// Report whether the recorded demand, if any, is finite and positive.
    #[must_use]
    pub fn has_valid_demand(&self) -> bool {
        self.annual_demand
            .is_none_or(|demand| demand.is_finite() && demand > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn centre(annual_demand: Option<f64>) -> DemandCenter {
        let location = GeoPoint::new(8.7642, 78.1348).expect("valid point");
        DemandCenter::new("Tuticorin", location, annual_demand, DemandPriority::High)
    }

    #[rstest]
    #[case(None, true)]
    #[case(Some(10_000.0), true)]
    #[case(Some(0.0), false)]
    #[case(Some(-5.0), false)]
    #[case(Some(f64::NAN), false)]
    #[case(Some(f64::INFINITY), false)]
    fn validates_annual_demand(#[case] demand: Option<f64>, #[case] expected: bool) {
        assert_eq!(centre(demand).has_valid_demand(), expected);
    }

    #[rstest]
    fn recorded_demand_is_the_weight() {
        assert_eq!(centre(Some(12_000.0)).demand_weight(), 12_000.0);
    }

    #[rstest]
    #[case(DemandPriority::High, 2.0)]
    #[case(DemandPriority::Medium, 1.5)]
    #[case(DemandPriority::Low, 1.0)]
    fn priority_multipliers(#[case] priority: DemandPriority, #[case] expected: f64) {
        assert_eq!(priority.multiplier(), expected);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn missing_annual_demand_deserialises_as_none() {
        let json = r#"{"name": "Paradeep", "latitude": 20.2869, "longitude": 86.674, "priority": "medium"}"#;
        let centre: DemandCenter = serde_json::from_str(json).expect("valid centre");
        assert_eq!(centre.annual_demand, None);
        assert_eq!(centre.priority, DemandPriority::Medium);
    }
}
