use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::util::generate_id;

/// Raised when a caller-supplied input field is outside its legal range.
/// Inputs are never silently clamped; the offending field is always named.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} must be a percentage below 100 (got {value})")]
    PercentOutOfRange { field: &'static str, value: f64 },
    #[error(
        "profit targets must satisfy minimum <= target <= maximum (got {minimum_pct} / {target_pct} / {maximum_pct})"
    )]
    MisorderedTargets {
        minimum_pct: f64,
        target_pct: f64,
        maximum_pct: f64,
    },
}

pub(crate) fn check_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotFinite { field })
    }
}

pub(crate) fn check_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    check_finite(field, value)?;
    if value < 0.0 {
        Err(ValidationError::Negative { field, value })
    } else {
        Ok(())
    }
}

pub(crate) fn check_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    check_finite(field, value)?;
    if value <= 0.0 {
        Err(ValidationError::NotPositive { field, value })
    } else {
        Ok(())
    }
}

/// Operating-cost parameters shared by every offering in a catalog.
/// All money values are unscaled dollars.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OperatingCosts {
    /// Hourly wage paid for service time.
    pub labor_rate_per_hour: f64,
    /// Fuel cost per gallon.
    pub fuel_cost_per_gallon: f64,
    /// Vehicle fuel efficiency in miles per gallon. Must be > 0.
    pub vehicle_mpg: f64,
    /// Average travel distance per service visit, in miles.
    pub average_travel_miles: f64,
    /// Flat supplies cost per service visit.
    pub supplies_cost_per_unit: f64,
    pub monthly_insurance: f64,
    pub monthly_marketing: f64,
    pub monthly_overhead: f64,
}

impl Default for OperatingCosts {
    fn default() -> Self {
        Self {
            labor_rate_per_hour: 15.0,
            fuel_cost_per_gallon: 3.50,
            vehicle_mpg: 15.0,
            average_travel_miles: 5.0,
            supplies_cost_per_unit: 2.0,
            monthly_insurance: 200.0,
            monthly_marketing: 300.0,
            monthly_overhead: 500.0,
        }
    }
}

impl OperatingCosts {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_non_negative("labor_rate_per_hour", self.labor_rate_per_hour)?;
        check_non_negative("fuel_cost_per_gallon", self.fuel_cost_per_gallon)?;
        // Divisor in the travel-cost formula.
        check_positive("vehicle_mpg", self.vehicle_mpg)?;
        check_non_negative("average_travel_miles", self.average_travel_miles)?;
        check_non_negative("supplies_cost_per_unit", self.supplies_cost_per_unit)?;
        check_non_negative("monthly_insurance", self.monthly_insurance)?;
        check_non_negative("monthly_marketing", self.monthly_marketing)?;
        check_non_negative("monthly_overhead", self.monthly_overhead)?;
        Ok(())
    }
}

/// Profit-percentage thresholds, each in `[0, 100)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfitTargets {
    pub minimum_pct: f64,
    pub target_pct: f64,
    pub maximum_pct: f64,
}

impl Default for ProfitTargets {
    fn default() -> Self {
        Self {
            minimum_pct: 20.0,
            target_pct: 30.0,
            maximum_pct: 40.0,
        }
    }
}

impl ProfitTargets {
    /// Checks each percentage range and the `minimum <= target <= maximum`
    /// ordering. Misordered targets would make the price tiers non-monotonic
    /// and the profit bands incoherent.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("minimum_pct", self.minimum_pct),
            ("target_pct", self.target_pct),
            ("maximum_pct", self.maximum_pct),
        ] {
            check_non_negative(field, value)?;
            if value >= 100.0 {
                return Err(ValidationError::PercentOutOfRange { field, value });
            }
        }
        if self.minimum_pct > self.target_pct || self.target_pct > self.maximum_pct {
            return Err(ValidationError::MisorderedTargets {
                minimum_pct: self.minimum_pct,
                target_pct: self.target_pct,
                maximum_pct: self.maximum_pct,
            });
        }
        Ok(())
    }
}

/// One priceable service in the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceOffering {
    /// Unique within a catalog.
    pub id: String,
    pub name: String,
    /// Add-ons are displayed and evaluated separately from base services.
    #[serde(default)]
    pub is_add_on: bool,
    /// On-site time per service visit, in minutes.
    pub service_minutes: f64,
    /// Current listed price. Zero until pricing is finalized.
    #[serde(default)]
    pub listed_price: f64,
}

impl ServiceOffering {
    pub fn new(name: impl Into<String>, service_minutes: f64) -> Self {
        Self {
            id: generate_id("svc"),
            name: name.into(),
            is_add_on: false,
            service_minutes,
            listed_price: 0.0,
        }
    }

    pub fn add_on(name: impl Into<String>, service_minutes: f64) -> Self {
        Self {
            is_add_on: true,
            ..Self::new(name, service_minutes)
        }
    }

    pub fn with_listed_price(mut self, price: f64) -> Self {
        self.listed_price = price;
        self
    }

    /// True once a non-zero price has been set.
    pub fn is_priced(&self) -> bool {
        self.listed_price > 0.0
    }
}

/// Fully-loaded per-visit cost, split by source. `total` is the exact sum
/// of the four parts; no rounding happens here.
#[derive(Clone, Debug, PartialEq)]
pub struct CostBreakdown {
    pub labor: f64,
    pub travel: f64,
    pub supplies: f64,
    pub amortized_overhead: f64,
    pub total: f64,
}

/// Recommended prices for the three configured profit targets.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceTierSet {
    pub min_price: f64,
    pub target_price: f64,
    pub max_price: f64,
}

/// Margin-on-revenue achieved by a listed price, graded against targets.
#[derive(Clone, Debug, PartialEq)]
pub struct RealizedProfit {
    /// `(price - cost) / price * 100`. Negative when priced below cost.
    pub percent: f64,
    pub band: ProfitBand,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfitBand {
    BelowMinimum,
    Acceptable,
    Good,
}

impl ProfitBand {
    pub fn label(&self) -> &'static str {
        match self {
            ProfitBand::BelowMinimum => "Below minimum",
            ProfitBand::Acceptable => "Acceptable",
            ProfitBand::Good => "Good",
        }
    }
}
