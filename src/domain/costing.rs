//! Cost model: fully-loaded per-visit cost for one service offering.

use super::entities::{
    check_non_negative, check_positive, CostBreakdown, OperatingCosts, ServiceOffering,
    ValidationError,
};

/// Fixed monthly service volume used to spread fixed costs (insurance,
/// marketing, general overhead) onto a single visit. A deliberately crude
/// amortization; it is not tied to actual offering volume.
pub const ASSUMED_MONTHLY_VOLUME: f64 = 100.0;

/// Computes the cost of delivering one visit of `offering` under `costs`.
///
/// Labor is billed per minute of service time, travel from the average trip
/// distance and fuel efficiency, supplies as a flat per-visit amount, and
/// fixed monthly costs amortized over `monthly_volume` visits. Deterministic
/// and unrounded; currency rounding is the presentation layer's job.
pub fn compute_cost(
    offering: &ServiceOffering,
    costs: &OperatingCosts,
    monthly_volume: f64,
) -> Result<CostBreakdown, ValidationError> {
    costs.validate()?;
    check_non_negative("service_minutes", offering.service_minutes)?;
    check_positive("monthly_volume", monthly_volume)?;

    let labor = offering.service_minutes / 60.0 * costs.labor_rate_per_hour;
    let travel = costs.average_travel_miles / costs.vehicle_mpg * costs.fuel_cost_per_gallon;
    let supplies = costs.supplies_cost_per_unit;
    let amortized_overhead =
        (costs.monthly_insurance + costs.monthly_marketing + costs.monthly_overhead)
            / monthly_volume;

    Ok(CostBreakdown {
        labor,
        travel,
        supplies,
        amortized_overhead,
        total: labor + travel + supplies + amortized_overhead,
    })
}
