use thiserror::Error;

use super::catalog::ServiceCatalog;
use super::costing::compute_cost;
use super::entities::{
    CostBreakdown, OperatingCosts, PriceTierSet, ProfitBand, ProfitTargets, RealizedProfit,
};
use super::pricing::solve_price_tiers;
use super::PricingError;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum EvaluationError {
    #[error("listed price must not be zero")]
    ZeroListedPrice,
    #[error("listed price must not be negative (got {0})")]
    NegativeListedPrice(f64),
    #[error("unit cost must not be negative (got {0})")]
    NegativeCost(f64),
    #[error("listed price must be a finite number")]
    NonFinitePrice,
    #[error(
        "profit targets must satisfy minimum <= target <= maximum (got {0} / {1} / {2})"
    )]
    MisorderedTargets(f64, f64, f64),
}

/// Grades `listed_price` against `cost` as margin-on-revenue:
/// `percent = (price - cost) / price * 100`, the algebraic inverse of the
/// margin solver's `cost / (1 - pct/100)`.
///
/// Band thresholds come from the supplied `targets`; a misordered set would
/// grade incoherently and is rejected. A zero price is rejected rather than
/// letting the division produce NaN or infinity.
pub fn evaluate_profit(
    listed_price: f64,
    cost: f64,
    targets: &ProfitTargets,
) -> Result<RealizedProfit, EvaluationError> {
    if targets.minimum_pct > targets.target_pct || targets.target_pct > targets.maximum_pct {
        return Err(EvaluationError::MisorderedTargets(
            targets.minimum_pct,
            targets.target_pct,
            targets.maximum_pct,
        ));
    }
    if !listed_price.is_finite() {
        return Err(EvaluationError::NonFinitePrice);
    }
    if listed_price == 0.0 {
        return Err(EvaluationError::ZeroListedPrice);
    }
    if listed_price < 0.0 {
        return Err(EvaluationError::NegativeListedPrice(listed_price));
    }
    if cost < 0.0 {
        return Err(EvaluationError::NegativeCost(cost));
    }

    let percent = (listed_price - cost) / listed_price * 100.0;
    let band = if percent < targets.minimum_pct {
        ProfitBand::BelowMinimum
    } else if percent < targets.target_pct {
        ProfitBand::Acceptable
    } else {
        ProfitBand::Good
    };

    Ok(RealizedProfit { percent, band })
}

/// Everything the planner screens show for one offering: its cost breakdown,
/// the recommended price tiers, and the grade of its listed price (absent
/// while the offering is still unpriced).
#[derive(Clone, Debug, PartialEq)]
pub struct OfferingReport {
    pub offering_id: String,
    pub name: String,
    pub is_add_on: bool,
    pub breakdown: CostBreakdown,
    pub tiers: PriceTierSet,
    pub realized: Option<RealizedProfit>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogSummary {
    /// One report per offering, in catalog order.
    pub reports: Vec<OfferingReport>,
    pub below_minimum: usize,
    pub acceptable: usize,
    pub good: usize,
    pub unpriced: usize,
}

/// Prices and grades every offering in the catalog against one shared set of
/// operating costs and profit targets. Targets are validated up front so a
/// misordered set fails once instead of producing incoherent bands.
pub fn evaluate_catalog(
    catalog: &ServiceCatalog,
    costs: &OperatingCosts,
    targets: &ProfitTargets,
    monthly_volume: f64,
) -> Result<CatalogSummary, PricingError> {
    targets.validate()?;

    let mut reports = Vec::with_capacity(catalog.len());
    let mut below_minimum = 0;
    let mut acceptable = 0;
    let mut good = 0;
    let mut unpriced = 0;

    for offering in catalog.iter() {
        let breakdown = compute_cost(offering, costs, monthly_volume)?;
        let tiers = solve_price_tiers(breakdown.total, targets)?;
        // Only an exactly-zero price means "not priced yet"; anything else
        // (including a bad negative value) goes through the evaluator.
        let realized = if offering.listed_price == 0.0 {
            None
        } else {
            Some(evaluate_profit(offering.listed_price, breakdown.total, targets)?)
        };

        match realized.as_ref().map(|r| r.band) {
            Some(ProfitBand::BelowMinimum) => below_minimum += 1,
            Some(ProfitBand::Acceptable) => acceptable += 1,
            Some(ProfitBand::Good) => good += 1,
            None => unpriced += 1,
        }

        reports.push(OfferingReport {
            offering_id: offering.id.clone(),
            name: offering.name.clone(),
            is_add_on: offering.is_add_on,
            breakdown,
            tiers,
            realized,
        });
    }

    Ok(CatalogSummary {
        reports,
        below_minimum,
        acceptable,
        good,
        unpriced,
    })
}
