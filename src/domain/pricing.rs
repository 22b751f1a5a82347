//! Margin solver: inverts a profit-percentage target into a price.

use thiserror::Error;

use super::entities::{PriceTierSet, ProfitTargets};

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("profit percentage must be below 100 (got {0})")]
    ProfitPctTooHigh(f64),
    #[error("unit cost must not be negative (got {0})")]
    NegativeCost(f64),
    #[error("profit percentage must be a finite number")]
    NonFinitePct,
    #[error(
        "profit targets must satisfy minimum <= target <= maximum (got {0} / {1} / {2})"
    )]
    MisorderedTargets(f64, f64, f64),
}

/// Price that yields `profit_pct` margin-on-revenue over `cost`:
/// `price = cost / (1 - pct/100)`.
///
/// A negative percentage is allowed (intentionally pricing below cost);
/// 100 or more would divide by zero or flip the sign and is rejected.
pub fn solve_price(cost: f64, profit_pct: f64) -> Result<f64, DomainError> {
    if !profit_pct.is_finite() {
        return Err(DomainError::NonFinitePct);
    }
    if cost < 0.0 {
        return Err(DomainError::NegativeCost(cost));
    }
    if profit_pct >= 100.0 {
        return Err(DomainError::ProfitPctTooHigh(profit_pct));
    }
    Ok(cost / (1.0 - profit_pct / 100.0))
}

/// Applies [`solve_price`] at each of the three configured targets.
/// Monotone in the percentage for a fixed cost, so ordered targets
/// produce `min_price <= target_price <= max_price`. Misordered targets
/// would silently invert the tiers and are rejected instead.
pub fn solve_price_tiers(cost: f64, targets: &ProfitTargets) -> Result<PriceTierSet, DomainError> {
    if targets.minimum_pct > targets.target_pct || targets.target_pct > targets.maximum_pct {
        return Err(DomainError::MisorderedTargets(
            targets.minimum_pct,
            targets.target_pct,
            targets.maximum_pct,
        ));
    }
    Ok(PriceTierSet {
        min_price: solve_price(cost, targets.minimum_pct)?,
        target_price: solve_price(cost, targets.target_pct)?,
        max_price: solve_price(cost, targets.maximum_pct)?,
    })
}
