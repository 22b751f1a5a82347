//! The caller-facing bundle a planner session works on: one set of
//! operating costs and profit targets shared by every offering in the
//! catalog. Serializable as a whole for settings persistence.

use serde::{Deserialize, Serialize};

use super::catalog::{CatalogError, ServiceCatalog};
use super::costing::{compute_cost, ASSUMED_MONTHLY_VOLUME};
use super::entities::{
    CostBreakdown, OperatingCosts, PriceTierSet, ProfitTargets, RealizedProfit, ServiceOffering,
};
use super::evaluation::{evaluate_catalog, evaluate_profit, CatalogSummary};
use super::pricing::solve_price_tiers;
use super::PricingError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingPlan {
    #[serde(default)]
    pub operating_costs: OperatingCosts,
    #[serde(default)]
    pub profit_targets: ProfitTargets,
    #[serde(default)]
    pub catalog: ServiceCatalog,
    /// Visits per month used to amortize fixed costs.
    #[serde(default = "default_monthly_volume")]
    pub monthly_volume: f64,
}

fn default_monthly_volume() -> f64 {
    ASSUMED_MONTHLY_VOLUME
}

impl Default for PricingPlan {
    fn default() -> Self {
        Self {
            operating_costs: OperatingCosts::default(),
            profit_targets: ProfitTargets::default(),
            catalog: ServiceCatalog::default(),
            monthly_volume: ASSUMED_MONTHLY_VOLUME,
        }
    }
}

impl PricingPlan {
    /// Cost breakdown for one cataloged offering.
    pub fn cost_of(&self, id: &str) -> Result<CostBreakdown, PricingError> {
        let offering = self.lookup(id)?;
        Ok(compute_cost(offering, &self.operating_costs, self.monthly_volume)?)
    }

    /// Recommended price tiers for one cataloged offering.
    pub fn price_offering(&self, id: &str) -> Result<PriceTierSet, PricingError> {
        self.profit_targets.validate()?;
        let breakdown = self.cost_of(id)?;
        Ok(solve_price_tiers(breakdown.total, &self.profit_targets)?)
    }

    /// Grades one cataloged offering's listed price. An unpriced offering
    /// fails the same way a zero price does.
    pub fn grade_offering(&self, id: &str) -> Result<RealizedProfit, PricingError> {
        self.profit_targets.validate()?;
        let offering = self.lookup(id)?;
        let listed_price = offering.listed_price;
        let breakdown = compute_cost(offering, &self.operating_costs, self.monthly_volume)?;
        Ok(evaluate_profit(listed_price, breakdown.total, &self.profit_targets)?)
    }

    /// One-shot quote for an offering that need not be in the catalog:
    /// the price hitting the configured target percentage. This is the
    /// simplified flow the customer-facing quote step uses.
    pub fn quote(&self, offering: &ServiceOffering) -> Result<f64, PricingError> {
        self.profit_targets.validate()?;
        let breakdown = compute_cost(offering, &self.operating_costs, self.monthly_volume)?;
        Ok(solve_price_tiers(breakdown.total, &self.profit_targets)?.target_price)
    }

    /// Prices and grades the whole catalog.
    pub fn summary(&self) -> Result<CatalogSummary, PricingError> {
        evaluate_catalog(
            &self.catalog,
            &self.operating_costs,
            &self.profit_targets,
            self.monthly_volume,
        )
    }

    fn lookup(&self, id: &str) -> Result<&ServiceOffering, CatalogError> {
        self.catalog
            .get(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }
}
