//! Pricing and cost-modeling domain logic lives here.

pub mod catalog;
pub mod costing;
pub mod entities;
pub mod evaluation;
pub mod plan;
pub mod pricing;

use thiserror::Error;

pub use catalog::{CatalogError, CatalogPartition, OfferingPatch, ServiceCatalog};
pub use costing::{compute_cost, ASSUMED_MONTHLY_VOLUME};
pub use entities::{
    CostBreakdown, OperatingCosts, PriceTierSet, ProfitBand, ProfitTargets, RealizedProfit,
    ServiceOffering, ValidationError,
};
pub use evaluation::{
    evaluate_catalog, evaluate_profit, CatalogSummary, EvaluationError, OfferingReport,
};
pub use plan::PricingPlan;
pub use pricing::{solve_price, solve_price_tiers, DomainError};

/// Any failure from the composed costing -> pricing -> evaluation path.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PricingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
