//! Pricing and cost-modeling engine for service businesses.
//!
//! Four pure pieces, composed by the caller:
//! - a cost model that turns a service offering's time footprint plus shared
//!   operating costs into a per-visit [`CostBreakdown`],
//! - a margin solver that inverts profit-percentage targets into recommended
//!   prices ([`PriceTierSet`]),
//! - a profit evaluator that grades a listed price against its cost
//!   ([`RealizedProfit`]),
//! - and an ordered [`ServiceCatalog`] of offerings, split into base services
//!   and add-ons.
//!
//! [`PricingPlan`] bundles the shared inputs with a catalog and is what the
//! form layer holds on to (and persists via [`util::persistence`]).

pub mod domain;
pub mod util;

pub use domain::{
    compute_cost, evaluate_catalog, evaluate_profit, solve_price, solve_price_tiers,
    CatalogError, CatalogPartition, CatalogSummary, CostBreakdown, DomainError, EvaluationError,
    OfferingPatch, OfferingReport, OperatingCosts, PriceTierSet, PricingError, PricingPlan,
    ProfitBand, ProfitTargets, RealizedProfit, ServiceCatalog, ServiceOffering, ValidationError,
    ASSUMED_MONTHLY_VOLUME,
};
