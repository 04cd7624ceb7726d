//! Batch runner for projecting many offers at once
//!
//! Builds the engine once, then projects whole offer books without
//! reconstructing configuration per offer.

use crate::offer::Offer;
use crate::projection::{OfferProjection, ProjectionConfig, ProjectionEngine};
use rayon::prelude::*;
use serde::Serialize;

/// Pre-configured runner for batch offer projections
///
/// # Example
/// ```ignore
/// let runner = OfferRunner::new();
/// let projections = runner.run_batch(&offers);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OfferRunner {
    engine: ProjectionEngine,
}

impl OfferRunner {
    /// Create a runner with the default verdict threshold
    pub fn new() -> Self {
        Self {
            engine: ProjectionEngine::new(ProjectionConfig::default()),
        }
    }

    /// Create a runner with a specific projection config
    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    /// Project a single offer
    pub fn run(&self, offer: &Offer) -> OfferProjection {
        self.engine.project(&offer.inputs)
    }

    /// Project a whole offer book in parallel, preserving input order
    pub fn run_batch(&self, offers: &[Offer]) -> Vec<OfferProjection> {
        offers.par_iter().map(|o| self.run(o)).collect()
    }
}

/// One row of the batch summary CSV
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    #[serde(rename = "Customer")]
    pub customer: String,
    #[serde(rename = "FixedCosts")]
    pub fixed_costs: f64,
    #[serde(rename = "ProfitPerKg")]
    pub profit_per_kg: f64,
    #[serde(rename = "ProfitPerMonth")]
    pub profit_per_month: f64,
    #[serde(rename = "ProfitPerYear")]
    pub profit_per_year: f64,
    #[serde(rename = "RevenuePerMonth")]
    pub revenue_per_month: f64,
    #[serde(rename = "RevenuePerYear")]
    pub revenue_per_year: f64,
    #[serde(rename = "MarginPct")]
    pub margin_pct: f64,
    #[serde(rename = "PaybackMonths")]
    pub payback_months: f64,
    #[serde(rename = "Verdict")]
    pub verdict: String,
}

impl SummaryRow {
    /// Build a summary row for one projected offer
    pub fn new(offer: &Offer, projection: &OfferProjection) -> Self {
        Self {
            customer: offer.customer.clone(),
            fixed_costs: projection.fixed_costs,
            profit_per_kg: projection.profit_per_kg,
            profit_per_month: projection.profit_per_month,
            profit_per_year: projection.profit_per_year,
            revenue_per_month: projection.revenue_per_month,
            revenue_per_year: projection.revenue_per_year,
            margin_pct: projection.margin * 100.0,
            payback_months: projection.payback_months,
            verdict: projection
                .verdict
                .banner()
                .unwrap_or("NO CALL")
                .to_string(),
        }
    }
}
