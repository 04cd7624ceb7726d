//! Derived metrics for a projected offer

use serde::{Deserialize, Serialize};

/// Three-way verdict on an offer
///
/// `NoCall` covers every non-positive payback period: unprofitable offers as
/// well as offers with zero fixed costs, which render no verdict at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Payback is positive and under the threshold
    DoIt,
    /// Payback is at or above the threshold
    DoNot,
    /// Payback is non-positive; no verdict is rendered
    NoCall,
}

impl Verdict {
    /// Banner text shown on the offer card, if any
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            Verdict::DoIt => Some("DO IT"),
            Verdict::DoNot => Some("DO NOT"),
            Verdict::NoCall => None,
        }
    }
}

/// Full set of derived metrics for one offer
///
/// Recomputed from the inputs on every change; carries no identity and is
/// never persisted. All values are unrounded; display rounding happens in
/// the formatting helpers below.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferProjection {
    /// Total one-time costs to recover
    pub fixed_costs: f64,
    /// Selling price minus coffee cost, per kg
    pub profit_per_kg: f64,
    pub profit_per_month: f64,
    pub profit_per_year: f64,
    pub revenue_per_month: f64,
    pub revenue_per_year: f64,
    /// Profit per kg as a fraction of the selling price (0 when price is 0)
    pub margin: f64,
    /// Months of profit needed to recover fixed costs (0 when profit is 0)
    pub payback_months: f64,
    pub verdict: Verdict,
}

/// Format a currency amount for display, 2 decimal places
pub fn format_eur(value: f64) -> String {
    format!("€{:.2}", value)
}

/// Format a margin fraction as a percentage, 2 decimal places
pub fn format_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

/// Format a payback period in months, 1 decimal place
pub fn format_months(value: f64) -> String {
    format!("{:.1}", value)
}
