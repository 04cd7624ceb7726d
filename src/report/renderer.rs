//! Render the offer card as text

use crate::offer::OfferInputs;
use crate::projection::{format_eur, format_months, format_percent, OfferProjection};
use std::fmt::Write;

/// Renders an offer into a human-readable document
pub trait OfferRenderer {
    /// Produce the rendered offer for the given view toggle
    fn render(&self, inputs: &OfferInputs, projection: &OfferProjection, show_annual: bool)
        -> String;
}

/// Plain-text rendering of the offer card
///
/// Line content mirrors the on-screen card exactly: currency and margin at
/// 2 decimal places, payback at 1, and monthly or annual figures depending
/// on the toggle. The verdict banner is omitted when there is no verdict.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl OfferRenderer for TextRenderer {
    fn render(
        &self,
        _inputs: &OfferInputs,
        projection: &OfferProjection,
        show_annual: bool,
    ) -> String {
        let mut out = String::new();

        writeln!(out, "Fixed Costs: {}", format_eur(projection.fixed_costs)).unwrap();
        writeln!(out, "Profit/kg: {}", format_eur(projection.profit_per_kg)).unwrap();

        if show_annual {
            writeln!(out, "Annual Profit: {}", format_eur(projection.profit_per_year)).unwrap();
            writeln!(out, "Annual Revenue: {}", format_eur(projection.revenue_per_year)).unwrap();
        } else {
            writeln!(out, "Monthly Profit: {}", format_eur(projection.profit_per_month)).unwrap();
            writeln!(out, "Monthly Revenue: {}", format_eur(projection.revenue_per_month))
                .unwrap();
        }

        writeln!(out, "Margin: {}", format_percent(projection.margin)).unwrap();
        writeln!(
            out,
            "Payback Period: {} months",
            format_months(projection.payback_months)
        )
        .unwrap();

        if let Some(banner) = projection.verdict.banner() {
            writeln!(out).unwrap();
            writeln!(out, "{}", banner).unwrap();
        }

        out
    }
}
