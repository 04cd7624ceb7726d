//! Core projection engine deriving offer metrics from sanitized inputs

use super::metrics::{OfferProjection, Verdict};
use crate::offer::OfferInputs;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Payback period at or above which the verdict flips to DO NOT
    pub payback_threshold_months: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            payback_threshold_months: 8.0,
        }
    }
}

/// Main projection engine
///
/// Pure and deterministic: the same inputs always produce the same
/// projection, with no side effects and no rounding before display.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Derive the full metric set for one offer
    pub fn project(&self, inputs: &OfferInputs) -> OfferProjection {
        let fixed_costs = inputs.machine_cost
            + inputs.grinder1_cost
            + inputs.grinder2_cost
            + inputs.advertising_cost;

        let profit_per_kg = inputs.price_per_kg - inputs.coffee_cost_per_kg;
        let profit_per_month = profit_per_kg * inputs.monthly_consumption_kg;
        let profit_per_year = profit_per_month * 12.0;
        let revenue_per_month = inputs.price_per_kg * inputs.monthly_consumption_kg;
        let revenue_per_year = revenue_per_month * 12.0;

        // Division guards keep every metric finite
        let margin = if inputs.price_per_kg > 0.0 {
            profit_per_kg / inputs.price_per_kg
        } else {
            0.0
        };
        let payback_months = if profit_per_month > 0.0 {
            fixed_costs / profit_per_month
        } else {
            0.0
        };

        let verdict = self.verdict_for(payback_months);

        OfferProjection {
            fixed_costs,
            profit_per_kg,
            profit_per_month,
            profit_per_year,
            revenue_per_month,
            revenue_per_year,
            margin,
            payback_months,
            verdict,
        }
    }

    /// Apply the verdict rule to a payback period
    ///
    /// Non-positive payback renders no verdict; this includes zero fixed
    /// costs, which keeps the original tool's behavior of staying silent
    /// on free setups.
    fn verdict_for(&self, payback_months: f64) -> Verdict {
        if payback_months <= 0.0 {
            Verdict::NoCall
        } else if payback_months < self.config.payback_threshold_months {
            Verdict::DoIt
        } else {
            Verdict::DoNot
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn engine() -> ProjectionEngine {
        ProjectionEngine::new(ProjectionConfig::default())
    }

    fn sample_inputs(consumption_kg: f64) -> OfferInputs {
        OfferInputs::new(1000.0, 200.0, 200.0, 100.0, consumption_kg, 20.0, 13.5)
    }

    #[test]
    fn test_quick_payback_offer() {
        let projection = engine().project(&sample_inputs(50.0));

        assert_relative_eq!(projection.fixed_costs, 1500.0);
        assert_relative_eq!(projection.profit_per_kg, 6.5);
        assert_relative_eq!(projection.profit_per_month, 325.0);
        assert_relative_eq!(projection.revenue_per_month, 1000.0);
        assert_relative_eq!(projection.margin, 0.325);
        assert_relative_eq!(projection.payback_months, 1500.0 / 325.0);
        assert_eq!(projection.verdict, Verdict::DoIt);
    }

    #[test]
    fn test_slow_payback_offer() {
        let projection = engine().project(&sample_inputs(5.0));

        assert_relative_eq!(projection.profit_per_month, 32.5);
        assert_relative_eq!(projection.payback_months, 1500.0 / 32.5);
        assert_eq!(projection.verdict, Verdict::DoNot);
    }

    #[test]
    fn test_all_zero_inputs() {
        let inputs = OfferInputs::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        let projection = engine().project(&inputs);

        assert_relative_eq!(projection.fixed_costs, 0.0);
        assert_relative_eq!(projection.profit_per_kg, 0.0);
        assert_relative_eq!(projection.margin, 0.0);
        assert_relative_eq!(projection.payback_months, 0.0);
        assert_eq!(projection.verdict, Verdict::NoCall);
    }

    #[test]
    fn test_annual_metrics_scale_exactly() {
        let projection = engine().project(&sample_inputs(50.0));
        assert_eq!(projection.profit_per_year, projection.profit_per_month * 12.0);
        assert_eq!(projection.revenue_per_year, projection.revenue_per_month * 12.0);
    }

    #[test]
    fn test_margin_zero_when_price_is_zero() {
        // Coffee cost alone must not produce a negative margin
        let inputs = OfferInputs::new(0.0, 0.0, 0.0, 0.0, 50.0, 0.0, 13.5);
        let projection = engine().project(&inputs);

        assert_relative_eq!(projection.margin, 0.0);
        assert_relative_eq!(projection.profit_per_kg, -13.5);
    }

    #[test]
    fn test_verdict_threshold_boundary() {
        // Fixed costs 800, profit/month 100 -> payback exactly 8.0
        let at_threshold = OfferInputs::new(800.0, 0.0, 0.0, 0.0, 100.0, 14.5, 13.5);
        assert_eq!(engine().project(&at_threshold).verdict, Verdict::DoNot);

        // Fixed costs 799, same profit -> just under the threshold
        let under_threshold = OfferInputs::new(799.0, 0.0, 0.0, 0.0, 100.0, 14.5, 13.5);
        assert_eq!(engine().project(&under_threshold).verdict, Verdict::DoIt);
    }

    #[test]
    fn test_no_verdict_on_free_setup() {
        // Zero fixed costs with healthy profit still renders no verdict
        let inputs = OfferInputs::new(0.0, 0.0, 0.0, 0.0, 50.0, 20.0, 13.5);
        let projection = engine().project(&inputs);

        assert_relative_eq!(projection.payback_months, 0.0);
        assert_eq!(projection.verdict, Verdict::NoCall);
    }

    #[test]
    fn test_no_verdict_on_unprofitable_offer() {
        // Coffee cost above selling price: negative monthly profit
        let inputs = OfferInputs::new(1500.0, 0.0, 0.0, 0.0, 50.0, 10.0, 13.5);
        let projection = engine().project(&inputs);

        assert!(projection.profit_per_month < 0.0);
        assert_relative_eq!(projection.payback_months, 0.0);
        assert_eq!(projection.verdict, Verdict::NoCall);
    }

    #[test]
    fn test_custom_threshold() {
        let engine = ProjectionEngine::new(ProjectionConfig {
            payback_threshold_months: 5.0,
        });
        // payback ~4.6 stays under a 5-month threshold
        let projection = engine.project(&sample_inputs(50.0));
        assert_eq!(projection.verdict, Verdict::DoIt);

        let strict = ProjectionEngine::new(ProjectionConfig {
            payback_threshold_months: 4.0,
        });
        assert_eq!(strict.project(&sample_inputs(50.0)).verdict, Verdict::DoNot);
    }
}
