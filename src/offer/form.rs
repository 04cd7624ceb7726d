//! Offer input structures matching the sales-offer form

use serde::{Deserialize, Serialize};

/// Default coffee cost per kg, pre-filled in the form
const DEFAULT_COFFEE_COST: &str = "13.5";

/// One form field of the sales offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OfferField {
    /// Espresso machine, one-time cost
    Machine,
    /// First grinder, one-time cost
    Grinder1,
    /// Second grinder, one-time cost
    Grinder2,
    /// Advertising budget, one-time cost
    Advertising,
    /// Monthly coffee consumption in kg
    ConsumptionKg,
    /// Selling price per kg
    PricePerKg,
    /// Coffee purchase cost per kg
    CoffeeCost,
}

/// Raw form fields as entered by the user
///
/// Fields are kept as strings so that empty and partially-typed values
/// survive edits; coercion to numbers happens in [`OfferForm::to_inputs`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferForm {
    pub machine: String,
    pub grinder1: String,
    pub grinder2: String,
    pub advertising: String,
    pub consumption_kg: String,
    pub price_per_kg: String,
    pub coffee_cost: String,
}

impl Default for OfferForm {
    fn default() -> Self {
        Self {
            machine: String::new(),
            grinder1: String::new(),
            grinder2: String::new(),
            advertising: String::new(),
            consumption_kg: String::new(),
            price_per_kg: String::new(),
            coffee_cost: DEFAULT_COFFEE_COST.to_string(),
        }
    }
}

impl OfferForm {
    /// Replace a single field's raw value
    pub fn set(&mut self, field: OfferField, value: String) {
        match field {
            OfferField::Machine => self.machine = value,
            OfferField::Grinder1 => self.grinder1 = value,
            OfferField::Grinder2 => self.grinder2 = value,
            OfferField::Advertising => self.advertising = value,
            OfferField::ConsumptionKg => self.consumption_kg = value,
            OfferField::PricePerKg => self.price_per_kg = value,
            OfferField::CoffeeCost => self.coffee_cost = value,
        }
    }

    /// Coerce the raw form into sanitized numeric inputs
    pub fn to_inputs(&self) -> OfferInputs {
        OfferInputs::new(
            parse_amount(&self.machine),
            parse_amount(&self.grinder1),
            parse_amount(&self.grinder2),
            parse_amount(&self.advertising),
            parse_amount(&self.consumption_kg),
            parse_amount(&self.price_per_kg),
            parse_amount(&self.coffee_cost),
        )
    }
}

/// Sanitized numeric inputs for one offer
///
/// Every field is a finite, non-negative number; construction enforces this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OfferInputs {
    /// One-time machine cost
    pub machine_cost: f64,
    /// One-time cost of the first grinder
    pub grinder1_cost: f64,
    /// One-time cost of the second grinder
    pub grinder2_cost: f64,
    /// One-time advertising cost
    pub advertising_cost: f64,
    /// Monthly coffee consumption in kg
    pub monthly_consumption_kg: f64,
    /// Selling price per kg
    pub price_per_kg: f64,
    /// Coffee purchase cost per kg
    pub coffee_cost_per_kg: f64,
}

impl OfferInputs {
    /// Create inputs, clamping each value to a finite, non-negative number
    pub fn new(
        machine_cost: f64,
        grinder1_cost: f64,
        grinder2_cost: f64,
        advertising_cost: f64,
        monthly_consumption_kg: f64,
        price_per_kg: f64,
        coffee_cost_per_kg: f64,
    ) -> Self {
        Self {
            machine_cost: sanitize(machine_cost),
            grinder1_cost: sanitize(grinder1_cost),
            grinder2_cost: sanitize(grinder2_cost),
            advertising_cost: sanitize(advertising_cost),
            monthly_consumption_kg: sanitize(monthly_consumption_kg),
            price_per_kg: sanitize(price_per_kg),
            coffee_cost_per_kg: sanitize(coffee_cost_per_kg),
        }
    }
}

/// Clamp a raw value to the input invariant: finite and non-negative
fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Coerce a raw form value to a number
///
/// Takes the longest leading decimal prefix of the trimmed string, so
/// `"12.5 kg"` reads as 12.5. Empty, unparsable, non-finite, and negative
/// values all coerce to 0; coercion never fails.
pub fn parse_amount(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let end = trimmed
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .unwrap_or(trimmed.len());

    // Numeric-looking chars are all ASCII, so byte slicing below is safe.
    let mut candidate = &trimmed[..end];
    while !candidate.is_empty() {
        if let Ok(value) = candidate.parse::<f64>() {
            return sanitize(value);
        }
        candidate = &candidate[..candidate.len() - 1];
    }
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_amount_plain_numbers() {
        assert_relative_eq!(parse_amount("1000"), 1000.0);
        assert_relative_eq!(parse_amount("13.5"), 13.5);
        assert_relative_eq!(parse_amount(" 20 "), 20.0);
    }

    #[test]
    fn test_parse_amount_takes_leading_prefix() {
        assert_relative_eq!(parse_amount("12.5 kg"), 12.5);
        assert_relative_eq!(parse_amount("7euro"), 7.0);
        assert_relative_eq!(parse_amount("1e3"), 1000.0);
        // Trailing exponent marker without digits is dropped
        assert_relative_eq!(parse_amount("12e"), 12.0);
    }

    #[test]
    fn test_parse_amount_invalid_becomes_zero() {
        assert_relative_eq!(parse_amount(""), 0.0);
        assert_relative_eq!(parse_amount("   "), 0.0);
        assert_relative_eq!(parse_amount("abc"), 0.0);
        assert_relative_eq!(parse_amount("."), 0.0);
        assert_relative_eq!(parse_amount("+"), 0.0);
        // Out of f64 range parses non-finite, clamps to zero
        assert_relative_eq!(parse_amount("1e999"), 0.0);
    }

    #[test]
    fn test_parse_amount_negative_clamps_to_zero() {
        assert_relative_eq!(parse_amount("-5"), 0.0);
        assert_relative_eq!(parse_amount("-0.01"), 0.0);
    }

    #[test]
    fn test_form_default_prefills_coffee_cost() {
        let form = OfferForm::default();
        assert_eq!(form.coffee_cost, "13.5");
        assert!(form.machine.is_empty());

        let inputs = form.to_inputs();
        assert_relative_eq!(inputs.coffee_cost_per_kg, 13.5);
        assert_relative_eq!(inputs.machine_cost, 0.0);
    }

    #[test]
    fn test_form_set_field() {
        let mut form = OfferForm::default();
        form.set(OfferField::Machine, "1000".to_string());
        form.set(OfferField::PricePerKg, "20".to_string());

        let inputs = form.to_inputs();
        assert_relative_eq!(inputs.machine_cost, 1000.0);
        assert_relative_eq!(inputs.price_per_kg, 20.0);
    }

    #[test]
    fn test_inputs_clamp_to_non_negative() {
        let inputs = OfferInputs::new(-100.0, f64::NAN, f64::INFINITY, 50.0, 0.0, 20.0, 13.5);
        assert_relative_eq!(inputs.machine_cost, 0.0);
        assert_relative_eq!(inputs.grinder1_cost, 0.0);
        assert_relative_eq!(inputs.grinder2_cost, 0.0);
        assert_relative_eq!(inputs.advertising_cost, 50.0);
    }
}
