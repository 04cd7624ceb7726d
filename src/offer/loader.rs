//! Load offer batches from CSV files

use super::{parse_amount, OfferInputs};
use csv::Reader;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading an offer CSV
#[derive(Debug, Error)]
pub enum OfferLoadError {
    #[error("could not read offer file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid offer CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// One customer offer: a label plus its sanitized inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    pub customer: String,
    pub inputs: OfferInputs,
}

/// Raw CSV row matching the offer sheet columns
///
/// Numeric cells are read as strings and coerced with the same
/// parse-or-zero policy as the interactive form, so blank cells load as 0.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Customer")]
    customer: String,
    #[serde(rename = "Machine")]
    machine: String,
    #[serde(rename = "Grinder1")]
    grinder1: String,
    #[serde(rename = "Grinder2")]
    grinder2: String,
    #[serde(rename = "Advertising")]
    advertising: String,
    #[serde(rename = "ConsumptionKg")]
    consumption_kg: String,
    #[serde(rename = "PricePerKg")]
    price_per_kg: String,
    #[serde(rename = "CoffeeCost")]
    coffee_cost: String,
}

impl CsvRow {
    fn to_offer(self) -> Offer {
        Offer {
            customer: self.customer,
            inputs: OfferInputs::new(
                parse_amount(&self.machine),
                parse_amount(&self.grinder1),
                parse_amount(&self.grinder2),
                parse_amount(&self.advertising),
                parse_amount(&self.consumption_kg),
                parse_amount(&self.price_per_kg),
                parse_amount(&self.coffee_cost),
            ),
        }
    }
}

/// Load all offers from a CSV file with named headers
pub fn load_offers(path: &Path) -> Result<Vec<Offer>, OfferLoadError> {
    let mut reader = Reader::from_path(path)?;
    let mut offers = Vec::new();

    for row in reader.deserialize::<CsvRow>() {
        offers.push(row?.to_offer());
    }

    Ok(offers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_offers() {
        let file = write_csv(
            "Customer,Machine,Grinder1,Grinder2,Advertising,ConsumptionKg,PricePerKg,CoffeeCost\n\
             Cafe Aroma,1000,200,200,100,50,20,13.5\n\
             Kiosk Corner,500,150,,50,10,18,13.5\n",
        );

        let offers = load_offers(file.path()).unwrap();
        assert_eq!(offers.len(), 2);

        assert_eq!(offers[0].customer, "Cafe Aroma");
        assert_relative_eq!(offers[0].inputs.machine_cost, 1000.0);
        assert_relative_eq!(offers[0].inputs.coffee_cost_per_kg, 13.5);

        // Blank grinder2 cell coerces to 0
        assert_eq!(offers[1].customer, "Kiosk Corner");
        assert_relative_eq!(offers[1].inputs.grinder2_cost, 0.0);
    }

    #[test]
    fn test_load_offers_coerces_junk_cells() {
        let file = write_csv(
            "Customer,Machine,Grinder1,Grinder2,Advertising,ConsumptionKg,PricePerKg,CoffeeCost\n\
             Messy Sheet,n/a,200,200,100,50 kg,20,13.5\n",
        );

        let offers = load_offers(file.path()).unwrap();
        assert_relative_eq!(offers[0].inputs.machine_cost, 0.0);
        assert_relative_eq!(offers[0].inputs.monthly_consumption_kg, 50.0);
    }

    #[test]
    fn test_load_offers_missing_file() {
        let result = load_offers(Path::new("does_not_exist.csv"));
        assert!(result.is_err());
    }
}
