//! Offer input model: raw form fields, sanitized inputs, and CSV loading

mod form;
pub mod loader;

pub use form::{parse_amount, OfferField, OfferForm, OfferInputs};
pub use loader::{load_offers, Offer, OfferLoadError};
