//! Projection engine for single and batch offer projections

mod engine;
mod metrics;

pub use engine::{ProjectionConfig, ProjectionEngine};
pub use metrics::{format_eur, format_months, format_percent, OfferProjection, Verdict};
