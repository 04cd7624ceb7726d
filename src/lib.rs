//! Offer Projection - financial projection engine for coffee equipment sales offers
//!
//! This library provides:
//! - Parse-or-zero input coercion for the seven offer form fields
//! - Derived metrics: fixed costs, profit, revenue, margin, payback period
//! - A three-way DO IT / DO NOT / no-call verdict with a configurable threshold
//! - An explicit application state with pure reducer transitions
//! - Offer card rendering, document export, and email delivery via EmailJS
//! - Batch projections over offer books loaded from CSV

pub mod app;
pub mod mail;
pub mod offer;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use app::{reduce, Action, AppState, EmailLogEntry, Notice};
pub use offer::{Offer, OfferForm, OfferInputs};
pub use projection::{OfferProjection, ProjectionConfig, ProjectionEngine, Verdict};
pub use scenario::OfferRunner;
