//! Pricing module
//!
//! Turns an order selection into a price breakdown:
//! - Per-page printing by color mode
//! - Per-copy binding and paper adjustments
//! - Per-copy and flat extras
//! - Flat shipping

pub mod engine;

pub use engine::{compute, PricingEngine};
