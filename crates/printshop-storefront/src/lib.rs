//! # Print Shop Storefront
//!
//! Live order pricing for the print shop's storefront.
//!
//! ## Pricing Formula
//!
//! ```text
//! per copy = max(pages × color rate + binding + paper + per-copy extras, 0)
//! total    = per copy × copies + shipping + flat extras
//! ```
//!
//! Flow on every form change: [`form::FormData`] → [`OrderSelection`] →
//! [`pricing::PricingEngine`] → [`summary::SummaryView`].

pub mod chrome;
pub mod config;
pub mod form;
pub mod pricing;
pub mod storefront;
pub mod summary;
pub mod toast;

pub use printshop_common::{
    LineItem, OrderSelection, PriceBreakdown, RateTable, Result, StorefrontError,
};

pub use config::StorefrontConfig;
pub use form::FormData;
pub use pricing::{compute, PricingEngine};
pub use storefront::Storefront;
pub use summary::SummaryView;
pub use toast::{Toast, ToastState, ToastTiming};

/// Storefront version
pub const STOREFRONT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build a pricing engine from configuration
pub fn engine_from_config(config: &StorefrontConfig) -> Result<PricingEngine> {
    match &config.rates_file {
        Some(path) => PricingEngine::with_rates_file(path),
        None => Ok(PricingEngine::default()),
    }
}
