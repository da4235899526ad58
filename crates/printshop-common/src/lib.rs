//! # Print Shop Common
//!
//! Shared types, money formatting, and errors for the print shop storefront.
//!
//! ## Core Types
//!
//! - [`RateTable`]: Immutable per-page, per-copy and flat rates
//! - [`OrderSelection`]: One snapshot of the order form's selections
//! - [`PriceBreakdown`]/[`LineItem`]: Computed price and its display rows
//!
//! ## Money
//!
//! - [`money::format_currency`]: Two fixed fraction digits behind a `$`

pub mod error;
pub mod money;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{RateTableError, Result, StorefrontError};
pub use money::{format_currency, format_surcharge};
pub use types::{
    breakdown::{LineItem, PriceBreakdown},
    rates::{Extra, ExtraKind, RateTable, ShippingTier},
    selection::OrderSelection,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Currency symbol prefixed to every displayed amount
pub const CURRENCY_SYMBOL: &str = "$";

/// Fraction digits shown for every displayed amount
pub const CURRENCY_DECIMALS: u32 = 2;

/// Label of the first breakdown row
pub const PRINTING_LINE_LABEL: &str = "Printing & binding";

/// Shipping row value when the tier costs nothing
pub const SHIPPING_INCLUDED: &str = "Included";
