//! Price Breakdown - what the summary panel shows
//!
//! Produced fresh by every pricing pass and consumed once by the renderer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the displayed breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Row label (e.g. "Laminated cover")
    pub label: String,
    /// Display value (e.g. "+$1.50" or "Included")
    pub value: String,
    /// Optional detail text shown after the value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl LineItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            detail: None,
        }
    }

    /// Attach detail text
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Computed price for an order selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    /// Price of one copy, never negative
    pub per_copy: Decimal,

    /// per_copy × copies + flat_fees
    pub total: Decimal,

    /// Copies ordered
    pub copies: u32,

    /// One-time charges: shipping plus flat extras
    pub flat_fees: Decimal,

    /// Display rows, in order
    pub line_items: Vec<LineItem>,
}

impl PriceBreakdown {
    /// Copy-dependent part of the total
    pub fn subtotal(&self) -> Decimal {
        self.per_copy * Decimal::from(self.copies)
    }
}
