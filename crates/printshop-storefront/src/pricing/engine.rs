//! Order pricing engine
//!
//! ```text
//! base     = pages × color rate + binding rate + paper adjustment
//! per copy = max(base + per-copy extras, 0)
//! total    = per copy × copies + shipping + flat extras
//! ```
//!
//! Pricing is total: any key the rate table does not know contributes
//! zero, so every selection prices to a well-formed breakdown.

use std::path::Path;
use std::sync::Arc;

use printshop_common::{
    format_currency, format_surcharge, ExtraKind, LineItem, OrderSelection, PriceBreakdown,
    RateTable, Result, PRINTING_LINE_LABEL, SHIPPING_INCLUDED,
};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Price a selection against a rate table
pub fn compute(selection: &OrderSelection, rates: &RateTable) -> PriceBreakdown {
    let per_page = rates
        .color_rate(selection.color_mode.as_deref())
        .unwrap_or(Decimal::ZERO);
    let binding_rate = rates
        .binding_rate(selection.binding.as_deref())
        .unwrap_or(Decimal::ZERO);
    let paper_adjustment = rates
        .paper_adjustment(selection.paper.as_deref())
        .unwrap_or(Decimal::ZERO);
    let shipping = rates.shipping_tier(selection.shipping.as_deref());
    let shipping_amount = shipping.map(|tier| tier.amount).unwrap_or(Decimal::ZERO);

    // Saturates at Decimal::MAX on extreme rates
    let base_per_copy = Decimal::from(selection.pages)
        .saturating_mul(per_page)
        .saturating_add(binding_rate)
        .saturating_add(paper_adjustment);

    // Unknown bindings read the same as no binding
    let binding_name = match selection.binding.as_deref() {
        Some(key) if rates.binding.contains_key(key) => key,
        _ => "no",
    };

    let mut line_items = vec![LineItem::new(PRINTING_LINE_LABEL, format_currency(base_per_copy))
        .with_detail(format!(
            "{} pages, {} binding",
            selection.pages, binding_name
        ))];

    let mut per_copy = base_per_copy;
    let mut flat_fees = shipping_amount;

    for key in selection.extras() {
        let Some(extra) = rates.extra(key) else {
            debug!(extra = %key, "Ignoring unknown extra");
            continue;
        };

        match extra.kind {
            ExtraKind::PerCopy => per_copy = per_copy.saturating_add(extra.amount),
            ExtraKind::Flat => flat_fees = flat_fees.saturating_add(extra.amount),
        }
        line_items.push(LineItem::new(&extra.label, format_surcharge(extra.amount)));
    }

    if let Some(tier) = shipping {
        let value = if shipping_amount > Decimal::ZERO {
            format_surcharge(shipping_amount)
        } else {
            SHIPPING_INCLUDED.to_string()
        };
        line_items.push(LineItem::new(&tier.label, value));
    }

    let per_copy = per_copy.max(Decimal::ZERO);
    let subtotal = per_copy.saturating_mul(Decimal::from(selection.copies));
    let total = subtotal.saturating_add(flat_fees);

    PriceBreakdown {
        per_copy,
        total,
        copies: selection.copies,
        flat_fees,
        line_items,
    }
}

/// Pricing engine bound to one rate table
#[derive(Debug, Clone)]
pub struct PricingEngine {
    rates: Arc<RateTable>,
}

impl PricingEngine {
    /// Create an engine over the given rates
    pub fn new(rates: RateTable) -> Self {
        Self {
            rates: Arc::new(rates),
        }
    }

    /// Share an existing rate table
    pub fn with_shared_rates(rates: Arc<RateTable>) -> Self {
        Self { rates }
    }

    /// Load rates from a JSON file
    pub fn with_rates_file(path: &Path) -> Result<Self> {
        Ok(Self::new(RateTable::from_json_file(path)?))
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Price a selection
    #[instrument(skip(self), level = "debug")]
    pub fn quote(&self, selection: &OrderSelection) -> PriceBreakdown {
        let breakdown = compute(selection, &self.rates);
        debug!(
            per_copy = %breakdown.per_copy,
            total = %breakdown.total,
            flat_fees = %breakdown.flat_fees,
            "Priced selection"
        );
        breakdown
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(RateTable::standard())
    }
}
