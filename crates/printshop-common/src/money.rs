//! Currency formatting
//!
//! Amounts are rounded half away from zero to two places and always shown
//! with both fraction digits. The sign follows the symbol (`$-0.35`).

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{CURRENCY_DECIMALS, CURRENCY_SYMBOL};

/// Round an amount to display precision
pub fn round_for_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CURRENCY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount as `$<value>` with two fixed fraction digits
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_for_display(value);
    format!(
        "{}{:.prec$}",
        CURRENCY_SYMBOL,
        rounded,
        prec = CURRENCY_DECIMALS as usize
    )
}

/// Format an amount that is added on top of the base price (`+$1.50`)
pub fn format_surcharge(value: Decimal) -> String {
    format!("+{}", format_currency(value))
}
