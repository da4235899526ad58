//! Summary panel rendering
//!
//! Turns a [`PriceBreakdown`] into the strings the order summary shows:
//! the per-copy price, the total with its copy count, and one row per
//! line item.

use std::fmt;

use printshop_common::{format_currency, PriceBreakdown};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Separator between a row's value and its detail
pub const DETAIL_SEPARATOR: &str = " \u{2022} ";

/// One rendered breakdown row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub label: String,
    pub value: String,
}

/// Rendered summary panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryView {
    /// e.g. "$8.10"
    pub per_copy: String,
    /// e.g. "$405.00 for 50 copies"
    pub total: String,
    pub rows: Vec<SummaryRow>,
}

impl SummaryView {
    /// Render a breakdown
    pub fn render(breakdown: &PriceBreakdown) -> Self {
        let rows = breakdown
            .line_items
            .iter()
            .map(|item| SummaryRow {
                label: item.label.clone(),
                value: match &item.detail {
                    Some(detail) => format!("{}{}{}", item.value, DETAIL_SEPARATOR, detail),
                    None => item.value.clone(),
                },
            })
            .collect();

        Self {
            per_copy: format_currency(breakdown.per_copy),
            total: total_text(breakdown.total, breakdown.copies),
            rows,
        }
    }

    /// Empty panel
    pub fn cleared() -> Self {
        Self {
            per_copy: format_currency(Decimal::ZERO),
            total: total_text(Decimal::ZERO, 0),
            rows: Vec::new(),
        }
    }
}

impl Default for SummaryView {
    fn default() -> Self {
        Self::cleared()
    }
}

fn total_text(total: Decimal, copies: u32) -> String {
    format!("{} for {} copies", format_currency(total), copies)
}

impl fmt::Display for SummaryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .rows
            .iter()
            .map(|row| row.label.chars().count())
            .max()
            .unwrap_or(0)
            .max("Per copy".len());

        for row in &self.rows {
            writeln!(f, "{:<width$}  {}", row.label, row.value, width = width)?;
        }
        if !self.rows.is_empty() {
            writeln!(f)?;
        }
        writeln!(f, "{:<width$}  {}", "Per copy", self.per_copy, width = width)?;
        write!(f, "{:<width$}  {}", "Total", self.total, width = width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use printshop_common::LineItem;
    use rust_decimal_macros::dec;

    fn breakdown() -> PriceBreakdown {
        PriceBreakdown {
            per_copy: dec!(9.6),
            total: dec!(570),
            copies: 50,
            flat_fees: dec!(90),
            line_items: vec![
                LineItem::new("Printing & binding", "$8.10").with_detail("100 pages, spiral binding"),
                LineItem::new("Laminated cover", "+$1.50"),
                LineItem::new("Rush shipping", "+$90.00"),
            ],
        }
    }

    #[test]
    fn test_render() {
        let view = SummaryView::render(&breakdown());
        assert_eq!(view.per_copy, "$9.60");
        assert_eq!(view.total, "$570.00 for 50 copies");
        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.rows[0].value, "$8.10 \u{2022} 100 pages, spiral binding");
        assert_eq!(view.rows[1].value, "+$1.50");
    }

    #[test]
    fn test_cleared() {
        let view = SummaryView::cleared();
        assert_eq!(view.per_copy, "$0.00");
        assert_eq!(view.total, "$0.00 for 0 copies");
        assert!(view.rows.is_empty());
    }

    #[test]
    fn test_display_aligns_labels() {
        let text = SummaryView::render(&breakdown()).to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Printing & binding  $8.10 \u{2022} 100 pages, spiral binding");
        assert_eq!(lines[2], "Rush shipping       +$90.00");
        assert_eq!(lines.last().copied(), Some("Total               $570.00 for 50 copies"));
    }
}
