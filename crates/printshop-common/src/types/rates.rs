//! Rate Table - the price list behind every quote
//!
//! A rate table has five sections:
//! - Color mode: per-page printing rate
//! - Binding: flat per-copy rate
//! - Paper: per-copy adjustment (may be negative, e.g. recycled stock)
//! - Extras: add-ons priced per copy or as a one-time flat fee
//! - Shipping: flat fee per order, with a display label
//!
//! Lookups are total: every accessor returns `None` for keys the table does
//! not know, and callers decide what "absent" costs (always zero in pricing).

use std::collections::BTreeMap;
use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{RateTableError, Result};

/// How an extra is charged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExtraKind {
    /// Added to every copy
    PerCopy,
    /// Charged once per order
    Flat,
}

/// Optional add-on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extra {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: ExtraKind,
    pub amount: Decimal,
}

impl Extra {
    pub fn new(label: impl Into<String>, kind: ExtraKind, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            kind,
            amount,
        }
    }
}

/// Shipping speed option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingTier {
    pub label: String,
    pub amount: Decimal,
    #[serde(default)]
    pub description: String,
}

impl ShippingTier {
    pub fn new(label: impl Into<String>, amount: Decimal, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            amount,
            description: description.into(),
        }
    }
}

/// Immutable price list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateTable {
    /// Color mode -> per-page rate
    #[serde(default)]
    pub color_mode: BTreeMap<String, Decimal>,
    /// Binding type -> per-copy rate
    #[serde(default)]
    pub binding: BTreeMap<String, Decimal>,
    /// Paper type -> per-copy adjustment
    #[serde(default)]
    pub paper: BTreeMap<String, Decimal>,
    #[serde(default)]
    pub extras: BTreeMap<String, Extra>,
    #[serde(default)]
    pub shipping: BTreeMap<String, ShippingTier>,
}

impl RateTable {
    /// Empty table; every lookup misses
    pub fn new() -> Self {
        Self::default()
    }

    /// The shop's published price list
    pub fn standard() -> Self {
        Self::new()
            .with_color_mode("bw", dec!(0.06))
            .with_color_mode("mixed", dec!(0.11))
            .with_color_mode("full", dec!(0.16))
            .with_binding("spiral", dec!(2.1))
            .with_binding("wire", dec!(2.6))
            .with_binding("perfect", dec!(3.4))
            .with_binding("saddle", dec!(1.8))
            .with_paper("matte", dec!(0))
            .with_paper("gloss", dec!(0.8))
            .with_paper("recycled", dec!(-0.35))
            .with_extra(
                "laminate",
                Extra::new("Laminated cover", ExtraKind::PerCopy, dec!(1.5)),
            )
            .with_extra("tabs", Extra::new("Index tabs", ExtraKind::PerCopy, dec!(0.9)))
            .with_extra("proof", Extra::new("Hard-copy proof", ExtraKind::Flat, dec!(35)))
            .with_shipping(
                "standard",
                ShippingTier::new("Ground shipping", dec!(0), "Included"),
            )
            .with_shipping(
                "expedited",
                ShippingTier::new("Expedited shipping", dec!(45), "3-4 day delivery"),
            )
            .with_shipping(
                "rush",
                ShippingTier::new("Rush shipping", dec!(90), "2 day delivery"),
            )
    }

    /// Parse and validate a table from JSON
    pub fn from_json_str(content: &str) -> Result<Self> {
        let table: RateTable = serde_json::from_str(content)?;
        table.validate()?;
        Ok(table)
    }

    /// Load and validate a table from a JSON file
    #[instrument]
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let table = Self::from_json_str(&content)?;
        debug!(
            color_modes = table.color_mode.len(),
            bindings = table.binding.len(),
            papers = table.paper.len(),
            extras = table.extras.len(),
            shipping_tiers = table.shipping.len(),
            "Loaded rate table"
        );
        Ok(table)
    }

    /// Check the non-negativity and labelling rules.
    /// Paper adjustments are the only rates allowed below zero.
    pub fn validate(&self) -> std::result::Result<(), RateTableError> {
        for (key, rate) in &self.color_mode {
            if *rate < Decimal::ZERO {
                return Err(RateTableError::NegativeColorRate {
                    key: key.clone(),
                    rate: rate.to_string(),
                });
            }
        }
        for (key, rate) in &self.binding {
            if *rate < Decimal::ZERO {
                return Err(RateTableError::NegativeBindingRate {
                    key: key.clone(),
                    rate: rate.to_string(),
                });
            }
        }
        for (key, extra) in &self.extras {
            if extra.amount < Decimal::ZERO {
                return Err(RateTableError::NegativeExtraAmount {
                    key: key.clone(),
                    amount: extra.amount.to_string(),
                });
            }
            if extra.label.trim().is_empty() {
                return Err(RateTableError::EmptyLabel {
                    category: "extras",
                    key: key.clone(),
                });
            }
        }
        for (key, tier) in &self.shipping {
            if tier.amount < Decimal::ZERO {
                return Err(RateTableError::NegativeShippingAmount {
                    key: key.clone(),
                    amount: tier.amount.to_string(),
                });
            }
            if tier.label.trim().is_empty() {
                return Err(RateTableError::EmptyLabel {
                    category: "shipping",
                    key: key.clone(),
                });
            }
        }
        Ok(())
    }

    /// Per-page rate for a color mode
    pub fn color_rate(&self, key: Option<&str>) -> Option<Decimal> {
        key.and_then(|k| self.color_mode.get(k)).copied()
    }

    /// Per-copy rate for a binding type
    pub fn binding_rate(&self, key: Option<&str>) -> Option<Decimal> {
        key.and_then(|k| self.binding.get(k)).copied()
    }

    /// Per-copy adjustment for a paper type
    pub fn paper_adjustment(&self, key: Option<&str>) -> Option<Decimal> {
        key.and_then(|k| self.paper.get(k)).copied()
    }

    pub fn extra(&self, key: &str) -> Option<&Extra> {
        self.extras.get(key)
    }

    pub fn shipping_tier(&self, key: Option<&str>) -> Option<&ShippingTier> {
        key.and_then(|k| self.shipping.get(k))
    }

    /// Set a color mode rate
    pub fn with_color_mode(mut self, key: impl Into<String>, rate: Decimal) -> Self {
        self.color_mode.insert(key.into(), rate);
        self
    }

    /// Set a binding rate
    pub fn with_binding(mut self, key: impl Into<String>, rate: Decimal) -> Self {
        self.binding.insert(key.into(), rate);
        self
    }

    /// Set a paper adjustment
    pub fn with_paper(mut self, key: impl Into<String>, adjustment: Decimal) -> Self {
        self.paper.insert(key.into(), adjustment);
        self
    }

    /// Add or replace an extra
    pub fn with_extra(mut self, key: impl Into<String>, extra: Extra) -> Self {
        self.extras.insert(key.into(), extra);
        self
    }

    /// Add or replace a shipping tier
    pub fn with_shipping(mut self, key: impl Into<String>, tier: ShippingTier) -> Self {
        self.shipping.insert(key.into(), tier);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorefrontError;

    #[test]
    fn test_standard_rates() {
        let rates = RateTable::standard();
        assert_eq!(rates.color_rate(Some("bw")), Some(dec!(0.06)));
        assert_eq!(rates.binding_rate(Some("saddle")), Some(dec!(1.8)));
        assert_eq!(rates.paper_adjustment(Some("recycled")), Some(dec!(-0.35)));
        assert_eq!(rates.extra("proof").map(|e| e.kind), Some(ExtraKind::Flat));
        assert_eq!(
            rates.shipping_tier(Some("rush")).map(|t| t.amount),
            Some(dec!(90))
        );
        assert!(rates.validate().is_ok());
    }

    #[test]
    fn test_lookups_miss_for_unknown_or_absent_keys() {
        let rates = RateTable::standard();
        assert_eq!(rates.color_rate(Some("sepia")), None);
        assert_eq!(rates.binding_rate(None), None);
        assert_eq!(rates.paper_adjustment(Some("")), None);
        assert!(rates.extra("doesNotExist").is_none());
        assert!(rates.shipping_tier(Some("teleport")).is_none());
    }

    #[test]
    fn test_parse_storefront_json() {
        let json = r#"{
            "colorMode": { "bw": 0.05 },
            "binding": { "spiral": "2.00" },
            "paper": { "recycled": -0.5 },
            "extras": {
                "laminate": { "label": "Laminated cover", "type": "perCopy", "amount": 1.25 },
                "proof": { "label": "Hard-copy proof", "type": "flat", "amount": 40 }
            },
            "shipping": {
                "standard": { "label": "Ground shipping", "amount": 0, "description": "Included" }
            }
        }"#;

        let rates = RateTable::from_json_str(json).unwrap();
        assert_eq!(rates.color_rate(Some("bw")), Some(dec!(0.05)));
        assert_eq!(rates.binding_rate(Some("spiral")), Some(dec!(2.00)));
        assert_eq!(rates.paper_adjustment(Some("recycled")), Some(dec!(-0.5)));
        assert_eq!(
            rates.extra("laminate"),
            Some(&Extra::new("Laminated cover", ExtraKind::PerCopy, dec!(1.25)))
        );
        assert_eq!(rates.extra("proof").map(|e| e.kind), Some(ExtraKind::Flat));
        assert_eq!(
            rates.shipping_tier(Some("standard")).map(|t| t.label.as_str()),
            Some("Ground shipping")
        );
    }

    #[test]
    fn test_example_file_matches_standard() {
        let json = include_str!("../../../../config/rates.example.json");
        assert_eq!(RateTable::from_json_str(json).unwrap(), RateTable::standard());
    }

    #[test]
    fn test_missing_file_is_a_storage_error() {
        let err = RateTable::from_json_file(Path::new("/nonexistent/printshop/rates.json"))
            .unwrap_err();
        assert!(matches!(err, StorefrontError::Storage(_)));
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let rates = RateTable::from_json_str(r#"{ "colorMode": { "bw": 0.06 } }"#).unwrap();
        assert!(rates.binding.is_empty());
        assert!(rates.shipping.is_empty());
    }

    #[test]
    fn test_rejects_negative_binding() {
        let err = RateTable::standard()
            .with_binding("spiral", dec!(-1))
            .validate()
            .unwrap_err();
        assert!(matches!(err, RateTableError::NegativeBindingRate { .. }));
    }

    #[test]
    fn test_rejects_negative_shipping_json() {
        let json = r#"{ "shipping": { "rush": { "label": "Rush", "amount": -5 } } }"#;
        let err = RateTable::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            StorefrontError::RateTable(RateTableError::NegativeShippingAmount { .. })
        ));
    }

    #[test]
    fn test_rejects_unlabelled_extra() {
        let err = RateTable::new()
            .with_extra("tabs", Extra::new(" ", ExtraKind::PerCopy, dec!(0.9)))
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            RateTableError::EmptyLabel {
                category: "extras",
                key: "tabs".to_string()
            }
        );
    }

    #[test]
    fn test_negative_paper_is_allowed() {
        let rates = RateTable::new().with_paper("recycled", dec!(-3));
        assert!(rates.validate().is_ok());
    }

    #[test]
    fn test_unknown_extra_type_is_rejected() {
        let json = r#"{ "extras": { "x": { "label": "X", "type": "perPage", "amount": 1 } } }"#;
        assert!(matches!(
            RateTable::from_json_str(json),
            Err(StorefrontError::Serialization(_))
        ));
    }
}
