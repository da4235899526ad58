//! Storefront configuration

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::chrome::DEFAULT_SCROLL_TOP_THRESHOLD;
use crate::toast::ToastTiming;

/// Storefront configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// JSON rate table; the built-in price list is used when unset
    pub rates_file: Option<PathBuf>,
    /// How long the confirmation toast stays up, in milliseconds
    pub toast_visible_ms: u64,
    /// Scroll offset that reveals the scroll-to-top button
    pub scroll_top_threshold: f64,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            rates_file: None,
            toast_visible_ms: ToastTiming::DEFAULT_VISIBLE_UNTIL.as_millis() as u64,
            scroll_top_threshold: DEFAULT_SCROLL_TOP_THRESHOLD,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment and `.env`
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        Ok(Self::from_lookup(|name| std::env::var(name).ok()))
    }

    /// Apply `PRINTSHOP_` variables from `lookup` over the defaults.
    /// Values that do not parse are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(path) = lookup("PRINTSHOP_RATES_FILE") {
            if !path.trim().is_empty() {
                cfg.rates_file = Some(PathBuf::from(path.trim()));
            }
        }
        if let Some(val) = lookup("PRINTSHOP_TOAST_VISIBLE_MS") {
            if let Ok(v) = val.trim().parse() {
                cfg.toast_visible_ms = v;
            }
        }
        if let Some(val) = lookup("PRINTSHOP_SCROLL_TOP_THRESHOLD") {
            if let Ok(v) = val.trim().parse::<f64>() {
                if v.is_finite() {
                    cfg.scroll_top_threshold = v;
                }
            }
        }

        cfg
    }

    pub fn toast_timing(&self) -> ToastTiming {
        ToastTiming::with_visible_until(Duration::from_millis(self.toast_visible_ms))
    }
}
