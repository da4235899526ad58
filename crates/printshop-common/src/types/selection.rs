//! Order Selection - one snapshot of the order form
//!
//! Category fields hold raw keys as the form supplied them. Whether a key
//! means anything is decided by the rate table at pricing time, so a
//! selection is always constructible.

use serde::{Deserialize, Serialize};

/// Selections made on the order form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSelection {
    /// Pages per copy
    pub pages: u32,

    /// Number of copies
    pub copies: u32,

    /// Color mode key (e.g. "bw", "full")
    pub color_mode: Option<String>,

    /// Binding key (e.g. "spiral")
    pub binding: Option<String>,

    /// Paper key (e.g. "matte")
    pub paper: Option<String>,

    /// Shipping tier key (e.g. "standard")
    pub shipping: Option<String>,

    /// Extra keys in the order they were ticked, without duplicates
    #[serde(default)]
    extras: Vec<String>,
}

impl OrderSelection {
    /// Create a selection with no categories chosen
    pub fn new(pages: u32, copies: u32) -> Self {
        Self {
            pages,
            copies,
            ..Self::default()
        }
    }

    /// Set color mode
    pub fn with_color_mode(mut self, key: impl Into<String>) -> Self {
        self.color_mode = Some(key.into());
        self
    }

    /// Set binding
    pub fn with_binding(mut self, key: impl Into<String>) -> Self {
        self.binding = Some(key.into());
        self
    }

    /// Set paper
    pub fn with_paper(mut self, key: impl Into<String>) -> Self {
        self.paper = Some(key.into());
        self
    }

    /// Set shipping tier
    pub fn with_shipping(mut self, key: impl Into<String>) -> Self {
        self.shipping = Some(key.into());
        self
    }

    /// Tick an extra. Ticking the same key twice keeps the first position.
    pub fn with_extra(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        if !self.extras.contains(&key) {
            self.extras.push(key);
        }
        self
    }

    /// Tick several extras in order
    pub fn with_extras<I, S>(self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        keys.into_iter().fold(self, |sel, key| sel.with_extra(key))
    }

    /// Ticked extras, in tick order
    pub fn extras(&self) -> &[String] {
        &self.extras
    }
}
