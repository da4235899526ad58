//! Order form state
//!
//! Mirrors the browser's form data: an ordered list of `name=value` pairs
//! where checkbox groups such as `extras` repeat the same name.

use printshop_common::OrderSelection;
use serde::{Deserialize, Serialize};

/// Field names used by the order form
pub mod fields {
    pub const PAGES: &str = "pages";
    pub const COPIES: &str = "copies";
    pub const COLOR_MODE: &str = "colorMode";
    pub const BINDING: &str = "binding";
    pub const PAPER: &str = "paper";
    pub const SHIPPING: &str = "shipping";
    pub const EXTRAS: &str = "extras";
}

/// Ordered multimap of form fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    entries: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every value of `name` with a single value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.entries.retain(|(n, _)| *n != name);
        self.entries.push((name, value.into()));
    }

    /// Add another value under `name`
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Drop every value of `name`
    pub fn remove(&mut self, name: &str) {
        self.entries.retain(|(n, _)| n != name);
    }

    /// First value of `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// All values of `name`, in insertion order
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a `name=value` pair. A bare name maps to an empty value.
    pub fn parse_pair(raw: &str) -> (String, String) {
        match raw.split_once('=') {
            Some((name, value)) => (name.trim().to_string(), value.trim().to_string()),
            None => (raw.trim().to_string(), String::new()),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Lenient count parsing: blanks, garbage and negatives read as zero,
/// fractions truncate toward zero.
pub fn parse_count(raw: &str) -> u32 {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<u32>() {
        return n;
    }
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => n.min(u32::MAX as f64) as u32,
        _ => 0,
    }
}

fn choice(form: &FormData, name: &str) -> Option<String> {
    form.get(name)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl From<&FormData> for OrderSelection {
    fn from(form: &FormData) -> Self {
        let pages = form.get(fields::PAGES).map(parse_count).unwrap_or(0);
        let copies = form.get(fields::COPIES).map(parse_count).unwrap_or(0);

        let mut selection = OrderSelection::new(pages, copies).with_extras(
            form.get_all(fields::EXTRAS)
                .map(str::trim)
                .filter(|v| !v.is_empty()),
        );
        selection.color_mode = choice(form, fields::COLOR_MODE);
        selection.binding = choice(form, fields::BINDING);
        selection.paper = choice(form, fields::PAPER);
        selection.shipping = choice(form, fields::SHIPPING);
        selection
    }
}
