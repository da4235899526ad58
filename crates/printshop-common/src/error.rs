//! Error types for the storefront
//!
//! Pricing itself never fails; errors only arise when a rate table is
//! read, parsed or validated.

use thiserror::Error;

/// Result type alias using StorefrontError
pub type Result<T> = std::result::Result<T, StorefrontError>;

/// Unified error type for storefront operations
#[derive(Debug, Error)]
pub enum StorefrontError {
    // Rate table errors
    #[error("Rate table error: {0}")]
    RateTable(#[from] RateTableError),

    // Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Rate table validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RateTableError {
    #[error("Negative per-page rate for color mode {key}: {rate}")]
    NegativeColorRate { key: String, rate: String },

    #[error("Negative binding rate for {key}: {rate}")]
    NegativeBindingRate { key: String, rate: String },

    #[error("Negative amount for extra {key}: {amount}")]
    NegativeExtraAmount { key: String, amount: String },

    #[error("Negative amount for shipping tier {key}: {amount}")]
    NegativeShippingAmount { key: String, amount: String },

    #[error("Empty label for {category} entry {key}")]
    EmptyLabel { category: &'static str, key: String },
}

// Implement From for common external error types
impl From<serde_json::Error> for StorefrontError {
    fn from(err: serde_json::Error) -> Self {
        StorefrontError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for StorefrontError {
    fn from(err: std::io::Error) -> Self {
        StorefrontError::Storage(err.to_string())
    }
}
