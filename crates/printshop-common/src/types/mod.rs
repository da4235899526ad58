//! Core data types for the storefront pricing calculator

pub mod breakdown;
pub mod rates;
pub mod selection;
