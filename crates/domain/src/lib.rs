//! # QuoteWell Domain
//!
//! Business domain types and models for QuoteWell.
//!
//! This crate contains:
//! - Proposal and service-selection data types
//! - Domain error types and Result definitions
//! - Business constants (discount tiers, fixed-price tables)
//! - Date normalization utilities
//!
//! ## Architecture
//! - No dependencies on other QuoteWell crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
// Re-export date utilities
pub use utils::date::{compare_event_dates, normalize_date, sort_event_dates};
