//! Pricing engine
//!
//! Pure functions that price a single service selection: discount rules,
//! the per-category cost calculator, and the quantity-tier synthesizer.

pub mod discounts;
pub mod options;
pub mod service_cost;

/// Round a money value to 2 decimal places. Applied once, at return time.
pub(crate) fn round_money(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
