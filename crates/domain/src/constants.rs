//! Business constants
//!
//! Centralized location for all pricing rules used throughout the engine.
//! Every rate and threshold in the proposal math lives here so rule changes
//! have one source of truth.

/// Sentinel date value for events that have not been scheduled yet.
/// Always sorts after real dates.
pub const TBD_DATE: &str = "TBD";

// Mindfulness sessions are fixed-price by class length rather than billed
// hourly. Prices are per session, regardless of participant count.
pub const MINDFULNESS_PRICE_30_MIN: f64 = 1250.0;
pub const MINDFULNESS_PRICE_45_MIN: f64 = 1375.0;
pub const MINDFULNESS_PRICE_60_MIN: f64 = 1500.0;
pub const MINDFULNESS_DEFAULT_PRICE: f64 = MINDFULNESS_PRICE_45_MIN;

/// Share of a mindfulness session's price paid to the instructor.
pub const MINDFULNESS_PRO_SHARE: f64 = 0.30;

// Recurring discount tiers, keyed by committed occurrence count.
pub const RECURRING_DISCOUNT_HIGH_PCT: f64 = 20.0;
pub const RECURRING_DISCOUNT_HIGH_MIN_OCCURRENCES: u32 = 9;
pub const RECURRING_DISCOUNT_STANDARD_PCT: f64 = 15.0;
pub const RECURRING_DISCOUNT_STANDARD_MIN_OCCURRENCES: u32 = 4;

/// Distinct scheduled (non-TBD) dates in one proposal that trigger the
/// automatic recurring discount when no service is manually recurring.
pub const AUTO_RECURRING_MIN_DATES: usize = 4;

// Quantity tier multipliers for generated pricing options.
pub const TIER_STANDARD_MULTIPLIER: f64 = 1.0;
pub const TIER_PLUS_25_MULTIPLIER: f64 = 1.25;
pub const TIER_PLUS_50_MULTIPLIER: f64 = 1.5;
