//! Recurring discount rules
//!
//! Maps a recurrence declaration to its discount tier and human label.
//! Both functions are total: absent or unrecognized input yields the
//! zero/empty case, never an error.

use quotewell_domain::constants::{
    RECURRING_DISCOUNT_HIGH_MIN_OCCURRENCES, RECURRING_DISCOUNT_HIGH_PCT,
    RECURRING_DISCOUNT_STANDARD_MIN_OCCURRENCES, RECURRING_DISCOUNT_STANDARD_PCT,
};
use quotewell_domain::types::{FrequencyKind, RecurringFrequency};

/// Discount percentage earned by a recurrence commitment.
///
/// 20% from 9 committed events, 15% from 4, otherwise 0.
pub fn recurring_discount_for(frequency: Option<&RecurringFrequency>) -> f64 {
    frequency.map_or(0.0, |freq| {
        if freq.occurrences >= RECURRING_DISCOUNT_HIGH_MIN_OCCURRENCES {
            RECURRING_DISCOUNT_HIGH_PCT
        } else if freq.occurrences >= RECURRING_DISCOUNT_STANDARD_MIN_OCCURRENCES {
            RECURRING_DISCOUNT_STANDARD_PCT
        } else {
            0.0
        }
    })
}

/// Display label for a recurrence cadence; empty string when absent.
pub fn frequency_label(frequency: Option<&RecurringFrequency>) -> String {
    frequency.map_or_else(String::new, |freq| match freq.kind {
        FrequencyKind::Quarterly => String::from("Quarterly (4 events)"),
        FrequencyKind::Monthly => String::from("Monthly (12 events)"),
        FrequencyKind::Custom => format!("Custom ({} events)", freq.occurrences),
    })
}
