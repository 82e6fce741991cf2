//! Domain types and models
//!
//! Field names serialize in camelCase to stay byte-compatible with the
//! proposal JSON blobs already held by the persistence collaborator.

pub mod proposal;
pub mod service;

pub use proposal::{
    ClientIntake, DayEntry, EventGroup, GratuityType, LegacyDayBucket, LocationServices,
    ProposalData, ProposalRecord, ProposalStatus, ProposalSummary,
};
pub use service::{
    AppointmentCount, FrequencyKind, MindfulnessType, PricingOption, RecurringFrequency,
    ServiceQuote, ServiceSelection, ServiceTotals, ServiceType,
};
