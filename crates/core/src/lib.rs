//! # QuoteWell Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The pricing engine (service costs, quantity tiers, discounts)
//! - Proposal assembly and totals recalculation
//! - Port/adapter interfaces (traits) for persistence and notifications
//!
//! ## Architecture Principles
//! - Only depends on `quotewell-domain`
//! - No database, HTTP, or platform code
//! - All external collaborators via traits
//! - Pure, testable business logic

pub mod pricing;
pub mod proposal;

// Re-export specific items to avoid ambiguity
pub use pricing::discounts::{frequency_label, recurring_discount_for};
pub use pricing::options::{
    build_pricing_options, generate_tiered_options, sum_pricing_options, OptionTotals, TierConfig,
};
pub use pricing::service_cost::price_service;
pub use proposal::builder::{build_proposal, build_proposal_with_report, BuildReport, DroppedService};
pub use proposal::ports::{NotificationPort, NotificationTemplate, ProposalRepository};
pub use proposal::recalculate::recalculate_totals;
pub use proposal::service::ProposalService;
