//! Pricing-option synthesizer
//!
//! Generates alternative quantity tiers for a base service so a proposal
//! can present "standard / +25% / +50%" coverage side by side. Tier costs
//! are recomputed from the scaled hours; tier appointment counts scale the
//! *base* count directly (legacy tier semantics, pinned by test).

use quotewell_domain::constants::{
    TIER_PLUS_25_MULTIPLIER, TIER_PLUS_50_MULTIPLIER, TIER_STANDARD_MULTIPLIER,
};
use quotewell_domain::types::{AppointmentCount, PricingOption, ServiceSelection};

use super::service_cost::price_service;

/// Recipe for one generated pricing option.
#[derive(Debug, Clone)]
pub struct TierConfig {
    pub name: String,
    pub description: Option<String>,
    /// Factor applied to the base service's hours.
    pub multiplier: f64,
}

impl TierConfig {
    /// Convenience constructor for a named multiplier tier.
    pub fn new(name: impl Into<String>, multiplier: f64) -> Self {
        Self { name: name.into(), description: None, multiplier }
    }

    /// Attach a display description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Summed figures across a set of pricing options.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OptionTotals {
    /// Numeric appointments only; unlimited options contribute 0.
    pub total_appointments: i64,
    pub total_cost: f64,
    pub total_pro_revenue: f64,
}

/// Build one pricing option per config by scaling the base service's hours
/// and repricing. The first generated option is marked selected.
pub fn build_pricing_options(
    base: &ServiceSelection,
    configs: &[TierConfig],
) -> Vec<PricingOption> {
    configs
        .iter()
        .enumerate()
        .map(|(index, config)| {
            let mut scaled = base.clone();
            scaled.total_hours = base.total_hours.map(|hours| hours * config.multiplier);
            let totals = price_service(&scaled).into_totals();

            PricingOption {
                name: config.name.clone(),
                description: config.description.clone(),
                total_hours: scaled.total_hours,
                num_pros: base.num_pros,
                hourly_rate: base.hourly_rate,
                discount_percent: Some(base.discount_percent),
                total_appointments: totals.total_appointments,
                total_cost: totals.service_cost,
                pro_revenue: totals.pro_revenue,
                is_selected: index == 0,
            }
        })
        .collect()
}

/// Generate the standard three quantity tiers for a service.
///
/// Option 1 is the service as given; Options 2 and 3 scale hours by 1.25×
/// and 1.5×. Their appointment counts are floored from the *base* count
/// times the multiplier rather than recomputed from the scaled hours; the
/// two can disagree by one or two appointments and existing proposals
/// depend on the scaled-count figures.
pub fn generate_tiered_options(service: &ServiceSelection) -> Vec<PricingOption> {
    let tiers = [
        TierConfig::new("Option 1", TIER_STANDARD_MULTIPLIER)
            .with_description("Standard coverage"),
        TierConfig::new("Option 2", TIER_PLUS_25_MULTIPLIER)
            .with_description("25% more coverage"),
        TierConfig::new("Option 3", TIER_PLUS_50_MULTIPLIER)
            .with_description("50% more coverage"),
    ];

    let base_count = price_service(service).into_totals().total_appointments;
    let mut options = build_pricing_options(service, &tiers);

    if let AppointmentCount::Limited(base) = base_count {
        for (option, tier) in options.iter_mut().zip(&tiers) {
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            let scaled = ((base as f64) * tier.multiplier).floor() as i64;
            option.total_appointments = AppointmentCount::Limited(scaled.max(0));
        }
    }

    options
}

/// Sum a set of pricing options into one figure per column.
pub fn sum_pricing_options(options: &[PricingOption]) -> OptionTotals {
    options.iter().fold(OptionTotals::default(), |mut acc, option| {
        acc.total_appointments += option.total_appointments.numeric();
        acc.total_cost += option.total_cost;
        acc.total_pro_revenue += option.pro_revenue;
        acc
    })
}
