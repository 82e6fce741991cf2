//! Proposal totals recalculator
//!
//! Re-derives every computed field of a `ProposalData` from its services:
//! day and grand totals, event dates, gratuity, and the proposal-level
//! auto-recurring discount. Stored proposals arrive in several historical
//! shapes, so recalculation starts with a shape-repair pass that regroups
//! every service under its own most-trustworthy date.
//!
//! The function is idempotent: running it on its own output changes
//! nothing. That property is what lets the UI call it after every edit
//! without tracking which fields are stale.

use std::collections::BTreeMap;

use quotewell_domain::constants::{
    AUTO_RECURRING_MIN_DATES, MINDFULNESS_PRICE_30_MIN, MINDFULNESS_PRICE_45_MIN,
    MINDFULNESS_PRICE_60_MIN, RECURRING_DISCOUNT_HIGH_MIN_OCCURRENCES,
    RECURRING_DISCOUNT_HIGH_PCT, RECURRING_DISCOUNT_STANDARD_PCT, TBD_DATE,
};
use quotewell_domain::types::{
    DayEntry, GratuityType, LocationServices, MindfulnessType, ProposalData, ProposalSummary,
    ServiceSelection, ServiceTotals,
};
use quotewell_domain::utils::date::{normalize_date, sort_event_dates};
use tracing::debug;

use crate::pricing::round_money;
use crate::pricing::service_cost::price_service;

/// Recalculate every derived field of a proposal.
///
/// Value-semantic: the input is untouched and a fresh `ProposalData` is
/// returned with the same identity fields (client, locations, gratuity
/// settings) and all computed fields re-derived.
pub fn recalculate_totals(proposal: &ProposalData) -> ProposalData {
    let mut result = proposal.clone();

    // Pass 1: shape repair. All historical layouts collapse to the
    // canonical location -> date -> services grouping before any math.
    let regrouped = regroup_by_trusted_date(&proposal.services);

    // Pass 2: reprice every service and rebuild day entries.
    let mut services_out: BTreeMap<String, LocationServices> = BTreeMap::new();
    let mut event_dates: Vec<String> = Vec::new();
    let mut subtotal = 0.0;
    let mut total_pro_revenue = 0.0;
    let mut total_appointments: i64 = 0;

    for (location, days) in regrouped {
        let mut day_map: BTreeMap<String, DayEntry> = BTreeMap::new();
        for (date, mut services) in days {
            let mut day_cost = 0.0;
            let mut day_appointments: i64 = 0;
            for service in &mut services {
                reconcile_mindfulness(service);
                reprice(service);
                day_cost += service.service_cost;
                day_appointments += service.total_appointments.numeric();
                total_pro_revenue += service.pro_revenue;
            }
            subtotal += day_cost;
            total_appointments += day_appointments;
            event_dates.push(date.clone());
            day_map.insert(
                date,
                DayEntry {
                    services,
                    total_cost: round_money(day_cost),
                    total_appointments: day_appointments,
                },
            );
        }
        services_out.insert(location, LocationServices::ByDate(day_map));
    }
    sort_event_dates(&mut event_dates);

    result.services = services_out;
    for location in result.services.keys() {
        if !result.locations.contains(location) {
            result.locations.push(location.clone());
        }
    }

    let mut subtotal = round_money(subtotal);
    let total_pro_revenue = round_money(total_pro_revenue);

    // Pass 3: proposal-level auto-recurring discount. Only when enough
    // distinct scheduled dates exist and no service already earns a manual
    // recurring discount; the two must never compound.
    let scheduled_dates = event_dates.iter().filter(|date| *date != TBD_DATE).count();
    let manually_recurring = result.has_manual_recurring_service();
    if scheduled_dates >= AUTO_RECURRING_MIN_DATES && !manually_recurring {
        let pct = if scheduled_dates >= RECURRING_DISCOUNT_HIGH_MIN_OCCURRENCES as usize {
            RECURRING_DISCOUNT_HIGH_PCT
        } else {
            RECURRING_DISCOUNT_STANDARD_PCT
        };
        let savings = round_money(subtotal * pct / 100.0);
        debug!(scheduled_dates, pct, savings, "applying auto-recurring discount");
        subtotal = round_money(subtotal - savings);
        result.is_auto_recurring = true;
        result.auto_recurring_discount = pct;
        result.auto_recurring_savings = savings;
    } else {
        // No stale flags survive an edit that removes dates.
        result.is_auto_recurring = false;
        result.auto_recurring_discount = 0.0;
        result.auto_recurring_savings = 0.0;
    }

    // Pass 4: gratuity from the (possibly discounted) subtotal. Profit
    // figures always come from the pre-gratuity subtotal.
    let gratuity_value = result.gratuity_value.unwrap_or(0.0);
    let gratuity_amount = match result.gratuity_type {
        Some(GratuityType::Percentage) => round_money(subtotal * gratuity_value / 100.0),
        Some(GratuityType::Dollar) => round_money(gratuity_value),
        None => 0.0,
    };

    let net_profit = round_money(subtotal - total_pro_revenue);
    let profit_margin =
        if subtotal == 0.0 { 0.0 } else { round_money(net_profit / subtotal * 100.0) };

    result.event_dates = event_dates;
    result.summary = ProposalSummary {
        total_appointments,
        total_event_cost: round_money(subtotal + gratuity_amount),
        total_pro_revenue,
        net_profit,
        profit_margin,
        gratuity_amount,
        subtotal_before_gratuity: subtotal,
    };

    result
}

/// Regroup every service by its most-trustworthy date.
///
/// The service's own `date` wins; the outer day key (or legacy bucket date)
/// is a fallback; a service with no usable date at all lands in the `TBD`
/// bucket rather than being discarded from a stored proposal.
fn regroup_by_trusted_date(
    services: &BTreeMap<String, LocationServices>,
) -> BTreeMap<String, BTreeMap<String, Vec<ServiceSelection>>> {
    let mut out: BTreeMap<String, BTreeMap<String, Vec<ServiceSelection>>> = BTreeMap::new();

    for (location, value) in services {
        let by_date = out.entry(location.clone()).or_default();
        match value {
            LocationServices::DayList(days) => {
                for day in days {
                    for service in &day.services {
                        place(by_date, service, day.date.as_deref());
                    }
                }
            }
            LocationServices::ByDate(days) => {
                for (key, day) in days {
                    for service in &day.services {
                        place(by_date, service, Some(key.as_str()));
                    }
                }
            }
        }
    }

    out
}

fn place(
    by_date: &mut BTreeMap<String, Vec<ServiceSelection>>,
    service: &ServiceSelection,
    fallback: Option<&str>,
) {
    let own = service.date.as_deref().map(normalize_date).unwrap_or_default();
    let date = if own.is_empty() {
        let fallback = fallback.map(normalize_date).unwrap_or_default();
        if fallback.is_empty() { TBD_DATE.to_string() } else { fallback }
    } else {
        own
    };

    let mut placed = service.clone();
    placed.date = Some(date.clone());
    by_date.entry(date).or_default().push(placed);
}

/// Reconcile a mindfulness service's type/length/price to one of the three
/// consistent triples. An explicit type beats an explicit length beats the
/// default intro class.
fn reconcile_mindfulness(service: &mut ServiceSelection) {
    if !service.service_type.is_mindfulness() {
        return;
    }

    let (kind, length, price) = match (service.mindfulness_type, service.class_length) {
        (Some(MindfulnessType::DropIn), _) | (None, Some(30)) => {
            (MindfulnessType::DropIn, 30, MINDFULNESS_PRICE_30_MIN)
        }
        (Some(MindfulnessType::MindfulMovement), _) | (None, Some(60)) => {
            (MindfulnessType::MindfulMovement, 60, MINDFULNESS_PRICE_60_MIN)
        }
        (Some(MindfulnessType::Intro), _) | (None, _) => {
            (MindfulnessType::Intro, 45, MINDFULNESS_PRICE_45_MIN)
        }
    };

    service.mindfulness_type = Some(kind);
    service.class_length = Some(length);
    service.fixed_price = Some(price);
}

/// Reprice a service, including its pricing options. When a tier is
/// selected, the service adopts the tier's figures and mirrors the tier's
/// inputs back onto itself so the proposal "remembers" the chosen option.
fn reprice(service: &mut ServiceSelection) {
    let totals = price_service(service).into_totals();
    service.apply_totals(&totals);

    let Some(options) = service.pricing_options.take() else {
        return;
    };

    let mut adopted: Option<(ServiceTotals, ServiceSelection)> = None;
    let repriced: Vec<_> = options
        .into_iter()
        .map(|mut option| {
            let mut variant = service.clone();
            variant.pricing_options = None;
            if let Some(hours) = option.total_hours {
                variant.total_hours = Some(hours);
            }
            if let Some(pros) = option.num_pros {
                variant.num_pros = Some(pros);
            }
            if let Some(rate) = option.hourly_rate {
                variant.hourly_rate = Some(rate);
            }
            if let Some(discount) = option.discount_percent {
                variant.discount_percent = discount;
            }

            let variant_totals = price_service(&variant).into_totals();
            option.total_cost = variant_totals.service_cost;
            option.total_appointments = variant_totals.total_appointments;
            option.pro_revenue = variant_totals.pro_revenue;

            if option.is_selected {
                adopted = Some((variant_totals, variant));
            }
            option
        })
        .collect();

    if let Some((totals, variant)) = adopted {
        // Mirror the tier's inputs so a later reprice of the bare service
        // reproduces the same figures (idempotence).
        service.total_hours = variant.total_hours;
        service.num_pros = variant.num_pros;
        service.hourly_rate = variant.hourly_rate;
        service.discount_percent = variant.discount_percent;
        service.apply_totals(&totals);
    }

    service.pricing_options = Some(repriced);
}
