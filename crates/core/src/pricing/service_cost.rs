//! Service cost calculator
//!
//! Prices one service selection: appointment count, client-facing cost,
//! and staff payout, branching by service category. Discounts apply in a
//! fixed order: flat percentage first, then any recurring discount.
//!
//! The calculator never fails. A non-mindfulness service missing its
//! required numeric fields is `Pending` (the builder UI prices services as
//! the user fills them in); malformed numerics propagate as-is, upstream
//! validation is the caller's job.

use quotewell_domain::constants::MINDFULNESS_PRO_SHARE;
use quotewell_domain::types::{
    AppointmentCount, ServiceQuote, ServiceSelection, ServiceTotals, ServiceType,
};

use super::discounts::recurring_discount_for;
use super::round_money;

/// Price a single service selection.
pub fn price_service(service: &ServiceSelection) -> ServiceQuote {
    let Some(base) = base_figures(service) else {
        return ServiceQuote::Pending;
    };

    let original_price = base.service_cost;
    let mut service_cost = base.service_cost;

    if service.discount_percent > 0.0 {
        service_cost *= 1.0 - service.discount_percent / 100.0;
    }

    let mut recurring_discount = 0.0;
    let mut recurring_savings = 0.0;
    if service.has_manual_recurrence() {
        let pct = recurring_discount_for(service.recurring_frequency.as_ref());
        if pct > 0.0 {
            let rate = pct / 100.0;
            recurring_savings = service_cost * rate;
            service_cost *= 1.0 - rate;
            recurring_discount = pct;
        }
    }

    ServiceQuote::Priced(ServiceTotals {
        total_appointments: base.total_appointments,
        service_cost: round_money(service_cost),
        pro_revenue: round_money(base.pro_revenue),
        original_price: round_money(original_price),
        recurring_discount,
        recurring_savings: round_money(recurring_savings),
    })
}

/// Pre-discount figures for one service, or `None` when the configuration
/// is still incomplete.
struct BaseFigures {
    total_appointments: AppointmentCount,
    service_cost: f64,
    pro_revenue: f64,
}

fn base_figures(service: &ServiceSelection) -> Option<BaseFigures> {
    if service.service_type.is_mindfulness() {
        // Fixed-price sessions: no per-appointment math, fixed 30% payout.
        let service_cost = service.effective_fixed_price();
        return Some(BaseFigures {
            total_appointments: AppointmentCount::Unlimited,
            service_cost,
            pro_revenue: service_cost * MINDFULNESS_PRO_SHARE,
        });
    }

    let (Some(hours), Some(pros), Some(app_time)) =
        (service.total_hours, service.num_pros, service.app_time)
    else {
        return None;
    };
    if hours == 0.0 || pros == 0 || app_time == 0.0 {
        return None;
    }

    let pros_f = f64::from(pros);
    #[allow(clippy::cast_possible_truncation)]
    let appointments = (hours * (60.0 / app_time) * pros_f).floor() as i64;
    let total_appointments = AppointmentCount::Limited(appointments.max(0));

    let pro_hourly = service.pro_hourly.unwrap_or(0.0);

    if service.service_type == ServiceType::Headshot {
        // Retouching bills per appointment on top of the staff payout.
        let pro_revenue = hours * pros_f * pro_hourly;
        let retouching = service.retouching_cost.unwrap_or(0.0);
        #[allow(clippy::cast_precision_loss)]
        let service_cost = pro_revenue + appointments.max(0) as f64 * retouching;
        return Some(BaseFigures { total_appointments, service_cost, pro_revenue });
    }

    // Time-and-materials: massage, hair & makeup, nails.
    let hourly_rate = service.hourly_rate.unwrap_or(0.0);
    let early_arrival = service.early_arrival.unwrap_or(0.0);
    Some(BaseFigures {
        total_appointments,
        service_cost: hours * hourly_rate * pros_f,
        pro_revenue: hours * pros_f * pro_hourly + early_arrival * pros_f,
    })
}
