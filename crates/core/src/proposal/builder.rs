//! Proposal builder
//!
//! Flattens a client's per-location event groups into a normalized
//! `ProposalData`: services grouped by location then canonical date, with
//! every derived figure delegated to the recalculator so fresh builds and
//! later edits share one source of truth for totals.

use std::collections::BTreeMap;

use quotewell_domain::types::{
    ClientIntake, DayEntry, LocationServices, ProposalData, ServiceSelection,
};
use quotewell_domain::utils::date::normalize_date;
use tracing::warn;

use super::recalculate::recalculate_totals;

/// A service excluded from a build because its date failed to normalize.
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedService {
    pub location: String,
    /// The raw date that failed to normalize, when one was present.
    pub raw_date: Option<String>,
    pub service: ServiceSelection,
}

/// A built proposal plus the services the build had to drop.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildReport {
    pub proposal: ProposalData,
    pub dropped: Vec<DroppedService>,
}

/// Build a fully normalized proposal from a client intake.
///
/// Services whose date fails to normalize are dropped (with a logged
/// warning). Callers that need to surface the drops use
/// [`build_proposal_with_report`]; the output proposal is identical.
pub fn build_proposal(intake: &ClientIntake) -> ProposalData {
    build_proposal_with_report(intake).proposal
}

/// Build a proposal and report every dropped service.
pub fn build_proposal_with_report(intake: &ClientIntake) -> BuildReport {
    let mut dropped = Vec::new();
    let mut grouped: BTreeMap<String, BTreeMap<String, Vec<ServiceSelection>>> = BTreeMap::new();

    for location in locations_in_order(intake) {
        let Some(groups) = intake.events.get(&location) else {
            continue;
        };
        for group in groups {
            for service in &group.services {
                // The service's own date wins; the group date is a fallback.
                let raw_date = service.date.clone().or_else(|| group.date.clone());
                let normalized = raw_date.as_deref().map(normalize_date).unwrap_or_default();
                if normalized.is_empty() {
                    warn!(
                        location = location.as_str(),
                        raw_date = raw_date.as_deref().unwrap_or(""),
                        "dropping service with unusable date from proposal build"
                    );
                    dropped.push(DroppedService {
                        location: location.clone(),
                        raw_date,
                        service: service.clone(),
                    });
                    continue;
                }

                let mut placed = service.clone();
                placed.date = Some(normalized.clone());
                grouped
                    .entry(location.clone())
                    .or_default()
                    .entry(normalized)
                    .or_default()
                    .push(placed);
            }
        }
    }

    let services = grouped
        .into_iter()
        .map(|(location, days)| {
            let day_map = days
                .into_iter()
                .map(|(date, services)| (date, DayEntry { services, ..DayEntry::default() }))
                .collect();
            (location, LocationServices::ByDate(day_map))
        })
        .collect();

    let skeleton = ProposalData {
        client_name: intake.name.clone(),
        locations: locations_in_order(intake),
        services,
        ..ProposalData::default()
    };

    // Every derived field (day totals, eventDates, summary, gratuity,
    // auto-recurring) comes from the single recalculation path.
    BuildReport { proposal: recalculate_totals(&skeleton), dropped }
}

/// Declared locations in presentation order, deduplicated, with any
/// locations that only appear in the events map appended.
fn locations_in_order(intake: &ClientIntake) -> Vec<String> {
    let mut ordered: Vec<String> = Vec::new();
    for location in intake.locations.iter().chain(intake.events.keys()) {
        if !ordered.iter().any(|seen| seen == location) {
            ordered.push(location.clone());
        }
    }
    ordered
}
