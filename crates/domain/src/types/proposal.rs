//! Proposal aggregate types
//!
//! `ProposalData` is the JSON blob the persistence collaborator stores.
//! Historical blobs exist in three shapes for the per-location `services`
//! value; `LocationServices` is the single ingestion point that accepts all
//! of them (shape repair happens in the recalculator, not here).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::service::ServiceSelection;

/// Services booked for one calendar day at one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DayEntry {
    pub services: Vec<ServiceSelection>,
    pub total_cost: f64,
    /// Numeric appointments only; unlimited services contribute 0.
    pub total_appointments: i64,
}

/// Legacy day bucket: a list entry carrying its own optional date.
///
/// Oldest stored proposals hold services as an ordered list of these per
/// location. The bucket date is a fallback; a service's own `date` wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyDayBucket {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub services: Vec<ServiceSelection>,
}

/// Per-location services value, accepting every historical shape.
///
/// Untagged: a JSON array parses as the legacy day list, an object as the
/// canonical date-keyed map. Recalculation always emits `ByDate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocationServices {
    /// Canonical map keyed by normalized `YYYY-MM-DD` date (or `TBD`).
    /// `BTreeMap` keeps days chronological, with `TBD` sorting last.
    ByDate(BTreeMap<String, DayEntry>),
    /// Legacy array-of-day-buckets shape.
    DayList(Vec<LegacyDayBucket>),
}

impl Default for LocationServices {
    fn default() -> Self {
        Self::ByDate(BTreeMap::new())
    }
}

impl LocationServices {
    /// Canonical view, if this value has already been shape-repaired.
    pub const fn as_by_date(&self) -> Option<&BTreeMap<String, DayEntry>> {
        match self {
            Self::ByDate(map) => Some(map),
            Self::DayList(_) => None,
        }
    }

    /// Iterate every service regardless of shape.
    pub fn services(&self) -> Box<dyn Iterator<Item = &ServiceSelection> + '_> {
        match self {
            Self::ByDate(map) => Box::new(map.values().flat_map(|day| day.services.iter())),
            Self::DayList(days) => Box::new(days.iter().flat_map(|day| day.services.iter())),
        }
    }
}

/// How an optional gratuity is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GratuityType {
    /// Percentage of the (post-discount) subtotal.
    Percentage,
    /// Flat dollar amount.
    Dollar,
}

/// Fully derived money figures for a proposal. Recomputed in full on every
/// recalculation; never edited directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ProposalSummary {
    pub total_appointments: i64,
    /// Final client-facing total: subtotal plus gratuity.
    pub total_event_cost: f64,
    pub total_pro_revenue: f64,
    /// Subtotal minus pro revenue; excludes gratuity.
    pub net_profit: f64,
    /// Percent, from the pre-gratuity subtotal; 0 when the subtotal is 0.
    pub profit_margin: f64,
    pub gratuity_amount: f64,
    pub subtotal_before_gratuity: f64,
}

/// Top-level proposal aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ProposalData {
    pub client_name: String,
    /// Distinct location names, in presentation order.
    pub locations: Vec<String>,
    /// Sorted distinct canonical dates across the proposal, `TBD` last.
    pub event_dates: Vec<String>,
    /// Location -> (date -> day entry) once shape-repaired.
    pub services: BTreeMap<String, LocationServices>,
    pub summary: ProposalSummary,
    pub gratuity_type: Option<GratuityType>,
    pub gratuity_value: Option<f64>,
    pub is_auto_recurring: bool,
    /// Auto-recurring discount percentage (0 when inactive).
    pub auto_recurring_discount: f64,
    /// Dollar amount saved by the auto-recurring discount.
    pub auto_recurring_savings: f64,
}

impl ProposalData {
    /// Iterate every service across all locations and shapes.
    pub fn all_services(&self) -> impl Iterator<Item = &ServiceSelection> {
        self.services.values().flat_map(LocationServices::services)
    }

    /// Whether any service carries a usable manual recurrence declaration.
    pub fn has_manual_recurring_service(&self) -> bool {
        self.all_services().any(ServiceSelection::has_manual_recurrence)
    }
}

/// One dated group of selections in a client's intake form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EventGroup {
    /// Group-level date; a fallback for services without their own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub services: Vec<ServiceSelection>,
}

/// Raw builder input: a client and their per-location selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientIntake {
    pub name: String,
    pub locations: Vec<String>,
    /// Location -> event groups.
    pub events: BTreeMap<String, Vec<EventGroup>>,
}

/// Lifecycle state of a stored proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    #[default]
    Draft,
    Sent,
    Accepted,
    Declined,
}

/// Persistence-facing wrapper: the proposal blob plus record metadata.
///
/// The engine only touches these through the repository port; the hosted
/// backend owns the record's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalRecord {
    pub id: Uuid,
    pub client_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_email: Option<String>,
    pub status: ProposalStatus,
    /// Opaque secondary lookup token for client-facing share links.
    pub share_token: String,
    pub proposal: ProposalData,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_services_parses_canonical_map_shape() {
        let blob = r#"{
            "2026-03-05": { "services": [], "totalCost": 0, "totalAppointments": 0 }
        }"#;
        let parsed: LocationServices = serde_json::from_str(blob).unwrap();
        assert!(parsed.as_by_date().is_some());
    }

    #[test]
    fn location_services_parses_legacy_array_shape() {
        let blob = r#"[
            { "date": "2026-03-05", "services": [{ "serviceType": "nails" }] },
            { "services": [] }
        ]"#;
        let parsed: LocationServices = serde_json::from_str(blob).unwrap();
        assert!(parsed.as_by_date().is_none());
        assert_eq!(parsed.services().count(), 1);
    }

    #[test]
    fn day_keys_sort_chronologically_with_tbd_last() {
        let mut map: BTreeMap<String, DayEntry> = BTreeMap::new();
        map.insert("TBD".into(), DayEntry::default());
        map.insert("2026-05-01".into(), DayEntry::default());
        map.insert("2026-01-15".into(), DayEntry::default());

        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["2026-01-15", "2026-05-01", "TBD"]);
    }

    #[test]
    fn proposal_defaults_deserialize_from_sparse_blob() {
        let blob = r#"{ "clientName": "Acme" }"#;
        let proposal: ProposalData = serde_json::from_str(blob).unwrap();
        assert_eq!(proposal.client_name, "Acme");
        assert!(!proposal.is_auto_recurring);
        assert!(proposal.gratuity_type.is_none());
    }
}
