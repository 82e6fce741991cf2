//! Compatibility tests against stored proposal JSON.
//!
//! The hosted backend holds proposal blobs written by several generations
//! of the app. These tests pin the field names the persistence layer
//! depends on and prove that legacy-shaped blobs recalculate into the
//! canonical shape without losing services.

use quotewell_core::recalculate_totals;
use quotewell_domain::types::ProposalData;
use serde_json::{json, Value};

/// Oldest shape: per-location array of day buckets.
const LEGACY_DAY_LIST_BLOB: &str = r#"{
    "clientName": "Acme Corp",
    "locations": ["NYC"],
    "eventDates": [],
    "services": {
        "NYC": [
            {
                "date": "2026-03-05",
                "services": [
                    {
                        "serviceType": "massage",
                        "totalHours": 4,
                        "numPros": 4,
                        "appTime": 20,
                        "hourlyRate": 135,
                        "proHourly": 70
                    }
                ]
            },
            {
                "services": [
                    {
                        "serviceType": "mindfulness",
                        "classLength": 30,
                        "date": "2026-04-10"
                    }
                ]
            }
        ]
    }
}"#;

/// Middle-generation shape: date-keyed map whose inner service dates can
/// disagree with the outer key.
const LEGACY_KEY_DRIFT_BLOB: &str = r#"{
    "clientName": "Acme Corp",
    "locations": ["NYC"],
    "services": {
        "NYC": {
            "2026-03-05": {
                "services": [
                    {
                        "serviceType": "nails",
                        "totalHours": 3,
                        "numPros": 2,
                        "appTime": 30,
                        "hourlyRate": 110,
                        "date": "2026-03-06"
                    }
                ],
                "totalCost": 0,
                "totalAppointments": 0
            }
        }
    }
}"#;

#[test]
fn day_list_blob_recalculates_into_canonical_map() {
    let proposal: ProposalData = serde_json::from_str(LEGACY_DAY_LIST_BLOB).unwrap();
    let result = recalculate_totals(&proposal);

    let days = result.services["NYC"].as_by_date().unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(result.event_dates, vec!["2026-03-05", "2026-04-10"]);

    // The 30-minute mindfulness class reconciled to the drop-in triple.
    let mindfulness = &days["2026-04-10"].services[0];
    assert_eq!(mindfulness.fixed_price, Some(1250.0));
    // Massage day: 4h × $135 × 4 pros; mindfulness day: fixed $1250.
    assert_eq!(result.summary.subtotal_before_gratuity, 2160.0 + 1250.0);
    assert_eq!(result.summary.total_appointments, 48);
}

#[test]
fn drifted_service_date_wins_over_map_key() {
    let proposal: ProposalData = serde_json::from_str(LEGACY_KEY_DRIFT_BLOB).unwrap();
    let result = recalculate_totals(&proposal);

    let days = result.services["NYC"].as_by_date().unwrap();
    assert!(!days.contains_key("2026-03-05"));
    assert_eq!(days["2026-03-06"].services.len(), 1);
    assert_eq!(result.event_dates, vec!["2026-03-06"]);
}

#[test]
fn serialized_schema_keeps_the_legacy_field_names() {
    let proposal: ProposalData = serde_json::from_str(LEGACY_DAY_LIST_BLOB).unwrap();
    let result = recalculate_totals(&proposal);
    let value: Value = serde_json::to_value(&result).unwrap();

    for key in [
        "clientName",
        "locations",
        "eventDates",
        "services",
        "summary",
        "gratuityType",
        "gratuityValue",
        "isAutoRecurring",
        "autoRecurringDiscount",
        "autoRecurringSavings",
    ] {
        assert!(value.get(key).is_some(), "missing top-level key {key}");
    }

    let summary = &value["summary"];
    for key in [
        "totalAppointments",
        "totalEventCost",
        "totalProRevenue",
        "netProfit",
        "profitMargin",
        "gratuityAmount",
        "subtotalBeforeGratuity",
    ] {
        assert!(summary.get(key).is_some(), "missing summary key {key}");
    }

    let massage = &value["services"]["NYC"]["2026-03-05"]["services"][0];
    assert_eq!(massage["serviceType"], json!("massage"));
    assert_eq!(massage["totalAppointments"], json!(48.0));
    assert_eq!(massage["serviceCost"], json!(2160.0));

    let mindfulness = &value["services"]["NYC"]["2026-04-10"]["services"][0];
    assert_eq!(mindfulness["totalAppointments"], json!("unlimited"));
    assert_eq!(mindfulness["mindfulnessType"], json!("drop-in"));
}

#[test]
fn recalculated_blob_round_trips_byte_stable() {
    let proposal: ProposalData = serde_json::from_str(LEGACY_DAY_LIST_BLOB).unwrap();
    let once = recalculate_totals(&proposal);

    let serialized = serde_json::to_string(&once).unwrap();
    let reloaded: ProposalData = serde_json::from_str(&serialized).unwrap();
    let twice = recalculate_totals(&reloaded);

    assert_eq!(once, twice);
    assert_eq!(serialized, serde_json::to_string(&twice).unwrap());
}
