//! Shared test helpers for `quotewell-core` integration tests.
//!
//! These helpers provide reusable fixtures and lightweight mocks so that
//! service-layer tests can focus on behaviour instead of boilerplate.

pub mod collaborators;

use quotewell_domain::types::{ClientIntake, EventGroup, ServiceSelection, ServiceType};

/// A complete massage selection for the given date.
pub fn massage_on(date: &str) -> ServiceSelection {
    ServiceSelection {
        service_type: ServiceType::Massage,
        total_hours: Some(4.0),
        num_pros: Some(4),
        app_time: Some(20.0),
        hourly_rate: Some(135.0),
        pro_hourly: Some(70.0),
        date: Some(date.to_string()),
        ..ServiceSelection::default()
    }
}

/// Single-location intake holding the given services.
pub fn intake(client: &str, location: &str, services: Vec<ServiceSelection>) -> ClientIntake {
    ClientIntake {
        name: client.to_string(),
        locations: vec![location.to_string()],
        events: [(location.to_string(), vec![EventGroup { date: None, services }])]
            .into_iter()
            .collect(),
    }
}
