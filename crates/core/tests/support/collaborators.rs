//! Mock collaborator implementations for testing
//!
//! Provides in-memory mocks for the proposal repository and notification
//! ports, enabling deterministic service tests without a hosted backend.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use quotewell_core::{NotificationPort, NotificationTemplate, ProposalRepository};
use quotewell_domain::types::ProposalRecord;
use quotewell_domain::{QuoteWellError, Result as DomainResult};
use uuid::Uuid;

/// In-memory mock for `ProposalRepository`.
///
/// Stores records in a shared map so a clone of the mock observes the
/// service's writes.
#[derive(Default, Clone)]
pub struct MockProposalRepository {
    records: Arc<Mutex<BTreeMap<Uuid, ProposalRecord>>>,
}

impl MockProposalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Direct lookup for assertions, bypassing the port.
    pub fn get(&self, id: Uuid) -> Option<ProposalRecord> {
        self.records.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl ProposalRepository for MockProposalRepository {
    async fn create(&self, record: ProposalRecord) -> DomainResult<ProposalRecord> {
        self.records.lock().unwrap().insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ProposalRecord>> {
        Ok(self.records.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_share_token(&self, token: &str) -> DomainResult<Option<ProposalRecord>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .values()
            .find(|record| record.share_token == token)
            .cloned())
    }

    async fn update(&self, record: ProposalRecord) -> DomainResult<ProposalRecord> {
        let mut records = self.records.lock().unwrap();
        if !records.contains_key(&record.id) {
            return Err(QuoteWellError::NotFound(format!("proposal {}", record.id)));
        }
        records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.records.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn list_for_client(&self, client_name: &str) -> DomainResult<Vec<ProposalRecord>> {
        let mut records: Vec<ProposalRecord> = self
            .records
            .lock()
            .unwrap()
            .values()
            .filter(|record| record.client_name == client_name)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}

/// In-memory mock for `NotificationPort`.
///
/// Records every delivery attempt; can be configured to fail to exercise
/// the transport-error path.
#[derive(Default, Clone)]
pub struct MockNotifier {
    sent: Arc<Mutex<Vec<(String, NotificationTemplate)>>>,
    fail: Arc<Mutex<bool>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent send fail with a transport error.
    pub fn fail_next_sends(&self) {
        *self.fail.lock().unwrap() = true;
    }

    /// Deliveries attempted so far.
    pub fn sent(&self) -> Vec<(String, NotificationTemplate)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationPort for MockNotifier {
    async fn send(&self, recipient: &str, template: &NotificationTemplate) -> DomainResult<()> {
        if *self.fail.lock().unwrap() {
            return Err(QuoteWellError::Notification(String::from("smtp connection refused")));
        }
        self.sent.lock().unwrap().push((recipient.to_string(), template.clone()));
        Ok(())
    }
}
