//! Proposal lifecycle service - core business logic

use std::sync::Arc;

use chrono::Utc;
use quotewell_domain::types::{ClientIntake, GratuityType, ProposalRecord, ProposalStatus};
use quotewell_domain::{QuoteWellError, Result};
use tracing::{debug, error};
use uuid::Uuid;

use super::builder::build_proposal;
use super::ports::{NotificationPort, NotificationTemplate, ProposalRepository};
use super::recalculate::recalculate_totals;

/// Proposal lifecycle service
///
/// Orchestrates the pure engine against the persistence and notification
/// collaborators: build-and-store, recalculate-and-store after edits, and
/// client-facing sends. Engine arithmetic is never altered here; this layer
/// only adds boundary validation and record metadata.
pub struct ProposalService {
    repository: Arc<dyn ProposalRepository>,
    notifier: Arc<dyn NotificationPort>,
    /// Base URL prefixed to share tokens in outbound proposal links.
    share_base_url: String,
}

impl ProposalService {
    /// Create a new proposal service
    pub fn new(repository: Arc<dyn ProposalRepository>, notifier: Arc<dyn NotificationPort>) -> Self {
        Self { repository, notifier, share_base_url: String::from("https://app.quotewell.co/p") }
    }

    /// Override the base URL used for client-facing share links.
    #[must_use]
    pub fn with_share_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.share_base_url = base_url.into();
        self
    }

    /// Build a proposal from an intake and persist it as a draft record.
    pub async fn create_proposal(
        &self,
        intake: &ClientIntake,
        client_email: Option<String>,
    ) -> Result<ProposalRecord> {
        if intake.name.trim().is_empty() {
            return Err(QuoteWellError::InvalidInput(String::from("client name is required")));
        }

        let proposal = build_proposal(intake);
        let now = Utc::now();
        let record = ProposalRecord {
            id: Uuid::new_v4(),
            client_name: intake.name.clone(),
            client_email,
            status: ProposalStatus::Draft,
            share_token: Uuid::new_v4().simple().to_string(),
            proposal,
            created_at: now,
            updated_at: now,
        };

        debug!(id = %record.id, client = record.client_name.as_str(), "persisting new proposal");
        self.repository.create(record).await
    }

    /// Re-derive a stored proposal's totals and persist the result.
    ///
    /// Callers invoke this after any edit to services or recurrence flags;
    /// the recalculation also repairs legacy-shaped blobs on the way.
    pub async fn refresh_totals(&self, id: Uuid) -> Result<ProposalRecord> {
        let mut record = self.load(id).await?;
        record.proposal = recalculate_totals(&record.proposal);
        record.updated_at = Utc::now();
        self.repository.update(record).await
    }

    /// Set or clear the gratuity and persist the recalculated proposal.
    pub async fn set_gratuity(
        &self,
        id: Uuid,
        gratuity: Option<(GratuityType, f64)>,
    ) -> Result<ProposalRecord> {
        if let Some((_, value)) = gratuity {
            if value < 0.0 {
                return Err(QuoteWellError::InvalidInput(String::from(
                    "gratuity value cannot be negative",
                )));
            }
        }

        let mut record = self.load(id).await?;
        match gratuity {
            Some((kind, value)) => {
                record.proposal.gratuity_type = Some(kind);
                record.proposal.gratuity_value = Some(value);
            }
            None => {
                record.proposal.gratuity_type = None;
                record.proposal.gratuity_value = None;
            }
        }
        record.proposal = recalculate_totals(&record.proposal);
        record.updated_at = Utc::now();
        self.repository.update(record).await
    }

    /// Email a client their proposal link and mark the record sent.
    ///
    /// Delivery failure propagates before the status changes, so a proposal
    /// is never marked sent without a successful handoff to the provider.
    pub async fn send_proposal(&self, id: Uuid, recipient: &str) -> Result<ProposalRecord> {
        let mut record = self.load(id).await?;

        let template = NotificationTemplate::ProposalReady {
            client_name: record.client_name.clone(),
            proposal_url: format!("{}/{}", self.share_base_url, record.share_token),
        };
        if let Err(err) = self.notifier.send(recipient, &template).await {
            error!(id = %id, error = %err, "proposal notification failed");
            return Err(err);
        }

        record.status = ProposalStatus::Sent;
        record.updated_at = Utc::now();
        self.repository.update(record).await
    }

    /// Notify an employee that their headshot gallery is ready.
    pub async fn send_gallery_notification(
        &self,
        recipient: &str,
        employee_name: &str,
        gallery_url: &str,
        event_name: &str,
    ) -> Result<()> {
        let template = NotificationTemplate::GalleryReady {
            employee_name: employee_name.to_string(),
            gallery_url: gallery_url.to_string(),
            event_name: event_name.to_string(),
        };
        self.notifier.send(recipient, &template).await
    }

    /// Fetch a record by share token (the public proposal-view path).
    pub async fn find_by_share_token(&self, token: &str) -> Result<Option<ProposalRecord>> {
        self.repository.find_by_share_token(token).await
    }

    async fn load(&self, id: Uuid) -> Result<ProposalRecord> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| QuoteWellError::NotFound(format!("proposal {id}")))
    }
}
