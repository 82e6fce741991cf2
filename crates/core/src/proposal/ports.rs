//! Port interfaces for proposal persistence and outbound notifications
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations (the hosted document store and the
//! transactional email provider).

use async_trait::async_trait;
use quotewell_domain::{ProposalRecord, Result};
use uuid::Uuid;

/// Trait for storing and retrieving proposal records
#[async_trait]
pub trait ProposalRepository: Send + Sync {
    /// Persist a new proposal record
    async fn create(&self, record: ProposalRecord) -> Result<ProposalRecord>;

    /// Look up a record by its id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProposalRecord>>;

    /// Look up a record by its opaque share token
    async fn find_by_share_token(&self, token: &str) -> Result<Option<ProposalRecord>>;

    /// Overwrite an existing record
    async fn update(&self, record: ProposalRecord) -> Result<ProposalRecord>;

    /// Delete a record by id
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// All records stored for one client, newest first
    async fn list_for_client(&self, client_name: &str) -> Result<Vec<ProposalRecord>>;
}

/// Named outbound email template plus its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationTemplate {
    /// A proposal is ready for the client to review.
    ProposalReady {
        client_name: String,
        proposal_url: String,
    },
    /// A headshot gallery is ready for an employee to browse.
    GalleryReady {
        employee_name: String,
        gallery_url: String,
        event_name: String,
    },
}

/// Trait for delivering outbound notifications
///
/// Implementations raise `QuoteWellError::Notification` on transport
/// failure; the engine never swallows a failed delivery.
#[async_trait]
pub trait NotificationPort: Send + Sync {
    /// Attempt delivery of one templated message
    async fn send(&self, recipient: &str, template: &NotificationTemplate) -> Result<()>;
}
