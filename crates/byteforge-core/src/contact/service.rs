use std::sync::Arc;

use tracing::{info, warn};

use super::mail::OutgoingMail;
use super::mailer::Mailer;
use super::models::{ContactRequest, Lead, ValidationError};
use crate::config::MailerConfig;

/// Why a submission was not delivered
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    /// Client-fixable: required fields missing
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Transport or provider failure
    #[error("{0}")]
    Delivery(String),
}

impl From<ContactError> for crate::Error {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::Validation(e) => crate::Error::Validation(e),
            ContactError::Delivery(msg) => crate::Error::Delivery(msg),
        }
    }
}

/// Validates submissions and hands them to the configured mailer
pub struct ContactService {
    mailer: Arc<dyn Mailer>,
    config: MailerConfig,
}

impl ContactService {
    pub fn new(mailer: Arc<dyn Mailer>, config: MailerConfig) -> Self {
        Self { mailer, config }
    }

    /// Validate, compose and deliver a submission
    ///
    /// Validation failures never reach the mailer. Delivery is attempted
    /// exactly once.
    pub async fn submit(&self, request: &ContactRequest) -> Result<Lead, ContactError> {
        let lead = request.validate()?;
        let mail = OutgoingMail::for_lead(&lead, &self.config);

        match self.mailer.deliver(&mail).await {
            Ok(()) => {
                info!(
                    lead_id = %lead.id,
                    transport = self.mailer.name(),
                    "Lead delivered: {}",
                    mail.subject
                );
                Ok(lead)
            }
            Err(e) => {
                warn!(lead_id = %lead.id, transport = self.mailer.name(), "Lead delivery failed: {}", e);
                Err(ContactError::Delivery(e.to_string()))
            }
        }
    }
}
